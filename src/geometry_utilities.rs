use euclid;
use types::*;

pub mod types {
    /// Pixel space of the authoring canvas.
    pub struct CanvasSpace;
    /// Letterboxed unit square the game reads.
    pub struct MapSpace;
    pub type CanvasPoint = euclid::Point2D<f64, CanvasSpace>;
    pub type CanvasVector = euclid::Vector2D<f64, CanvasSpace>;
    pub type CanvasSize = euclid::Size2D<f64, CanvasSpace>;
    pub type CanvasRect = euclid::Rect<f64, CanvasSpace>;
    pub type MapPoint = euclid::Point2D<f64, MapSpace>;
    pub type MapVector = euclid::Vector2D<f64, MapSpace>;
}

/// Rotates `v` by 90 degrees counter-clockwise.
pub fn perpendicular<U>(v: euclid::Vector2D<f64, U>) -> euclid::Vector2D<f64, U> {
    euclid::Vector2D::new(-v.y, v.x)
}

/// Unit vector perpendicular to `tangent`, or `None` when the tangent has no usable direction.
pub fn unit_normal<U>(tangent: euclid::Vector2D<f64, U>) -> Option<euclid::Vector2D<f64, U>> {
    let perp = perpendicular(tangent);
    // hypot avoids overflowing on long but finite tangents
    let len = perp.x.hypot(perp.y);
    if len > 0.0 && len.is_finite() {
        Some(perp / len)
    } else {
        None
    }
}

pub fn lerp_point<U>(a: euclid::Point2D<f64, U>, b: euclid::Point2D<f64, U>, t: f64) -> euclid::Point2D<f64, U> {
    a + (b - a) * t
}

pub fn canvas_rect(size: CanvasSize) -> CanvasRect {
    CanvasRect::new(euclid::point2(0.0, 0.0), size)
}
