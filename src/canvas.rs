use crate::error::ExportError;
use crate::geometry_utilities::canvas_rect;
use crate::geometry_utilities::types::*;
use euclid::{point2 as point, vec2 as vector};
use serde::{Deserialize, Serialize};

/// Dimensions of the authoring canvas in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasFormat {
    pub width: f64,
    pub height: f64,
}

/// Maps canvas pixels into the letterboxed unit square.
///
/// The longer canvas side spans exactly `[0, 1]`, the shorter one is centered.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MapProjection {
    pub map_size: f64,
    pub offset: MapVector,
}

impl CanvasFormat {
    pub fn new(width: f64, height: f64) -> CanvasFormat {
        CanvasFormat { width, height }
    }

    pub fn size(&self) -> CanvasSize {
        CanvasSize::new(self.width, self.height)
    }

    pub fn map_size(&self) -> f64 {
        self.width.max(self.height)
    }

    pub fn validate(&self) -> Result<(), ExportError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(ExportError::InvalidCanvas {
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn contains(&self, p: CanvasPoint) -> bool {
        // Inclusive on all edges, unlike euclid::Rect::contains
        let rect = canvas_rect(self.size());
        p.x >= rect.min_x() && p.x <= rect.max_x() && p.y >= rect.min_y() && p.y <= rect.max_y()
    }

    pub fn projection(&self) -> Result<MapProjection, ExportError> {
        self.validate()?;
        let map_size = self.map_size();
        Ok(MapProjection {
            map_size,
            offset: vector(
                (map_size - self.width) / (2.0 * map_size),
                (map_size - self.height) / (2.0 * map_size),
            ),
        })
    }
}

impl MapProjection {
    pub fn canvas_to_map_point(&self, p: CanvasPoint) -> MapPoint {
        point(p.x / self.map_size + self.offset.x, p.y / self.map_size + self.offset.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_letterbox() {
        let projection = CanvasFormat::new(1920.0, 1080.0).projection().unwrap();
        assert_eq!(projection.map_size, 1920.0);
        assert_eq!(projection.offset, vector(0.0, 0.21875));
        assert_eq!(projection.canvas_to_map_point(point(960.0, 540.0)), point(0.5, 0.5));
        assert_eq!(projection.canvas_to_map_point(point(0.0, 0.0)), point(0.0, 0.21875));
        assert_eq!(projection.canvas_to_map_point(point(1920.0, 1080.0)), point(1.0, 0.78125));
    }

    #[test]
    fn test_portrait_letterbox() {
        let projection = CanvasFormat::new(500.0, 1000.0).projection().unwrap();
        assert_eq!(projection.offset, vector(0.25, 0.0));
        assert_eq!(projection.canvas_to_map_point(point(0.0, 1000.0)), point(0.25, 1.0));
        assert_eq!(projection.canvas_to_map_point(point(500.0, 0.0)), point(0.75, 0.0));
    }

    #[test]
    fn test_square_has_no_offset() {
        let projection = CanvasFormat::new(800.0, 800.0).projection().unwrap();
        assert_eq!(projection.offset, vector(0.0, 0.0));
        assert_eq!(projection.canvas_to_map_point(point(400.0, 200.0)), point(0.5, 0.25));
    }

    #[test]
    fn test_invalid_canvas() {
        for &(w, h) in &[(0.0, 100.0), (100.0, -1.0), (f64::NAN, 100.0), (f64::INFINITY, 1.0)] {
            match CanvasFormat::new(w, h).projection() {
                Err(ExportError::InvalidCanvas { .. }) => {}
                other => panic!("expected InvalidCanvas for {}x{}, got {:?}", w, h, other),
            }
        }
    }

    #[test]
    fn test_contains() {
        let canvas = CanvasFormat::new(100.0, 50.0);
        assert!(canvas.contains(point(0.0, 0.0)));
        assert!(canvas.contains(point(100.0, 50.0)));
        assert!(!canvas.contains(point(100.5, 10.0)));
        assert!(!canvas.contains(point(10.0, -0.1)));
    }
}
