use crate::canvas::CanvasFormat;
use crate::error::ExportError;
use crate::geometry_utilities::types::*;
use crate::geometry_utilities::unit_normal;
use crate::source::ControlPointSample;
use log::{debug, warn};

/// Gate width used by the map exporter, in map units.
pub const WAYPOINT_WIDTH: f64 = 0.08;
/// Gate width the game uses for its built-in fallback track.
pub const GAME_WAYPOINT_WIDTH: f64 = 0.15;

/// A checkpoint on the racing line. The gate runs from `gate_a` to `gate_b` across the path.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Waypoint {
    pub center: MapPoint,
    pub gate_a: MapPoint,
    pub gate_b: MapPoint,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub waypoints: Vec<Waypoint>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackOptions {
    pub gate_width: f64,
    /// Repeat the first waypoint at the end so the game can treat the lap as a plain sequence.
    pub close_loop: bool,
}

impl Default for TrackOptions {
    fn default() -> Self {
        TrackOptions {
            gate_width: WAYPOINT_WIDTH,
            close_loop: true,
        }
    }
}

impl Track {
    pub fn num_waypoints(&self) -> u32 {
        self.waypoints.len() as u32
    }
}

pub fn build_track(
    canvas: CanvasFormat,
    samples: &[ControlPointSample],
    options: &TrackOptions,
) -> Result<Track, ExportError> {
    let projection = canvas.projection()?;
    if !(options.gate_width.is_finite() && options.gate_width > 0.0) {
        return Err(ExportError::InvalidGateWidth {
            width: options.gate_width,
        });
    }
    if samples.is_empty() {
        return Err(ExportError::EmptyPath);
    }

    let half_width = options.gate_width * 0.5;
    let mut waypoints = Vec::with_capacity(samples.len() + 1);
    for (index, sample) in samples.iter().enumerate() {
        if !(sample.center.x.is_finite() && sample.center.y.is_finite()) {
            return Err(ExportError::NonFiniteInput { index });
        }
        if !canvas.contains(sample.center) {
            warn!(
                "control point {} at ({}, {}) lies outside the {}x{} canvas",
                index, sample.center.x, sample.center.y, canvas.width, canvas.height
            );
        }

        // Scaling into map space is uniform, so the canvas normal is also the map normal.
        let normal: MapVector = unit_normal(sample.tangent)
            .ok_or(ExportError::DegenerateGeometry { index })?
            .cast_unit();
        let center = projection.canvas_to_map_point(sample.center);
        let waypoint = Waypoint {
            center,
            gate_a: center + normal * half_width,
            gate_b: center + normal * -half_width,
        };
        debug!("waypoint {}: {:?}", index, waypoint);
        waypoints.push(waypoint);
    }

    if options.close_loop {
        let first = waypoints[0];
        waypoints.push(first);
    }

    Ok(Track { waypoints })
}
