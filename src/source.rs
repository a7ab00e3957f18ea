use crate::canvas::CanvasFormat;
use crate::error::ExportError;
use crate::geometry_utilities::types::*;

/// A control point as seen at one instant: where it is and where the path heads next.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ControlPointSample {
    pub center: CanvasPoint,
    pub tangent: CanvasVector,
}

impl ControlPointSample {
    pub fn new(center: CanvasPoint, tangent: CanvasVector) -> ControlPointSample {
        ControlPointSample { center, tangent }
    }
}

/// Anything that can hand over an ordered track path.
///
/// Authoring-tool integrations implement this; the track builder only ever sees samples.
pub trait PathSource {
    fn canvas(&self) -> CanvasFormat;

    /// Control points in path order, evaluated at `time`.
    fn sample(&self, time: f64) -> Result<Vec<ControlPointSample>, ExportError>;
}

/// Samples that were already evaluated elsewhere. Time is ignored.
#[derive(Clone, Debug)]
pub struct SampledPath {
    pub canvas: CanvasFormat,
    pub samples: Vec<ControlPointSample>,
}

impl SampledPath {
    pub fn new(canvas: CanvasFormat, samples: Vec<ControlPointSample>) -> SampledPath {
        SampledPath { canvas, samples }
    }
}

impl PathSource for SampledPath {
    fn canvas(&self) -> CanvasFormat {
        self.canvas
    }

    fn sample(&self, _time: f64) -> Result<Vec<ControlPointSample>, ExportError> {
        Ok(self.samples.clone())
    }
}
