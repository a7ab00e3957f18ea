use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no node named '{node}' in the scene")]
    MissingNode { node: String },

    #[error("node '{node}' has no path element named '{element}'")]
    MissingElement { node: String, element: String },

    #[error("control point {index} has a zero-length or non-finite tangent")]
    DegenerateGeometry { index: usize },

    #[error("control point {index} has a non-finite position")]
    NonFiniteInput { index: usize },

    #[error("gate width must be positive and finite, got {width}")]
    InvalidGateWidth { width: f64 },

    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("path has no control points")]
    EmptyPath,

    /// Every keyframe of an element must describe the same number of control points.
    #[error("keyframes of '{element}' disagree on point count: expected {expected}, found {found}")]
    MismatchedKeyframes {
        element: String,
        expected: usize,
        found: usize,
    },

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene data: {0}")]
    Parse(#[from] serde_json::Error),
}
