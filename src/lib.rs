pub mod canvas;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod geometry_utilities;
pub mod path;
pub mod source;
pub mod track;
pub mod track_writer;

pub use crate::canvas::CanvasFormat;
pub use crate::config::ExportConfig;
pub use crate::document::SceneDocument;
pub use crate::error::ExportError;
pub use crate::export::export;
pub use crate::source::{ControlPointSample, PathSource, SampledPath};
pub use crate::track::{build_track, Track, TrackOptions, Waypoint};
pub use crate::track_writer::{write_track, TrackFormat};
