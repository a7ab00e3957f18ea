use crate::error::ExportError;
use crate::track::{TrackOptions, WAYPOINT_WIDTH};
use crate::track_writer::{OutputStyle, TrackFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything one export run needs besides the scene itself.
///
/// Every field has a default, so a config file only has to list what it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Node that owns the track path.
    pub node: String,
    /// Path element inside `node`.
    pub element: String,
    pub sample_time: f64,
    pub gate_width: f64,
    pub close_loop: bool,
    pub style: OutputStyle,
    pub variable: String,
    pub destination: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            node: "RotoPaint1".to_owned(),
            element: "Racetrack".to_owned(),
            sample_time: 1.0,
            gate_width: WAYPOINT_WIDTH,
            close_loop: true,
            style: OutputStyle::Script,
            variable: "SolarSailorMap".to_owned(),
            destination: PathBuf::from("map.js"),
        }
    }
}

impl ExportConfig {
    pub fn from_json(text: &str) -> Result<ExportConfig, ExportError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &std::path::Path) -> Result<ExportConfig, ExportError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn track_options(&self) -> TrackOptions {
        TrackOptions {
            gate_width: self.gate_width,
            close_loop: self.close_loop,
        }
    }

    pub fn track_format(&self) -> TrackFormat {
        TrackFormat::from_style(self.style, &self.variable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_historic_exporter() {
        let config = ExportConfig::from_json("{}").unwrap();
        assert_eq!(config, ExportConfig::default());
        assert_eq!(config.node, "RotoPaint1");
        assert_eq!(config.element, "Racetrack");
        assert_eq!(config.sample_time, 1.0);
        assert_eq!(config.track_options(), TrackOptions::default());
        assert_eq!(config.track_format(), TrackFormat::script("SolarSailorMap"));
    }

    #[test]
    fn test_partial_override() {
        let config = ExportConfig::from_json(
            r#"{ "element": "Track2", "gate_width": 0.15, "close_loop": false, "style": "object", "destination": "out/track.js" }"#,
        )
        .unwrap();
        assert_eq!(config.node, "RotoPaint1");
        assert_eq!(config.element, "Track2");
        assert_eq!(config.track_options().gate_width, 0.15);
        assert!(!config.track_options().close_loop);
        assert_eq!(config.track_format(), TrackFormat::object());
        assert_eq!(config.destination, PathBuf::from("out/track.js"));
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        assert!(ExportConfig::from_json(r#"{ "style": "yaml" }"#).is_err());
    }
}
