use crate::track::Track;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

pub const GENERATED_HEADER: &str = "// Auto-generated, don't edit directly";

/// Layout of the emitted track file.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackFormat {
    /// Comment written on the first line.
    pub header: Option<String>,
    /// When set the object is bound to a global, `var <name> = { ... };`.
    pub variable: Option<String>,
    pub quote_keys: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Script the game loads directly, bound to a global variable.
    Script,
    /// Bare object literal.
    Object,
}

impl TrackFormat {
    pub fn script(variable: &str) -> TrackFormat {
        TrackFormat {
            header: Some(GENERATED_HEADER.to_owned()),
            variable: Some(variable.to_owned()),
            quote_keys: true,
        }
    }

    pub fn object() -> TrackFormat {
        TrackFormat {
            header: None,
            variable: None,
            quote_keys: false,
        }
    }

    pub fn from_style(style: OutputStyle, variable: &str) -> TrackFormat {
        match style {
            OutputStyle::Script => TrackFormat::script(variable),
            OutputStyle::Object => TrackFormat::object(),
        }
    }

    fn key(&self, name: &str) -> String {
        if self.quote_keys {
            format!("'{}'", name)
        } else {
            name.to_owned()
        }
    }
}

pub fn write_track<W: Write>(track: &Track, format: &TrackFormat, mut out: W) -> io::Result<()> {
    if let Some(header) = &format.header {
        writeln!(out, "{}", header)?;
    }
    match &format.variable {
        Some(name) => writeln!(out, "var {} = {{", name)?,
        None => writeln!(out, "{{")?,
    }

    writeln!(out, "  {}: {},", format.key("numWaypoints"), track.num_waypoints())?;

    writeln!(out, "  {}: [", format.key("waypointPos"))?;
    for wp in &track.waypoints {
        writeln!(
            out,
            "    {:.6}, {:.6}, {:.6}, {:.6},",
            wp.gate_a.x, wp.gate_a.y, wp.gate_b.x, wp.gate_b.y
        )?;
    }
    writeln!(out, "  ],")?;

    writeln!(out, "  {}: [", format.key("waypointCenter"))?;
    for wp in &track.waypoints {
        writeln!(out, "    {:.6}, {:.6},", wp.center.x, wp.center.y)?;
    }
    writeln!(out, "  ],")?;

    if format.variable.is_some() {
        writeln!(out, "}};")?;
    } else {
        writeln!(out, "}}")?;
    }
    out.flush()
}

pub fn track_to_string(track: &Track, format: &TrackFormat) -> String {
    let mut buffer = Vec::new();
    write_track(track, format, &mut buffer).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buffer).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::Waypoint;
    use euclid::point2 as point;

    fn track() -> Track {
        let a = Waypoint {
            center: point(0.5, 0.5),
            gate_a: point(0.5, 0.54),
            gate_b: point(0.5, 0.46),
        };
        let b = Waypoint {
            center: point(0.25, 0.125),
            gate_a: point(0.2, 0.1),
            gate_b: point(0.3, 0.15),
        };
        Track {
            waypoints: vec![a, b, a],
        }
    }

    #[test]
    fn test_script_layout() {
        let text = track_to_string(&track(), &TrackFormat::script("SolarSailorMap"));
        let expected = "\
// Auto-generated, don't edit directly
var SolarSailorMap = {
  'numWaypoints': 3,
  'waypointPos': [
    0.500000, 0.540000, 0.500000, 0.460000,
    0.200000, 0.100000, 0.300000, 0.150000,
    0.500000, 0.540000, 0.500000, 0.460000,
  ],
  'waypointCenter': [
    0.500000, 0.500000,
    0.250000, 0.125000,
    0.500000, 0.500000,
  ],
};
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_object_layout() {
        let mut open = track();
        open.waypoints.pop();
        let text = track_to_string(&open, &TrackFormat::object());
        let expected = "\
{
  numWaypoints: 2,
  waypointPos: [
    0.500000, 0.540000, 0.500000, 0.460000,
    0.200000, 0.100000, 0.300000, 0.150000,
  ],
  waypointCenter: [
    0.500000, 0.500000,
    0.250000, 0.125000,
  ],
}
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_style_selection() {
        assert_eq!(TrackFormat::from_style(OutputStyle::Object, "X"), TrackFormat::object());
        assert_eq!(TrackFormat::from_style(OutputStyle::Script, "X"), TrackFormat::script("X"));
    }

    #[test]
    fn test_write_error_propagates() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk full"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        assert!(write_track(&track(), &TrackFormat::object(), Broken).is_err());
    }
}
