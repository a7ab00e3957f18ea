use crate::canvas::CanvasFormat;
use crate::error::ExportError;
use crate::geometry_utilities::types::*;
use crate::path::PathData;
use crate::source::{ControlPointSample, PathSource};
use euclid::{point2 as point, vec2 as vector};
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A scene exported from the compositing tool: a canvas plus named nodes holding path elements.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneDocument {
    pub format: CanvasFormat,
    #[serde(default)]
    pub nodes: Vec<NodeData>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeData {
    pub name: String,
    #[serde(default)]
    pub elements: Vec<ElementData>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ElementData {
    pub name: String,
    #[serde(default)]
    pub keyframes: Vec<ShapeKey>,
}

/// The whole shape of an element at one point in time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShapeKey {
    pub time: f64,
    pub points: Vec<ControlPointData>,
}

/// `right` is the outgoing handle as an offset from `center`.
///
/// Other handle data written by the authoring tool (such as `left`) is ignored.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct ControlPointData {
    pub center: [f64; 2],
    #[serde(default)]
    pub right: [f64; 2],
}

impl SceneDocument {
    pub fn from_json(text: &str) -> Result<SceneDocument, ExportError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &std::path::Path) -> Result<SceneDocument, ExportError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn node(&self, name: &str) -> Result<&NodeData, ExportError> {
        self.nodes
            .iter()
            .find(|n| n.name == name)
            .ok_or_else(|| ExportError::MissingNode { node: name.to_owned() })
    }

    /// Looks up `element` inside `node` and wraps it as a [`PathSource`].
    pub fn element<'a>(&'a self, node: &str, element: &str) -> Result<ElementSource<'a>, ExportError> {
        let node_data = self.node(node)?;
        let element_data = node_data
            .elements
            .iter()
            .find(|e| e.name == element)
            .ok_or_else(|| ExportError::MissingElement {
                node: node.to_owned(),
                element: element.to_owned(),
            })?;

        Ok(ElementSource {
            canvas: self.format,
            element: element_data,
        })
    }
}

impl ShapeKey {
    pub fn to_path(&self) -> PathData {
        PathData::from_control_points(self.points.iter().map(|cp| {
            let center: CanvasPoint = point(cp.center[0], cp.center[1]);
            let right: CanvasVector = vector(cp.right[0], cp.right[1]);
            (center, right)
        }))
    }
}

pub struct ElementSource<'a> {
    canvas: CanvasFormat,
    element: &'a ElementData,
}

impl<'a> ElementSource<'a> {
    pub fn name(&self) -> &str {
        &self.element.name
    }

    fn sorted_keys(&self) -> Result<Vec<&'a ShapeKey>, ExportError> {
        let mut keys: Vec<&ShapeKey> = self.element.keyframes.iter().collect();
        keys.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(Ordering::Equal));

        if let Some(first) = keys.first() {
            let expected = first.points.len();
            if let Some(bad) = keys.iter().find(|k| k.points.len() != expected) {
                return Err(self.mismatched(expected, bad.points.len()));
            }
        }
        Ok(keys)
    }

    fn mismatched(&self, expected: usize, found: usize) -> ExportError {
        ExportError::MismatchedKeyframes {
            element: self.element.name.clone(),
            expected,
            found,
        }
    }

    /// The element's shape at `time`, holding the first and last keys outside their range.
    pub fn shape_at(&self, time: f64) -> Result<PathData, ExportError> {
        let keys = self.sorted_keys()?;

        let (first, last) = match (keys.first(), keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Ok(PathData::new()),
        };

        if time <= first.time {
            return Ok(first.to_path());
        }

        let i = keys.partition_point(|k| k.time <= time).saturating_sub(1);
        if i >= keys.len() - 1 {
            return Ok(last.to_path());
        }

        let start = keys[i];
        let end = keys[i + 1];
        let span = end.time - start.time;
        let t = if span > 0.0 { (time - start.time) / span } else { 0.0 };
        debug!(
            "sampling '{}' at {} between keys at {} and {} (t = {})",
            self.element.name, time, start.time, end.time, t
        );

        PathData::lerp(&start.to_path(), &end.to_path(), t)
            .ok_or_else(|| self.mismatched(start.points.len(), end.points.len()))
    }
}

impl<'a> PathSource for ElementSource<'a> {
    fn canvas(&self) -> CanvasFormat {
        self.canvas
    }

    fn sample(&self, time: f64) -> Result<Vec<ControlPointSample>, ExportError> {
        Ok(self.shape_at(time)?.samples())
    }
}
