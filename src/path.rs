use crate::geometry_utilities::lerp_point;
use crate::geometry_utilities::types::*;
use crate::source::ControlPointSample;
use euclid::point2 as point;

#[derive(Clone, Debug, PartialEq)]
pub struct SubPathData {
    pub range: std::ops::Range<usize>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    /// Points
    /// [point1, handle1, point2, handle2, ..., pointN, handleN]
    /// Each handle is the outgoing control point, stored as an offset from its vertex.
    pub points: Vec<CanvasPoint>,
    pub sub_paths: Vec<SubPathData>,
    in_path: bool,
}

#[derive(Clone)]
pub struct ImmutablePathPoint<'a> {
    pub(crate) index: usize,
    pub(crate) data: &'a PathData,
}

pub struct MutablePathPoint<'a> {
    pub(crate) index: usize,
    pub(crate) data: &'a mut PathData,
}

pub trait PathPoint {
    fn index(&self) -> usize;
    fn data(&self) -> &PathData;

    fn position(&self) -> CanvasPoint {
        self.data().points[self.index()]
    }

    fn control_after(&self) -> CanvasPoint {
        self.position() + self.data().points[handle_index(self.index())].to_vector()
    }

    /// Direction the path leaves this vertex in, taken from the outgoing handle.
    fn tangent(&self) -> CanvasVector {
        self.control_after() - self.position()
    }
}

impl<'a> PathPoint for ImmutablePathPoint<'a> {
    fn index(&self) -> usize {
        self.index
    }

    fn data(&self) -> &PathData {
        self.data
    }
}

impl<'a> PathPoint for MutablePathPoint<'a> {
    fn index(&self) -> usize {
        self.index
    }

    fn data(&self) -> &PathData {
        self.data
    }
}

fn handle_index(index: usize) -> usize {
    index + 1
}

impl<'a> MutablePathPoint<'a> {
    pub fn set_control_after(&mut self, value: CanvasPoint) {
        let offset = (value - self.position()).to_point();
        self.data.points[handle_index(self.index)] = offset;
    }
}

#[derive(Clone, Copy)]
pub struct SubPath<'a> {
    data: &'a PathData,
    index: usize,
}

impl<'a> SubPath<'a> {
    pub fn iter_points(self) -> impl Iterator<Item = ImmutablePathPoint<'a>> {
        let data = self.data;
        data.sub_paths[self.index]
            .range
            .clone()
            .step_by(2)
            .map(move |i| ImmutablePathPoint { index: i, data })
    }
}

impl PathData {
    pub fn new() -> PathData {
        PathData {
            points: vec![],
            sub_paths: vec![],
            in_path: false,
        }
    }

    /// Builds a single-shape path from `(center, outgoing handle)` pairs, handles relative to the center.
    pub fn from_control_points<I>(control_points: I) -> PathData
    where
        I: IntoIterator<Item = (CanvasPoint, CanvasVector)>,
    {
        let mut result = PathData::new();
        result.add_shape(control_points);
        result
    }

    /// Appends the control points as a new sub path.
    pub fn add_shape<I>(&mut self, control_points: I)
    where
        I: IntoIterator<Item = (CanvasPoint, CanvasVector)>,
    {
        self.end();
        for (center, handle) in control_points {
            let vertex = self.line_to(center);
            self.point_mut(vertex).set_control_after(center + handle);
        }
        self.end();
    }

    pub fn iter_sub_paths<'a>(&'a self) -> impl Iterator<Item = SubPath<'a>> {
        (0..self.sub_paths.len()).map(move |i| SubPath { data: self, index: i })
    }

    pub fn iter_points<'a>(&'a self) -> impl Iterator<Item = ImmutablePathPoint<'a>> {
        self.iter_sub_paths().flat_map(|sp| sp.iter_points())
    }

    pub fn point_mut<'a>(&'a mut self, index: usize) -> MutablePathPoint<'a> {
        MutablePathPoint { data: self, index }
    }

    pub fn len(&self) -> usize {
        self.points.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds a vertex with no handle to the current sub path, starting one if needed.
    pub fn line_to(&mut self, pt: CanvasPoint) -> usize {
        self.start_if_necessary();
        self.points.push(pt);
        self.points.push(point(0.0, 0.0));
        self.extend_current();

        self.points.len() - 2
    }

    fn start_if_necessary(&mut self) {
        if !self.in_path {
            self.sub_paths.push(SubPathData {
                range: self.points.len()..self.points.len(),
            });
            self.in_path = true;
        }
    }

    pub fn end(&mut self) {
        self.extend_current();
        self.in_path = false;
    }

    fn extend_current(&mut self) {
        if self.in_path {
            if let Some(sub_path) = self.sub_paths.last_mut() {
                sub_path.range.end = self.points.len();
            }
        }
    }

    /// Blends two paths of identical layout point by point, handles included.
    ///
    /// Returns `None` if the layouts differ.
    pub fn lerp(a: &PathData, b: &PathData, t: f64) -> Option<PathData> {
        if a.points.len() != b.points.len() || a.sub_paths != b.sub_paths {
            return None;
        }

        Some(PathData {
            points: a
                .points
                .iter()
                .zip(b.points.iter())
                .map(|(&p, &q)| lerp_point(p, q, t))
                .collect(),
            sub_paths: a.sub_paths.clone(),
            in_path: false,
        })
    }

    /// Vertex positions and outgoing tangents, in path order.
    pub fn samples(&self) -> Vec<ControlPointSample> {
        let mut result = Vec::with_capacity(self.len());
        result.extend(self.iter_points().map(|p| ControlPointSample {
            center: p.position(),
            tangent: p.tangent(),
        }));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use euclid::vec2 as vector;

    fn square() -> PathData {
        PathData::from_control_points(vec![
            (point(0.0, 0.0), vector(1.0, 0.0)),
            (point(10.0, 0.0), vector(0.0, 1.0)),
            (point(10.0, 10.0), vector(-1.0, 0.0)),
            (point(0.0, 10.0), vector(0.0, -1.0)),
        ])
    }

    #[test]
    fn test_sanity() {
        let mut data = PathData::new();
        let vertex = data.line_to(point(1.0, 2.0));
        data.point_mut(vertex).set_control_after(point(4.0, 6.0));
        data.end();
        let p = data.iter_points().next().unwrap();
        assert_eq!(p.position(), point(1.0, 2.0));
        assert_eq!(p.control_after(), point(4.0, 6.0));
        assert_eq!(data.points[1], point(3.0, 4.0));
    }

    #[test]
    fn test_shapes_become_sub_paths() {
        let mut data = square();
        data.add_shape(vec![(point(5.0, 5.0), vector(2.0, 0.0))]);
        assert_eq!(data.len(), 5);
        assert_eq!(data.sub_paths.len(), 2);
        assert_eq!(data.sub_paths[0].range, 0..8);
        assert_eq!(data.sub_paths[1].range, 8..10);
        assert_eq!(data.samples()[4].center, point(5.0, 5.0));
    }

    #[test]
    fn test_samples() {
        let samples = square().samples();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[1].center, point(10.0, 0.0));
        assert_eq!(samples[1].tangent, vector(0.0, 1.0));
        assert_eq!(samples[3].tangent, vector(0.0, -1.0));
    }

    #[test]
    fn test_lerp() {
        let a = square();
        let mut b = square();
        for p in b.points.iter_mut() {
            *p = point(p.x * 3.0, p.y * 3.0);
        }
        let mid = PathData::lerp(&a, &b, 0.5).unwrap();
        let second = mid.samples()[1];
        assert_eq!(second.center, point(20.0, 0.0));
        assert_eq!(second.tangent, vector(0.0, 2.0));

        let short = PathData::from_control_points(vec![(point(0.0, 0.0), vector(1.0, 0.0))]);
        assert!(PathData::lerp(&a, &short, 0.5).is_none());
    }

    #[test]
    fn test_empty_shape() {
        let data = PathData::from_control_points(Vec::<(CanvasPoint, CanvasVector)>::new());
        assert!(data.is_empty());
        assert!(data.samples().is_empty());
    }
}
