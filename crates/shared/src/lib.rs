//! Shared geometric data model for the crop toolkit.
//!
//! Plain serde-derived value types used by the engine crate and its tests:
//! points, bounding boxes, segments, curve loops, and view kinds. Algorithms
//! (aggregation, synthesis, validation) live in the `vcrop` crate; these types
//! only carry data and the invariants that can be enforced at construction.

use serde::{Deserialize, Serialize};

/// Geometric tolerance used for coincidence and closure checks.
pub const TOLERANCE: f64 = 1e-9;

/// A 3D point. Immutable value type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Componentwise minimum.
    pub fn min(self, rhs: Self) -> Self {
        Self::new(self.x.min(rhs.x), self.y.min(rhs.y), self.z.min(rhs.z))
    }

    /// Componentwise maximum.
    pub fn max(self, rhs: Self) -> Self {
        Self::new(self.x.max(rhs.x), self.y.max(rhs.y), self.z.max(rhs.z))
    }

    /// Distance to another point.
    pub fn distance(self, rhs: Self) -> f64 {
        let dx = self.x - rhs.x;
        let dy = self.y - rhs.y;
        let dz = self.z - rhs.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// True if the two points coincide within [`TOLERANCE`].
    pub fn almost_eq(self, rhs: Self) -> bool {
        self.distance(rhs) <= TOLERANCE
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

/// Axis-aligned bounding box given by two corner points.
///
/// A well-formed box has `min.axis <= max.axis` on every axis, but the type
/// does not enforce this at construction: per-element boxes supplied by a
/// host may be malformed and are passed through as-is. Callers that need the
/// invariant check [`BoundingBox::is_well_formed`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point3,
    pub max: Point3,
}

impl BoundingBox {
    pub const fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// The two corner points, min first.
    pub const fn corners(&self) -> [Point3; 2] {
        [self.min, self.max]
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn depth(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// True if `min <= max` holds on every axis.
    pub fn is_well_formed(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }
}

/// A bounded straight segment between two distinct points.
///
/// Construction rejects coincident endpoints, so every `Segment` in the
/// system has nonzero length. Fields are private to keep that invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    start: Point3,
    end: Point3,
}

impl Segment {
    /// Create a segment between two points, or `None` if they coincide
    /// within [`TOLERANCE`].
    pub fn between(start: Point3, end: Point3) -> Option<Self> {
        if start.almost_eq(end) {
            None
        } else {
            Some(Self { start, end })
        }
    }

    pub fn start(&self) -> Point3 {
        self.start
    }

    pub fn end(&self) -> Point3 {
        self.end
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// An ordered sequence of segments intended to form a closed polygon.
///
/// The type itself makes no promise beyond ordering; closure and
/// well-formedness are checked by the validity gate in the engine crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveLoop {
    segments: Vec<Segment>,
}

impl CurveLoop {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Corner points of the loop (each segment's start, in order).
    pub fn corners(&self) -> Vec<Point3> {
        self.segments.iter().map(Segment::start).collect()
    }

    /// True if every segment's end coincides with the next segment's start,
    /// wrapping from the last segment back to the first.
    pub fn is_closed(&self) -> bool {
        if self.segments.is_empty() {
            return false;
        }
        self.segments.iter().enumerate().all(|(i, seg)| {
            let next = &self.segments[(i + 1) % self.segments.len()];
            seg.end().almost_eq(next.start())
        })
    }
}

/// Kind of a view in the host document. Only floor plans are eligible for
/// crop synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewType {
    FloorPlan,
    CeilingPlan,
    Elevation,
    Section,
    ThreeD,
    Drafting,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn test_point_min_max() {
        let a = p(1.0, 5.0, -2.0);
        let b = p(3.0, 2.0, 0.0);
        assert_eq!(a.min(b), p(1.0, 2.0, -2.0));
        assert_eq!(a.max(b), p(3.0, 5.0, 0.0));
    }

    #[test]
    fn test_point_almost_eq() {
        let a = p(1.0, 2.0, 3.0);
        assert!(a.almost_eq(p(1.0, 2.0, 3.0 + 1e-12)));
        assert!(!a.almost_eq(p(1.0, 2.0, 3.1)));
    }

    #[test]
    fn test_bounding_box_dimensions() {
        let bb = BoundingBox::new(p(0.0, 0.0, 0.0), p(10.0, 4.0, 7.0));
        assert_eq!(bb.width(), 10.0);
        assert_eq!(bb.height(), 4.0);
        assert_eq!(bb.depth(), 7.0);
        assert!(bb.is_well_formed());
    }

    #[test]
    fn test_bounding_box_allows_malformed() {
        // Per-element boxes from a host may be garbage; the type passes
        // them through and only flags them on request.
        let bb = BoundingBox::new(p(3.0, 3.0, 0.0), p(8.0, 2.0, 0.0));
        assert!(!bb.is_well_formed());
        assert_eq!(bb.height(), -1.0);
    }

    #[test]
    fn test_segment_rejects_coincident_points() {
        assert!(Segment::between(p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.0)).is_none());
        assert!(Segment::between(p(0.0, 0.0, 0.0), p(0.0, 0.0, 1e-12)).is_none());
    }

    #[test]
    fn test_segment_between_distinct_points() {
        let seg = Segment::between(p(0.0, 0.0, 0.0), p(3.0, 4.0, 0.0)).unwrap();
        assert_eq!(seg.start(), p(0.0, 0.0, 0.0));
        assert_eq!(seg.end(), p(3.0, 4.0, 0.0));
        assert!((seg.length() - 5.0).abs() < TOLERANCE);
    }

    fn unit_square() -> CurveLoop {
        let corners = [
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ];
        let segments = (0..4)
            .map(|i| Segment::between(corners[i], corners[(i + 1) % 4]).unwrap())
            .collect();
        CurveLoop::new(segments)
    }

    #[test]
    fn test_loop_closed() {
        let lp = unit_square();
        assert_eq!(lp.len(), 4);
        assert!(lp.is_closed());
        assert_eq!(lp.corners().len(), 4);
    }

    #[test]
    fn test_loop_open() {
        let open = CurveLoop::new(vec![
            Segment::between(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)).unwrap(),
            Segment::between(p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)).unwrap(),
        ]);
        assert!(!open.is_closed());
        assert!(!CurveLoop::new(vec![]).is_closed());
    }

    #[test]
    fn test_loop_serde_roundtrip() {
        let lp = unit_square();
        let json = serde_json::to_string(&lp).unwrap();
        let back: CurveLoop = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lp);
    }

    #[test]
    fn test_view_type_serde_names() {
        let json = serde_json::to_string(&ViewType::FloorPlan).unwrap();
        assert_eq!(json, "\"floor_plan\"");
    }
}
