//! Loop validation: the single gate allowed to block a crop on geometric
//! grounds.
//!
//! `LoopValidator` provides methods to check that a synthesized loop is a
//! non-degenerate, planar, right-angled closed rectangle before any
//! persistent state is touched.

use glam::DVec3;
use shared::{CurveLoop, TOLERANCE};

use crate::geom::{to_dvec, Plane};
use crate::rectangle::loop_plane;

/// Angular tolerance for perpendicularity/parallelism checks (on normalized
/// direction vectors).
const ANGLE_EPS: f64 = 1e-7;
/// Below this enclosed area a loop is considered degenerate.
const AREA_EPS: f64 = 1e-9;

/// Validator for crop-loop well-formedness checks.
pub struct LoopValidator<'a> {
    shape: &'a CurveLoop,
}

impl<'a> LoopValidator<'a> {
    /// Create a new validator for the given loop.
    pub fn new(shape: &'a CurveLoop) -> Self {
        Self { shape }
    }

    /// Check that the loop closes back on itself.
    pub fn is_closed(&self) -> bool {
        self.shape.is_closed()
    }

    /// Check that the loop has exactly four segments.
    pub fn has_four_sides(&self) -> bool {
        self.shape.len() == 4
    }

    /// The supporting plane through the first three corners, if any.
    pub fn plane(&self) -> Option<Plane> {
        loop_plane(self.shape)
    }

    /// Check that every corner lies on the supporting plane within tolerance.
    pub fn is_planar(&self) -> bool {
        let Some(plane) = self.plane() else {
            return false;
        };
        self.shape.corners().iter().all(|&c| plane.contains(c))
    }

    /// Check that consecutive segments meet at right angles within tolerance.
    pub fn has_right_angles(&self) -> bool {
        let dirs = self.directions();
        if dirs.len() != 4 {
            return false;
        }
        dirs.iter()
            .enumerate()
            .all(|(i, d)| d.dot(dirs[(i + 1) % 4]).abs() <= ANGLE_EPS)
    }

    /// Check that opposite sides are equal in length and parallel within
    /// tolerance.
    pub fn opposite_sides_match(&self) -> bool {
        let segments = self.shape.segments();
        let dirs = self.directions();
        if segments.len() != 4 || dirs.len() != 4 {
            return false;
        }
        for i in 0..2 {
            let len_a = segments[i].length();
            let len_b = segments[i + 2].length();
            if (len_a - len_b).abs() > TOLERANCE {
                return false;
            }
            if dirs[i].cross(dirs[i + 2]).length() > ANGLE_EPS {
                return false;
            }
        }
        true
    }

    /// Enclosed polygon area (valid for planar loops).
    pub fn area(&self) -> f64 {
        let corners: Vec<DVec3> = self.shape.corners().into_iter().map(to_dvec).collect();
        if corners.len() < 3 {
            return 0.0;
        }
        let origin = corners[0];
        let mut sum = DVec3::ZERO;
        for i in 1..corners.len() - 1 {
            sum += (corners[i] - origin).cross(corners[i + 1] - origin);
        }
        sum.length() * 0.5
    }

    /// Check if the enclosed area is effectively zero.
    pub fn is_degenerate(&self) -> bool {
        self.area() <= AREA_EPS
    }

    /// Run all checks and return a list of failure messages.
    /// An empty list means the loop is an acceptable crop rectangle.
    pub fn validate_all(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.is_closed() {
            errors.push("loop is not closed".to_string());
        }

        if !self.has_four_sides() {
            errors.push(format!("expected 4 segments, got {}", self.shape.len()));
        }

        if !self.is_planar() {
            errors.push("corner points are not coplanar".to_string());
        }

        if !self.has_right_angles() {
            errors.push("consecutive segments are not perpendicular".to_string());
        }

        if !self.opposite_sides_match() {
            errors.push("opposite sides are not equal and parallel".to_string());
        }

        if self.is_degenerate() {
            errors.push("enclosed area is effectively zero".to_string());
        }

        errors
    }

    /// True if all checks pass.
    pub fn accepts(&self) -> bool {
        self.validate_all().is_empty()
    }

    fn directions(&self) -> Vec<DVec3> {
        self.shape
            .segments()
            .iter()
            .filter_map(|s| (to_dvec(s.end()) - to_dvec(s.start())).try_normalize())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Point3, Segment};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn loop_through(corners: &[Point3]) -> CurveLoop {
        let segments = (0..corners.len())
            .map(|i| Segment::between(corners[i], corners[(i + 1) % corners.len()]).unwrap())
            .collect();
        CurveLoop::new(segments)
    }

    fn rect_10_by_4() -> CurveLoop {
        loop_through(&[
            p(0.0, 0.0, 0.0),
            p(10.0, 0.0, 0.0),
            p(10.0, 4.0, 0.0),
            p(0.0, 4.0, 0.0),
        ])
    }

    #[test]
    fn test_accepts_rectangle() {
        let shape = rect_10_by_4();
        let v = LoopValidator::new(&shape);
        let errors = v.validate_all();
        assert!(errors.is_empty(), "Expected no errors, got: {:?}", errors);
        assert!(v.accepts());
    }

    #[test]
    fn test_area_of_rectangle() {
        let shape = rect_10_by_4();
        let v = LoopValidator::new(&shape);
        assert!((v.area() - 40.0).abs() < 1e-9);
        assert!(!v.is_degenerate());
    }

    #[test]
    fn test_rejects_parallelogram() {
        // Closed, planar, four sides, but not right-angled.
        let shape = loop_through(&[
            p(0.0, 0.0, 0.0),
            p(4.0, 0.0, 0.0),
            p(5.0, 1.0, 0.0),
            p(1.0, 1.0, 0.0),
        ]);
        let v = LoopValidator::new(&shape);
        assert!(!v.has_right_angles());
        assert!(v.opposite_sides_match());
        let errors = v.validate_all();
        assert!(errors.iter().any(|e| e.contains("perpendicular")));
    }

    #[test]
    fn test_rejects_non_planar_loop() {
        // One corner lifted off the plane of the other three.
        let shape = loop_through(&[
            p(0.0, 0.0, 0.0),
            p(10.0, 0.0, 0.0),
            p(10.0, 4.0, 1.0),
            p(0.0, 4.0, 0.0),
        ]);
        let v = LoopValidator::new(&shape);
        assert!(!v.is_planar());
        let errors = v.validate_all();
        assert!(errors.iter().any(|e| e.contains("coplanar")));
    }

    #[test]
    fn test_rejects_open_loop() {
        let shape = CurveLoop::new(vec![
            Segment::between(p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0)).unwrap(),
            Segment::between(p(10.0, 0.0, 0.0), p(10.0, 4.0, 0.0)).unwrap(),
            Segment::between(p(10.0, 4.0, 0.0), p(0.0, 4.0, 0.0)).unwrap(),
            // Last segment does not return to the first corner.
            Segment::between(p(0.0, 4.0, 0.0), p(1.0, 3.0, 0.0)).unwrap(),
        ]);
        let v = LoopValidator::new(&shape);
        assert!(!v.is_closed());
        let errors = v.validate_all();
        assert!(errors.iter().any(|e| e.contains("not closed")));
    }

    #[test]
    fn test_rejects_wrong_segment_count() {
        let shape = loop_through(&[p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0), p(2.0, 3.0, 0.0)]);
        let v = LoopValidator::new(&shape);
        assert!(!v.has_four_sides());
        let errors = v.validate_all();
        assert!(errors.iter().any(|e| e.contains("4 segments")));
    }

    #[test]
    fn test_rejects_unequal_opposite_sides() {
        // Right trapezoid: three right angles, opposite sides unequal.
        let shape = loop_through(&[
            p(0.0, 0.0, 0.0),
            p(6.0, 0.0, 0.0),
            p(6.0, 3.0, 0.0),
            p(2.0, 3.0, 0.0),
        ]);
        let v = LoopValidator::new(&shape);
        assert!(!v.opposite_sides_match());
        assert!(!v.accepts());
    }
}
