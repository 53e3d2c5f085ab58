//! Vector algebra helpers on top of the shared data model.
//!
//! The shared crate keeps plain serde-friendly structs; everything that
//! needs cross/dot products converts to `glam::DVec3` here.

use glam::DVec3;
use shared::{Point3, TOLERANCE};

/// Convert a shared point to a glam vector.
pub fn to_dvec(p: Point3) -> DVec3 {
    DVec3::new(p.x, p.y, p.z)
}

/// Convert a glam vector back to a shared point.
pub fn to_point(v: DVec3) -> Point3 {
    Point3::new(v.x, v.y, v.z)
}

/// An infinite plane given by an origin and a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub origin: DVec3,
    pub normal: DVec3,
}

impl Plane {
    /// Plane through three points, or `None` if they are (nearly) collinear.
    pub fn from_three_points(a: Point3, b: Point3, c: Point3) -> Option<Self> {
        let a = to_dvec(a);
        let ab = to_dvec(b) - a;
        let ac = to_dvec(c) - a;
        let normal = ab.cross(ac);
        let normal = normal.try_normalize()?;
        Some(Self { origin: a, normal })
    }

    /// Signed distance from a point to the plane.
    pub fn signed_distance(&self, p: Point3) -> f64 {
        (to_dvec(p) - self.origin).dot(self.normal)
    }

    /// True if the point lies on the plane within [`TOLERANCE`].
    pub fn contains(&self, p: Point3) -> bool {
        self.signed_distance(p).abs() <= TOLERANCE
    }
}
