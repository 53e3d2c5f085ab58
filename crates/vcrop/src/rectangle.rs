//! Rectangle synthesis: an envelope's footprint as a closed four-segment loop.

use std::fmt;

use shared::{BoundingBox, CurveLoop, Point3, Segment};

use crate::geom::Plane;

/// Failure to synthesize a footprint rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RectangleError {
    /// Two adjacent corners coincide (the box has zero width or height).
    DegenerateSide,
}

impl fmt::Display for RectangleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RectangleError::DegenerateSide => {
                write!(f, "bounding box footprint has a zero-length side")
            }
        }
    }
}

impl std::error::Error for RectangleError {}

/// Build the box's footprint flattened to z = 0 as a closed loop of four
/// segments, independent of the box's z-range.
///
/// Corners are connected in the cyclic order `(min.x, min.y)`,
/// `(max.x, min.y)`, `(max.x, max.y)`, `(min.x, max.y)`, closing back to the
/// first corner, which yields a simple (non-self-intersecting) polygon.
pub fn footprint_rectangle(bounds: &BoundingBox) -> Result<CurveLoop, RectangleError> {
    let corners = [
        Point3::new(bounds.min.x, bounds.min.y, 0.0),
        Point3::new(bounds.max.x, bounds.min.y, 0.0),
        Point3::new(bounds.max.x, bounds.max.y, 0.0),
        Point3::new(bounds.min.x, bounds.max.y, 0.0),
    ];

    let mut segments = Vec::with_capacity(4);
    for i in 0..4 {
        let seg = Segment::between(corners[i], corners[(i + 1) % 4])
            .ok_or(RectangleError::DegenerateSide)?;
        segments.push(seg);
    }
    Ok(CurveLoop::new(segments))
}

/// Supporting plane of a loop, from its first three corners. `None` if the
/// loop has fewer than three corners or they are collinear.
pub fn loop_plane(shape: &CurveLoop) -> Option<Plane> {
    let corners = shape.corners();
    if corners.len() < 3 {
        return None;
    }
    Plane::from_three_points(corners[0], corners[1], corners[2])
}
