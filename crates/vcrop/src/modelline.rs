//! Reference line builder: persisted 3D lines on an inferred sketch plane.
//!
//! Shares the crop pipeline's construction discipline (plane inference,
//! degenerate-input rejection) but runs inside its own failure boundary: a
//! failed pair never aborts the surrounding batch.

use std::fmt;

use shared::{Point3, Segment};

use crate::document::{Document, ElementId, ElementKind};
use crate::geom::Plane;
use crate::report::Reporter;

/// Fixed synthetic third point used to infer a supporting plane through any
/// two distinct points, offset far in the negative x/y direction at z = 0.
const PLANE_ANCHOR: Point3 = Point3::new(-10_000.0, -10_000.0, 0.0);

/// Failure to construct a single reference line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// The two endpoints coincide.
    CoincidentPoints,
    /// No plane could be inferred through the endpoints and the anchor
    /// point (the three are collinear).
    NoSupportingPlane,
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::CoincidentPoints => write!(f, "expected two distinct points"),
            ConstructionError::NoSupportingPlane => {
                write!(f, "could not infer a supporting plane through the points")
            }
        }
    }
}

impl std::error::Error for ConstructionError {}

/// Create a bounded model line between two distinct points on an inferred
/// sketch plane, assigning the named line style if one matches exactly
/// (no match is not an error).
///
/// On error nothing is created. Callers persist the result by running this
/// inside a [`Document::transaction`] scope.
pub fn create_model_line(
    doc: &mut Document,
    p: Point3,
    q: Point3,
    style_name: &str,
) -> Result<ElementId, ConstructionError> {
    if p.almost_eq(q) {
        return Err(ConstructionError::CoincidentPoints);
    }
    let segment = Segment::between(p, q).ok_or(ConstructionError::CoincidentPoints)?;
    let plane =
        Plane::from_three_points(p, q, PLANE_ANCHOR).ok_or(ConstructionError::NoSupportingPlane)?;

    let sketch_plane = doc.add_element("sketch plane", ElementKind::SketchPlane { plane });
    let line_style = doc.line_style_by_name(style_name).map(|s| s.id);
    let line = doc.add_element(
        "model line",
        ElementKind::ModelLine {
            segment,
            sketch_plane,
            line_style,
        },
    );
    Ok(line)
}

/// Batch driver: consume the points two at a time (a trailing unpaired point
/// is discarded) and build one line per pair inside a single transaction.
///
/// The transaction commits regardless of individual outcomes: failed pairs
/// are reported and skipped, successful lines persist together. Only a
/// failure of the transaction itself rolls everything back.
pub fn draw_model_lines(
    doc: &mut Document,
    points: &[Point3],
    style_name: &str,
    reporter: &mut dyn Reporter,
) -> Vec<Result<ElementId, ConstructionError>> {
    doc.transaction("place model lines", |doc| {
        let mut outcomes = Vec::with_capacity(points.len() / 2);
        for pair in points.chunks_exact(2) {
            let outcome = create_model_line(doc, pair[0], pair[1], style_name);
            if let Err(err) = &outcome {
                reporter.report(&format!("Reference line skipped: {err}."));
            }
            outcomes.push(outcome);
        }
        Ok::<_, ()>(outcomes)
    })
    .unwrap_or_default()
}
