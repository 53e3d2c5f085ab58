//! Extent aggregation: merge per-element bounding extents into one envelope.

use shared::{BoundingBox, Point3};

use crate::document::{Document, ViewId};
use crate::selection::SelectionState;

/// Envelope of a point set: componentwise min/max over all input points.
///
/// `None` on empty input; an empty sequence is a precondition violation and
/// must never produce a degenerate box.
pub fn envelope_of(points: &[Point3]) -> Option<BoundingBox> {
    let first = *points.first()?;
    let (min, max) = points
        .iter()
        .skip(1)
        .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
    Some(BoundingBox::new(min, max))
}

/// Min and max corner of every selected element's extent in the given view.
///
/// Elements with no extent in the view are skipped. Corner points are taken
/// from the per-element boxes as-is; no `min <= max` check is applied to
/// them (the envelope is computed over raw corner points).
pub fn selection_corner_points(
    doc: &Document,
    view: ViewId,
    selection: &SelectionState,
) -> Vec<Point3> {
    let mut points = Vec::with_capacity(selection.len() * 2);
    for &id in selection.all() {
        if let Some(bb) = doc.bounding_box_of(id, view) {
            points.extend(bb.corners());
        }
    }
    points
}
