//! Factory functions for creating test data.
//!
//! Convenient helpers to construct points, boxes, views, and ready-made
//! documents used in tests and by the demo binary.

use std::collections::HashMap;

use shared::{BoundingBox, Point3, ViewType};

use crate::document::{Document, ElementId, ElementKind, View, ViewId};

// ── Geometry factories ──────────────────────────────────────────

/// Shorthand for a point.
pub fn point(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

/// Shorthand for a bounding box from two corner arrays.
pub fn bbox(min: [f64; 3], max: [f64; 3]) -> BoundingBox {
    BoundingBox::new(Point3::from_array(min), Point3::from_array(max))
}

// ── View factories ──────────────────────────────────────────────

/// A floor plan view with an active crop box.
pub fn floor_plan_view(name: &str) -> View {
    let mut view = View::new(name, ViewType::FloorPlan);
    view.crop_box_active = true;
    view
}

/// A view of an arbitrary kind with an inactive crop box.
pub fn view_of_type(name: &str, view_type: ViewType) -> View {
    View::new(name, view_type)
}

// ── Document factories ──────────────────────────────────────────

/// A fresh document containing one crop-ready floor plan view.
pub fn plan_view_document() -> (Document, ViewId) {
    let mut doc = Document::new();
    let view_id = doc.add_view(floor_plan_view("Level 1"));
    (doc, view_id)
}

/// Add a model element whose extent in `view` is the given box.
pub fn add_box_element(
    doc: &mut Document,
    view: ViewId,
    name: &str,
    min: [f64; 3],
    max: [f64; 3],
) -> ElementId {
    let mut view_extents = HashMap::new();
    view_extents.insert(view, bbox(min, max));
    doc.add_element(name, ElementKind::Model { view_extents })
}

/// Add a model element with no extent in any view.
pub fn add_extentless_element(doc: &mut Document, name: &str) -> ElementId {
    doc.add_element(
        name,
        ElementKind::Model {
            view_extents: HashMap::new(),
        },
    )
}
