//! In-memory document model: views, elements, line styles, transactions.
//!
//! The document is the single mutable collaborator of the crop pipeline and
//! the reference line builder. All mutation funnels through
//! [`Document::transaction`], a scoped unit of work that commits on success
//! and restores the pre-transaction state on failure.

use std::collections::HashMap;

use shared::{BoundingBox, CurveLoop, Segment, ViewType};
use uuid::Uuid;

use crate::geom::Plane;

/// Unique identifier of a document element.
pub type ElementId = Uuid;
/// Unique identifier of a view.
pub type ViewId = Uuid;
/// Unique identifier of a line style.
pub type LineStyleId = Uuid;

/// Name of the line style every fresh document carries.
pub const HIDDEN_LINE_STYLE: &str = "<Hidden>";

/// A named line style assignable to model curves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStyle {
    pub id: LineStyleId,
    pub name: String,
}

/// What an element is, and the data it carries.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// Ordinary model element with a per-view extent. Views in which the
    /// element has no extent simply have no entry.
    Model {
        view_extents: HashMap<ViewId, BoundingBox>,
    },
    /// Supporting sketch surface for curve creation.
    SketchPlane { plane: Plane },
    /// A bounded straight model curve on a sketch plane.
    ModelLine {
        segment: Segment,
        sketch_plane: ElementId,
        line_style: Option<LineStyleId>,
    },
}

/// An element owned by the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub name: String,
    pub kind: ElementKind,
}

/// A view over the document.
///
/// The crop pipeline reads `view_type` and `crop_box_active` and writes
/// `crop_shape`. `outline` is the view's own geometric constraint: when set,
/// the crop-shape manager declines shapes that do not fit inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub id: ViewId,
    pub name: String,
    pub view_type: ViewType,
    pub crop_box_active: bool,
    pub crop_shape: Option<CurveLoop>,
    pub outline: Option<BoundingBox>,
}

impl View {
    /// Create a view with an inactive crop box and no crop shape.
    pub fn new(name: impl Into<String>, view_type: ViewType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            view_type,
            crop_box_active: false,
            crop_shape: None,
            outline: None,
        }
    }
}

/// The document: element set, views, line styles, and a version counter
/// bumped on every committed transaction.
#[derive(Debug, Clone, Default)]
pub struct Document {
    views: Vec<View>,
    elements: Vec<Element>,
    line_styles: Vec<LineStyle>,
    version: u64,
}

impl Document {
    /// Create a document with the built-in `<Hidden>` line style.
    pub fn new() -> Self {
        let mut doc = Self::default();
        doc.add_line_style(HIDDEN_LINE_STYLE);
        doc
    }

    /// Current document version (increments on every committed transaction).
    pub fn version(&self) -> u64 {
        self.version
    }

    // ── Views ─────────────────────────────────────────────────

    pub fn add_view(&mut self, view: View) -> ViewId {
        let id = view.id;
        self.views.push(view);
        id
    }

    pub fn view(&self, id: ViewId) -> Option<&View> {
        self.views.iter().find(|v| v.id == id)
    }

    pub fn view_mut(&mut self, id: ViewId) -> Option<&mut View> {
        self.views.iter_mut().find(|v| v.id == id)
    }

    // ── Elements ──────────────────────────────────────────────

    pub fn add_element(&mut self, name: impl Into<String>, kind: ElementKind) -> ElementId {
        let id = Uuid::new_v4();
        self.elements.push(Element {
            id,
            name: name.into(),
            kind,
        });
        id
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Number of model line elements in the document.
    pub fn model_line_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e.kind, ElementKind::ModelLine { .. }))
            .count()
    }

    /// Per-element, per-view extent query. Absent for elements that have no
    /// extent in the given view, and for non-model elements.
    pub fn bounding_box_of(&self, element: ElementId, view: ViewId) -> Option<BoundingBox> {
        match &self.element(element)?.kind {
            ElementKind::Model { view_extents } => view_extents.get(&view).copied(),
            _ => None,
        }
    }

    // ── Line styles ───────────────────────────────────────────

    pub fn add_line_style(&mut self, name: impl Into<String>) -> LineStyleId {
        let id = Uuid::new_v4();
        self.line_styles.push(LineStyle {
            id,
            name: name.into(),
        });
        id
    }

    pub fn line_styles(&self) -> &[LineStyle] {
        &self.line_styles
    }

    /// Look up a line style by exact name match.
    pub fn line_style_by_name(&self, name: &str) -> Option<&LineStyle> {
        self.line_styles.iter().find(|s| s.name == name)
    }

    // ── Transactions ──────────────────────────────────────────

    /// Run `f` as an atomic unit of work. On `Ok` the changes are kept and
    /// the document version is bumped; on `Err` the document is restored to
    /// its pre-transaction state on every exit path.
    pub fn transaction<T, E>(
        &mut self,
        label: &str,
        f: impl FnOnce(&mut Document) -> Result<T, E>,
    ) -> Result<T, E> {
        let snapshot = self.clone();
        match f(self) {
            Ok(value) => {
                self.version += 1;
                tracing::debug!("transaction '{label}' committed (version {})", self.version);
                Ok(value)
            }
            Err(err) => {
                *self = snapshot;
                tracing::debug!("transaction '{label}' rolled back");
                Err(err)
            }
        }
    }
}
