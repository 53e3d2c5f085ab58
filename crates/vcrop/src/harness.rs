//! Headless test harness for programmatic crop and line operations.
//!
//! Bundles a document, a crop-ready floor plan view, a selection, and a
//! recording reporter, so integration tests can drive the pipeline without
//! any host surface.

use shared::{CurveLoop, Point3, ViewType};

use crate::crop::{apply_crop, run_crop_pipeline, CropOutcome, RunStatus};
use crate::document::{Document, ElementId, ViewId, HIDDEN_LINE_STYLE};
use crate::fixtures::{add_box_element, plan_view_document};
use crate::modelline::{draw_model_lines, ConstructionError};
use crate::report::RecordingReporter;
use crate::selection::SelectionState;

/// Headless harness — manages document, view, selection, and reporter.
pub struct TestHarness {
    pub doc: Document,
    pub view_id: ViewId,
    pub selection: SelectionState,
    pub reporter: RecordingReporter,
}

impl TestHarness {
    /// Create a harness around a fresh document with one crop-ready floor
    /// plan view.
    pub fn new() -> Self {
        let (doc, view_id) = plan_view_document();
        Self {
            doc,
            view_id,
            selection: SelectionState::default(),
            reporter: RecordingReporter::default(),
        }
    }

    // ── Document manipulation ─────────────────────────────────

    /// Add a model element with the given extent in the harness view and
    /// return its id.
    pub fn add_box_element(&mut self, name: &str, min: [f64; 3], max: [f64; 3]) -> ElementId {
        add_box_element(&mut self.doc, self.view_id, name, min, max)
    }

    /// Select an element.
    pub fn select(&mut self, id: ElementId) {
        self.selection.select(id);
    }

    /// Change the view's kind.
    pub fn set_view_type(&mut self, view_type: ViewType) {
        if let Some(view) = self.doc.view_mut(self.view_id) {
            view.view_type = view_type;
        }
    }

    /// Toggle the view's crop box.
    pub fn set_crop_active(&mut self, active: bool) {
        if let Some(view) = self.doc.view_mut(self.view_id) {
            view.crop_box_active = active;
        }
    }

    /// Constrain the view to its own outline.
    pub fn set_outline(&mut self, min: [f64; 3], max: [f64; 3]) {
        if let Some(view) = self.doc.view_mut(self.view_id) {
            view.outline = Some(crate::fixtures::bbox(min, max));
        }
    }

    // ── Operations ────────────────────────────────────────────

    /// Run the crop pipeline and return the detailed outcome.
    pub fn run_crop(&mut self) -> CropOutcome {
        run_crop_pipeline(
            &mut self.doc,
            self.view_id,
            &self.selection,
            &mut self.reporter,
        )
    }

    /// Run the crop through the coarse host-facing entry point.
    pub fn apply_crop(&mut self) -> RunStatus {
        apply_crop(
            &mut self.doc,
            self.view_id,
            &self.selection,
            &mut self.reporter,
        )
    }

    /// Draw reference lines through the batch driver with the built-in
    /// hidden line style.
    pub fn draw_lines(&mut self, points: &[Point3]) -> Vec<Result<ElementId, ConstructionError>> {
        draw_model_lines(&mut self.doc, points, HIDDEN_LINE_STYLE, &mut self.reporter)
    }

    // ── Inspection ────────────────────────────────────────────

    /// The view's current crop shape.
    pub fn crop_shape(&self) -> Option<&CurveLoop> {
        self.doc.view(self.view_id)?.crop_shape.as_ref()
    }

    /// Messages reported so far.
    pub fn messages(&self) -> &[String] {
        &self.reporter.messages
    }

    /// Number of model lines in the document.
    pub fn model_line_count(&self) -> usize {
        self.doc.model_line_count()
    }

    /// Export the current crop shape as pretty JSON ("null" when absent).
    pub fn export_crop_json(&self) -> String {
        serde_json::to_string_pretty(&self.crop_shape()).unwrap_or_default()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
