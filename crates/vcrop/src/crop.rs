//! Crop applier: preconditions, pipeline, and atomic commit of a view's
//! crop shape.
//!
//! The pipeline runs strictly in sequence: preconditions, extent
//! aggregation, rectangle synthesis, validity gate, commit. Any failure
//! aborts the whole run without mutating state. The abort is either
//! reported through the [`Reporter`] or silent; the distinction is carried
//! explicitly in [`AbortReason`] rather than re-derived from control flow.

use std::fmt;

use shared::{CurveLoop, ViewType};

use crate::document::{Document, View, ViewId};
use crate::extents::{envelope_of, selection_corner_points};
use crate::rectangle::footprint_rectangle;
use crate::report::Reporter;
use crate::selection::SelectionState;
use crate::validation::LoopValidator;

/// Coarse status returned to the host invocation surface.
///
/// This is always `Succeeded`, including when the operation internally
/// aborted on a precondition or validation failure. Preserved observed host
/// behavior: callers must not infer the outcome from this status alone; the
/// detailed outcome is in [`CropOutcome`] and reported messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Succeeded,
}

/// Stages of the crop applier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropStage {
    Idle,
    Validating,
    Committing,
    Done,
    Aborted,
}

/// Why a crop run aborted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// The view-specific acceptance check declined the shape. By design this
    /// is not surfaced to the operator.
    Silent,
    /// A precondition or validation failure, already reported.
    Reported(String),
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::Silent => write!(f, "aborted silently"),
            AbortReason::Reported(msg) => write!(f, "{msg}"),
        }
    }
}

/// Final state of one crop run.
#[derive(Debug, Clone, PartialEq)]
pub struct CropOutcome {
    pub stage: CropStage,
    pub abort: Option<AbortReason>,
}

impl CropOutcome {
    fn silent_abort() -> Self {
        Self {
            stage: CropStage::Aborted,
            abort: Some(AbortReason::Silent),
        }
    }

    /// True if the run committed a crop shape.
    pub fn committed(&self) -> bool {
        self.stage == CropStage::Done
    }
}

/// View-specific acceptance check for a candidate crop shape, distinct from
/// the generic rectangle validation performed by the validity gate.
pub trait CropAcceptance {
    fn accepts(&self, shape: &CurveLoop) -> bool;
}

/// The view's crop-shape manager: acceptance check plus mutator.
pub struct CropShapeManager<'a> {
    view: &'a mut View,
}

impl<'a> CropShapeManager<'a> {
    pub fn new(view: &'a mut View) -> Self {
        Self { view }
    }

    /// Write the shape as the view's crop boundary.
    pub fn set_shape(&mut self, shape: CurveLoop) {
        self.view.crop_shape = Some(shape);
    }
}

impl CropAcceptance for CropShapeManager<'_> {
    fn accepts(&self, shape: &CurveLoop) -> bool {
        if shape.len() != 4 || !shape.is_closed() {
            return false;
        }
        let corners = shape.corners();
        if corners
            .iter()
            .any(|c| !(c.x.is_finite() && c.y.is_finite() && c.z.is_finite()))
        {
            return false;
        }
        // A view with its own outline declines shapes that spill past it.
        match &self.view.outline {
            Some(outline) => corners.iter().all(|c| {
                c.x >= outline.min.x
                    && c.x <= outline.max.x
                    && c.y >= outline.min.y
                    && c.y <= outline.max.y
            }),
            None => true,
        }
    }
}

/// Run the full crop pipeline on the given view and selection.
///
/// Precondition failures and geometric rejections are reported and abort the
/// run; the view-specific acceptance check aborts silently. On success the
/// shape is committed inside a single transaction.
pub fn run_crop_pipeline(
    doc: &mut Document,
    view_id: ViewId,
    selection: &SelectionState,
    reporter: &mut dyn Reporter,
) -> CropOutcome {
    // Preconditions come before any geometry work.
    let Some(view) = doc.view(view_id) else {
        return abort(reporter, "The target view no longer exists in the document.".into());
    };
    if view.view_type != ViewType::FloorPlan {
        return abort(
            reporter,
            "This is not a floor plan view. Run the crop command on a floor plan.".into(),
        );
    }
    if !view.crop_box_active {
        return abort(
            reporter,
            "Crop box for this view is not active. Activate it first.".into(),
        );
    }
    if selection.is_empty() {
        return abort(
            reporter,
            "No elements selected. Select the elements to crop around.".into(),
        );
    }

    // Preconditions hold; the applier enters the machine proper.
    let mut stage = CropStage::Idle;
    tracing::debug!("crop pipeline: {stage:?} (preconditions passed)");

    let points = selection_corner_points(doc, view_id, selection);
    let Some(envelope) = envelope_of(&points) else {
        return abort(
            reporter,
            "Selected elements have no extents in this view.".into(),
        );
    };

    let shape = match footprint_rectangle(&envelope) {
        Ok(shape) => shape,
        Err(err) => {
            return abort(reporter, format!("Could not build a crop rectangle: {err}."));
        }
    };

    let failures = LoopValidator::new(&shape).validate_all();
    if !failures.is_empty() {
        return abort(
            reporter,
            format!("Generated crop boundary is not rectangular: {}.", failures.join("; ")),
        );
    }
    stage = CropStage::Validating;
    tracing::debug!("crop pipeline: {stage:?} (gate passed)");

    let applied = doc
        .transaction("fix crop region", |doc| {
            let applied = match doc.view_mut(view_id) {
                Some(view) => {
                    let mut manager = CropShapeManager::new(view);
                    if manager.accepts(&shape) {
                        manager.set_shape(shape.clone());
                        true
                    } else {
                        false
                    }
                }
                None => false,
            };
            // The transaction commits either way; a declined shape is a
            // committed no-op.
            Ok::<_, ()>(applied)
        })
        .unwrap_or(false);

    if applied {
        stage = CropStage::Committing;
        tracing::debug!("crop pipeline: {stage:?} (view accepted the shape)");
        stage = CropStage::Done;
        tracing::debug!("crop pipeline: {stage:?} (shape committed)");
        CropOutcome { stage, abort: None }
    } else {
        CropOutcome::silent_abort()
    }
}

/// Host-facing entry point: run the crop operation and return the coarse
/// status, which is always [`RunStatus::Succeeded`] regardless of internal
/// aborts (see [`RunStatus`]).
pub fn apply_crop(
    doc: &mut Document,
    view_id: ViewId,
    selection: &SelectionState,
    reporter: &mut dyn Reporter,
) -> RunStatus {
    let outcome = run_crop_pipeline(doc, view_id, selection, reporter);
    tracing::debug!("crop run finished in stage {:?}", outcome.stage);
    RunStatus::Succeeded
}

fn abort(reporter: &mut dyn Reporter, message: String) -> CropOutcome {
    reporter.report(&message);
    tracing::debug!("crop pipeline aborted: {message}");
    CropOutcome {
        stage: CropStage::Aborted,
        abort: Some(AbortReason::Reported(message)),
    }
}
