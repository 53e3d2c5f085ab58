//! Integration tests for the reference line builder and its batch driver.

use shared::Point3;
use vcrop::document::{Document, ElementKind, HIDDEN_LINE_STYLE};
use vcrop::harness::TestHarness;
use vcrop::modelline::{create_model_line, draw_model_lines, ConstructionError};
use vcrop::report::RecordingReporter;

fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

#[test]
fn test_line_endpoints_match_inputs_exactly() {
    let mut h = TestHarness::new();
    let outcomes = h.draw_lines(&[p(1.5, -2.0, 3.25), p(7.0, 8.0, -1.0)]);
    let id = outcomes[0].as_ref().unwrap();

    match &h.doc.element(*id).unwrap().kind {
        ElementKind::ModelLine { segment, .. } => {
            assert_eq!(segment.start(), p(1.5, -2.0, 3.25));
            assert_eq!(segment.end(), p(7.0, 8.0, -1.0));
        }
        other => panic!("expected a model line, got {other:?}"),
    }
}

#[test]
fn test_each_line_gets_a_sketch_plane() {
    let mut h = TestHarness::new();
    let outcomes = h.draw_lines(&[p(0.0, 0.0, 0.0), p(4.0, 1.0, 2.0)]);
    let id = outcomes[0].as_ref().unwrap();

    match &h.doc.element(*id).unwrap().kind {
        ElementKind::ModelLine { sketch_plane, .. } => {
            let plane_elem = h.doc.element(*sketch_plane).unwrap();
            assert!(matches!(plane_elem.kind, ElementKind::SketchPlane { .. }));
        }
        other => panic!("expected a model line, got {other:?}"),
    }
}

#[test]
fn test_hidden_style_is_assigned_by_exact_name() {
    let mut h = TestHarness::new();
    let hidden_id = h.doc.line_style_by_name(HIDDEN_LINE_STYLE).unwrap().id;
    let outcomes = h.draw_lines(&[p(0.0, 0.0, 0.0), p(1.0, 2.0, 3.0)]);
    let id = outcomes[0].as_ref().unwrap();

    match &h.doc.element(*id).unwrap().kind {
        ElementKind::ModelLine { line_style, .. } => {
            assert_eq!(*line_style, Some(hidden_id));
        }
        other => panic!("expected a model line, got {other:?}"),
    }
}

#[test]
fn test_style_match_is_case_sensitive() {
    let mut doc = Document::new();
    let id = create_model_line(&mut doc, p(0.0, 0.0, 0.0), p(1.0, 2.0, 3.0), "<hidden>").unwrap();
    match &doc.element(id).unwrap().kind {
        ElementKind::ModelLine { line_style, .. } => assert!(line_style.is_none()),
        other => panic!("expected a model line, got {other:?}"),
    }
}

#[test]
fn test_coincident_pair_reports_and_creates_nothing() {
    let mut h = TestHarness::new();
    let outcomes = h.draw_lines(&[p(2.0, 2.0, 2.0), p(2.0, 2.0, 2.0)]);

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0], Err(ConstructionError::CoincidentPoints));
    assert_eq!(h.model_line_count(), 0);
    assert!(h.reporter.contains("two distinct points"));
}

#[test]
fn test_batch_is_one_transaction_with_per_pair_outcomes() {
    let mut doc = Document::new();
    let mut reporter = RecordingReporter::default();
    let version_before = doc.version();

    let points = [
        p(0.0, 0.0, 0.0),
        p(1.0, 0.0, 1.0),
        p(3.0, 3.0, 3.0),
        p(3.0, 3.0, 3.0), // fails
        p(5.0, 0.0, 0.0),
        p(6.0, 0.0, 1.0),
        p(9.0, 9.0, 9.0), // trailing point, discarded
    ];
    let outcomes = draw_model_lines(&mut doc, &points, HIDDEN_LINE_STYLE, &mut reporter);

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes.iter().filter(|o| o.is_ok()).count(), 2);
    assert_eq!(doc.model_line_count(), 2);
    // One committed transaction for the whole batch.
    assert_eq!(doc.version(), version_before + 1);
    assert_eq!(reporter.messages.len(), 1);
}

#[test]
fn test_independent_batches_do_not_interfere() {
    let mut h = TestHarness::new();
    h.draw_lines(&[p(0.0, 0.0, 0.0), p(0.0, 0.0, 0.0)]); // fails entirely
    h.draw_lines(&[p(0.0, 0.0, 0.0), p(1.0, 2.0, 3.0)]); // succeeds

    assert_eq!(h.model_line_count(), 1);
}
