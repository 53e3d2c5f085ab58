//! Demo binary: build a small document, crop the plan view around a
//! selection, and place a few reference lines.

use vcrop::crop::apply_crop;
use vcrop::document::HIDDEN_LINE_STYLE;
use vcrop::fixtures::{add_box_element, plan_view_document, point};
use vcrop::modelline::draw_model_lines;
use vcrop::report::TracingReporter;
use vcrop::selection::SelectionState;

fn main() {
    tracing_subscriber::fmt::init();

    let (mut doc, view_id) = plan_view_document();
    let wall = add_box_element(&mut doc, view_id, "wall", [0.0, 0.0, 0.0], [10.0, 4.0, 7.0]);
    let column = add_box_element(&mut doc, view_id, "column", [8.0, 3.0, 0.0], [12.0, 6.0, 3.0]);

    let mut selection = SelectionState::default();
    selection.select(wall);
    selection.select(column);

    let mut reporter = TracingReporter;
    let status = apply_crop(&mut doc, view_id, &selection, &mut reporter);
    tracing::info!("crop run finished with {status:?}");
    if let Some(view) = doc.view(view_id) {
        if let Some(shape) = &view.crop_shape {
            tracing::info!("view '{}' crop corners: {:?}", view.name, shape.corners());
        }
    }

    let line_points = [
        point(0.0, 0.0, 0.0),
        point(12.0, 6.0, 0.0),
        point(0.0, 6.0, 0.0),
        point(12.0, 0.0, 0.0),
    ];
    let outcomes = draw_model_lines(&mut doc, &line_points, HIDDEN_LINE_STYLE, &mut reporter);
    tracing::info!(
        "placed {} of {} reference lines",
        outcomes.iter().filter(|o| o.is_ok()).count(),
        outcomes.len()
    );
}
