mod support;

use std::thread;
use std::time::Duration;

use placedesk::config::AppConfig;
use placedesk::egui_app::controller::PredictorController;
use placedesk::egui_app::state::ConsoleState;
use support::stub_service::{CannedResponse, StubService};

fn controller_for(stub: &StubService) -> PredictorController {
    PredictorController::new(AppConfig {
        api_base: stub.base_url(),
        check_service_on_startup: false,
    })
}

/// Pump job messages until `done` holds, mirroring the per-frame poll.
fn wait_until(
    controller: &mut PredictorController,
    mut done: impl FnMut(&PredictorController) -> bool,
) {
    for _ in 0..400 {
        controller.poll_background_jobs();
        if done(controller) {
            return;
        }
        thread::sleep(Duration::from_millis(5));
    }
    panic!("timed out waiting for a background outcome");
}

#[test]
fn predict_sends_both_fields_and_renders_placed() {
    let stub = StubService::serve(vec![CannedResponse::json(200, r#"{"prediction": 1}"#)]);
    let mut controller = controller_for(&stub);

    controller.predict_placement();
    wait_until(&mut controller, |c| c.ui.console.prediction.is_some());

    assert_eq!(controller.ui.console.prediction, Some(1));
    assert_eq!(ConsoleState::prediction_label(1), "Placed");
    assert!(controller.ui.console.error.is_empty());

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/predict");
    let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(body, serde_json::json!({ "cgpa": 7.0, "iq": 85.0 }));
}

#[test]
fn predict_zero_renders_not_placed() {
    let stub = StubService::serve(vec![CannedResponse::json(200, r#"{"prediction": 0}"#)]);
    let mut controller = controller_for(&stub);

    controller.predict_placement();
    wait_until(&mut controller, |c| c.ui.console.prediction.is_some());

    let value = controller.ui.console.prediction.unwrap();
    assert_eq!(ConsoleState::prediction_label(value), "Not Placed");
}

#[test]
fn predict_failure_detail_is_shown_verbatim() {
    let stub = StubService::serve(vec![CannedResponse::json(422, r#"{"detail": "bad input"}"#)]);
    let mut controller = controller_for(&stub);

    controller.predict_placement();
    wait_until(&mut controller, |c| !c.ui.console.error.is_empty());

    assert_eq!(controller.ui.console.error, "bad input");
    assert_eq!(controller.ui.console.prediction, None);
}

#[test]
fn predict_failure_without_detail_uses_status_code() {
    let stub = StubService::serve(vec![CannedResponse::json(422, "oops")]);
    let mut controller = controller_for(&stub);

    controller.predict_placement();
    wait_until(&mut controller, |c| !c.ui.console.error.is_empty());

    assert_eq!(controller.ui.console.error, "Request failed: 422");
}

#[test]
fn train_disables_control_until_outcome_resolves() {
    let stub = StubService::serve(vec![CannedResponse::json(
        200,
        r#"{"message": "ok", "metrics": {"accuracy": 0.9}}"#,
    )]);
    let mut controller = controller_for(&stub);

    controller.train_model();
    assert!(controller.training_in_progress());

    wait_until(&mut controller, |c| !c.training_in_progress());
    assert_eq!(
        controller.ui.console.metrics_text,
        serde_json::to_string_pretty(&serde_json::json!({ "accuracy": 0.9 })).unwrap()
    );
    assert!(controller.ui.console.error.is_empty());

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/train");
}

#[test]
fn train_failure_reenables_control_and_reports_detail() {
    let stub = StubService::serve(vec![CannedResponse::json(500, r#"{"detail": "boom"}"#)]);
    let mut controller = controller_for(&stub);

    controller.train_model();
    wait_until(&mut controller, |c| !c.training_in_progress());

    assert_eq!(controller.ui.console.error, "boom");
    assert!(controller.ui.console.metrics_text.is_empty());
}

#[test]
fn new_attempt_clears_previous_results_before_resolving() {
    let stub = StubService::serve(vec![
        CannedResponse::json(200, r#"{"prediction": 1}"#),
        CannedResponse::json(422, r#"{"detail": "bad input"}"#),
    ]);
    let mut controller = controller_for(&stub);

    controller.predict_placement();
    wait_until(&mut controller, |c| c.ui.console.prediction.is_some());

    controller.predict_placement();
    // Cleared synchronously, before the second outcome lands.
    assert_eq!(controller.ui.console.prediction, None);
    assert!(controller.ui.console.error.is_empty());

    wait_until(&mut controller, |c| !c.ui.console.error.is_empty());
    assert_eq!(controller.ui.console.error, "bad input");
    assert_eq!(controller.ui.console.prediction, None);
}

#[test]
fn non_numeric_input_is_rejected_without_a_request() {
    let stub = StubService::serve(vec![]);
    let mut controller = controller_for(&stub);

    controller.ui.console.cgpa_input = "seven".into();
    controller.predict_placement();

    assert!(controller.ui.console.error.contains("CGPA"));
    assert!(!controller.any_job_in_progress());
    assert!(stub.requests().is_empty());
}

#[test]
fn superseded_predict_outcome_is_dropped() {
    // The first reply is delayed past the second submission, so its outcome
    // arrives stale and must not overwrite the newer request's result.
    let stub = StubService::serve(vec![
        CannedResponse::json(200, r#"{"prediction": 0}"#).delayed(Duration::from_millis(150)),
        CannedResponse::json(200, r#"{"prediction": 1}"#),
    ]);
    let mut controller = controller_for(&stub);

    controller.predict_placement();
    // Let the first request reach the stub before issuing the second.
    thread::sleep(Duration::from_millis(50));
    controller.predict_placement();

    wait_until(&mut controller, |c| c.ui.console.prediction.is_some());
    assert_eq!(controller.ui.console.prediction, Some(1));
}
