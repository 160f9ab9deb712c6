use super::*;
use crate::egui_app::state::ConsoleState;
use crate::service::{PredictRequest, PredictResponse, ServiceError, TrainResponse};

impl PredictorController {
    /// Kick off a training run against the configured service.
    pub fn train_model(&mut self) {
        if self.runtime.train_in_progress() {
            self.set_status("Training already running", StatusTone::Info);
            return;
        }
        self.ui.console.begin_train_attempt();
        self.set_status("Training model…", StatusTone::Busy);
        self.runtime.begin_train(self.config.api_base.clone());
    }

    /// Submit the current form values for a placement prediction.
    pub fn predict_placement(&mut self) {
        self.ui.console.begin_predict_attempt();
        let request = match parse_form(&self.ui.console) {
            Ok(request) => request,
            Err(message) => {
                self.ui.console.error = message.clone();
                self.set_status(message, StatusTone::Warning);
                return;
            }
        };
        self.set_status("Requesting prediction…", StatusTone::Busy);
        self.runtime
            .begin_predict(self.config.api_base.clone(), request);
    }

    /// Probe service reachability in the background.
    pub fn check_service_health(&mut self) {
        if self.runtime.health_check_in_progress() {
            return;
        }
        self.set_service_health(crate::egui_app::state::ServiceHealth::Checking);
        self.runtime
            .begin_health_check(self.config.api_base.clone());
    }

    pub(super) fn apply_train_result(&mut self, response: TrainResponse) {
        self.ui.console.metrics_text = response.metrics_text();
        self.set_status(response.message, StatusTone::Info);
    }

    pub(super) fn apply_train_error(&mut self, error: ServiceError) {
        self.ui.console.error = error.to_string();
        self.set_status("Training failed", StatusTone::Error);
    }

    pub(super) fn apply_predict_result(&mut self, response: PredictResponse) {
        self.ui.console.prediction = Some(response.prediction);
        self.set_status(
            format!(
                "Prediction: {}",
                ConsoleState::prediction_label(response.prediction)
            ),
            StatusTone::Info,
        );
    }

    pub(super) fn apply_predict_error(&mut self, error: ServiceError) {
        self.ui.console.error = error.to_string();
        self.set_status("Prediction failed", StatusTone::Error);
    }

    pub(super) fn apply_health_result(&mut self, result: Result<(), ServiceError>) {
        match result {
            Ok(()) => {
                self.set_service_health(crate::egui_app::state::ServiceHealth::Reachable);
            }
            Err(err) => {
                self.set_service_health(crate::egui_app::state::ServiceHealth::Unreachable);
                tracing::warn!("Service health check failed: {err}");
            }
        }
    }
}

fn parse_form(console: &ConsoleState) -> Result<PredictRequest, String> {
    let cgpa = parse_numeric_field("CGPA", &console.cgpa_input)?;
    let iq = parse_numeric_field("IQ", &console.iq_input)?;
    Ok(PredictRequest { cgpa, iq })
}

fn parse_numeric_field(label: &str, raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| format!("{label} must be a number (got '{}')", raw.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::egui_app::state::ServiceHealth;

    #[test]
    fn numeric_fields_parse_decimals() {
        assert_eq!(parse_numeric_field("CGPA", " 7.25 "), Ok(7.25));
        assert_eq!(parse_numeric_field("IQ", "85"), Ok(85.0));
    }

    #[test]
    fn non_numeric_field_is_rejected_with_its_label() {
        let err = parse_numeric_field("CGPA", "seven").unwrap_err();
        assert!(err.contains("CGPA"));
        assert!(err.contains("seven"));
        assert!(parse_numeric_field("IQ", "NaN").is_err());
        assert!(parse_numeric_field("IQ", "inf").is_err());
    }

    #[test]
    fn invalid_input_sets_error_without_spawning_a_request() {
        let mut controller = PredictorController::new(AppConfig::default());
        controller.ui.console.cgpa_input = "seven".into();
        controller.predict_placement();
        assert!(controller.ui.console.error.contains("CGPA"));
        assert!(!controller.any_job_in_progress());
    }

    #[test]
    fn train_result_fills_metrics_and_clears_nothing_else() {
        let mut controller = PredictorController::new(AppConfig::default());
        controller.apply_train_result(TrainResponse {
            message: "Model trained".into(),
            metrics: Some(serde_json::json!({ "accuracy": 0.9 })),
        });
        assert_eq!(
            controller.ui.console.metrics_text,
            serde_json::to_string_pretty(&serde_json::json!({ "accuracy": 0.9 })).unwrap()
        );
        assert_eq!(controller.ui.status.text, "Model trained");
    }

    #[test]
    fn predict_result_updates_label_and_status() {
        let mut controller = PredictorController::new(AppConfig::default());
        controller.apply_predict_result(PredictResponse { prediction: 1 });
        assert_eq!(controller.ui.console.prediction, Some(1));
        assert_eq!(controller.ui.status.text, "Prediction: Placed");
    }

    #[test]
    fn request_errors_land_in_the_error_slot() {
        let mut controller = PredictorController::new(AppConfig::default());
        controller.apply_predict_error(ServiceError::Status(422));
        assert_eq!(controller.ui.console.error, "Request failed: 422");
        controller.apply_train_error(ServiceError::Rejected {
            status: 400,
            detail: "bad input".into(),
        });
        assert_eq!(controller.ui.console.error, "bad input");
    }

    #[test]
    fn health_outcome_updates_service_state() {
        let mut controller = PredictorController::new(AppConfig::default());
        controller.apply_health_result(Ok(()));
        assert_eq!(controller.ui.service.health, ServiceHealth::Reachable);
        controller.apply_health_result(Err(ServiceError::Transport("refused".into())));
        assert_eq!(controller.ui.service.health, ServiceHealth::Unreachable);
    }
}
