use super::*;
use super::jobs::JobMessage;

impl PredictorController {
    /// Drain finished job outcomes and fold them into UI state.
    ///
    /// Called once per frame by the renderer; never blocks.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.runtime.try_recv_message() {
                Ok(message) => message,
                Err(_) => break,
            };

            match message {
                JobMessage::TrainFinished(outcome) => {
                    self.runtime.clear_train();
                    match outcome.result {
                        Ok(response) => self.apply_train_result(response),
                        Err(err) => self.apply_train_error(err),
                    }
                }
                JobMessage::PredictFinished(outcome) => {
                    // A newer predict request supersedes this outcome.
                    if !self.runtime.predict_is_current(outcome.request_id) {
                        continue;
                    }
                    self.runtime.clear_predict(outcome.request_id);
                    match outcome.result {
                        Ok(response) => self.apply_predict_result(response),
                        Err(err) => self.apply_predict_error(err),
                    }
                }
                JobMessage::HealthChecked(outcome) => {
                    self.runtime.clear_health_check();
                    self.apply_health_result(outcome.result);
                }
            }
        }
    }
}
