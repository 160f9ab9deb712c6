//! Maintains console state and bridges the prediction service to the egui UI.

mod background_jobs;
mod jobs;
mod requests;

use crate::config::{self, AppConfig};
use crate::egui_app::state::{ServiceHealth, UiState};
use crate::egui_app::ui::style::{self, StatusTone};

/// Owns all view state and the background job runtime.
pub struct PredictorController {
    pub ui: UiState,
    config: AppConfig,
    runtime: jobs::ControllerJobs,
}

impl PredictorController {
    /// Build a controller around explicit settings.
    pub fn new(config: AppConfig) -> Self {
        let mut ui = UiState::default();
        ui.service.api_base = config.api_base.clone();
        Self {
            ui,
            config,
            runtime: jobs::ControllerJobs::new(),
        }
    }

    /// Build a controller from the persisted configuration.
    pub fn from_saved_config() -> Result<Self, config::ConfigError> {
        Ok(Self::new(config::load_or_default()?))
    }

    /// Run startup side effects once the window exists.
    pub fn startup(&mut self) {
        if self.config.check_service_on_startup {
            self.check_service_health();
        }
    }

    /// Whether a training request is outstanding; drives the Train control.
    pub fn training_in_progress(&self) -> bool {
        self.runtime.train_in_progress()
    }

    /// Whether any background request is outstanding; drives repaint scheduling.
    pub fn any_job_in_progress(&self) -> bool {
        self.runtime.train_in_progress()
            || self.runtime.predict_in_flight()
            || self.runtime.health_check_in_progress()
    }

    /// Base URL the console talks to.
    pub fn api_base(&self) -> &str {
        &self.config.api_base
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.badge_label = tone.label().into();
        self.ui.status.badge_color = style::status_badge_color(tone);
    }

    fn set_service_health(&mut self, health: ServiceHealth) {
        self.ui.service.health = health;
    }
}
