//! Shared state types for the egui UI.

use crate::egui_app::ui::style;
use egui::Color32;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub console: ConsoleState,
    pub service: ServiceUiState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            console: ConsoleState::default(),
            service: ServiceUiState::default(),
        }
    }
}

/// Form fields and last results for the predictor console.
///
/// All of this is ephemeral view state; nothing here survives an app
/// restart.
#[derive(Clone, Debug)]
pub struct ConsoleState {
    /// CGPA text field, parsed to a number on submit.
    pub cgpa_input: String,
    /// IQ text field, parsed to a number on submit.
    pub iq_input: String,
    /// Last successful prediction value; cleared when a new attempt starts.
    pub prediction: Option<i64>,
    /// Pretty-printed metrics from the last training run, or empty.
    pub metrics_text: String,
    /// Most recent failure message, or empty.
    pub error: String,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self {
            cgpa_input: "7.0".into(),
            iq_input: "85".into(),
            prediction: None,
            metrics_text: String::new(),
            error: String::new(),
        }
    }
}

impl ConsoleState {
    /// Reset transient fields before a new prediction attempt.
    pub fn begin_predict_attempt(&mut self) {
        self.error.clear();
        self.prediction = None;
    }

    /// Reset transient fields before a new training attempt.
    pub fn begin_train_attempt(&mut self) {
        self.error.clear();
        self.metrics_text.clear();
    }

    /// Label rendered for a stored prediction value.
    pub fn prediction_label(value: i64) -> &'static str {
        if value == 1 { "Placed" } else { "Not Placed" }
    }
}

/// Reachability of the prediction service, shown in the status bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ServiceHealth {
    /// Not probed yet.
    #[default]
    Unknown,
    /// Probe in flight.
    Checking,
    Reachable,
    Unreachable,
}

/// Service-related UI state.
#[derive(Clone, Debug, Default)]
pub struct ServiceUiState {
    pub health: ServiceHealth,
    /// Base URL the console talks to, shown in the status bar.
    pub api_base: String,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Default status shown before any request has been issued.
    pub fn idle() -> Self {
        Self {
            text: "Train the model or submit a prediction".into(),
            badge_label: "Idle".into(),
            badge_color: style::status_badge_color(style::StatusTone::Idle),
        }
    }
}
