use eframe::egui::{self, Frame, Margin, RichText, Ui};

use super::{EguiApp, style};
use crate::egui_app::state::ConsoleState;

impl EguiApp {
    /// Render the training section and the prediction form.
    pub(super) fn render_console(&mut self, ui: &mut Ui) {
        ui.add_space(4.0);
        self.render_training_section(ui);
        ui.add_space(10.0);
        self.render_prediction_section(ui);
    }

    fn render_training_section(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        section_frame().show(ui, |ui| {
            ui.label(RichText::new("Model").color(palette.text_primary).strong());
            ui.add_space(6.0);
            let training = self.controller.training_in_progress();
            let label = if training {
                "Training…"
            } else {
                "Train (default dataset)"
            };
            let button = ui.add_enabled(!training, egui::Button::new(label));
            if button.clicked() {
                self.controller.train_model();
            }
            let metrics = self.controller.ui.console.metrics_text.clone();
            if !metrics.is_empty() {
                ui.add_space(6.0);
                egui::ScrollArea::vertical()
                    .id_salt("metrics_scroll")
                    .max_height(220.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new(metrics).monospace().color(palette.text_muted));
                    });
            }
        });
    }

    fn render_prediction_section(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        section_frame().show(ui, |ui| {
            ui.label(
                RichText::new("Prediction")
                    .color(palette.text_primary)
                    .strong(),
            );
            ui.add_space(6.0);
            egui::Grid::new("predict_form")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("CGPA");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.controller.ui.console.cgpa_input)
                            .desired_width(100.0),
                    );
                    ui.end_row();
                    ui.label("IQ");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.controller.ui.console.iq_input)
                            .desired_width(100.0),
                    );
                    ui.end_row();
                });
            ui.add_space(6.0);
            if ui.button("Predict").clicked() {
                self.controller.predict_placement();
            }
            if let Some(value) = self.controller.ui.console.prediction {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.label("Prediction:");
                    ui.label(
                        RichText::new(ConsoleState::prediction_label(value))
                            .color(palette.accent)
                            .strong(),
                    );
                });
            }
            let error = self.controller.ui.console.error.clone();
            if !error.is_empty() {
                ui.add_space(8.0);
                ui.label(RichText::new(format!("Error: {error}")).color(palette.warning));
            }
        });
    }
}

fn section_frame() -> Frame {
    Frame::new()
        .fill(style::palette().bg_secondary)
        .stroke(style::section_stroke())
        .inner_margin(Margin::same(10))
}
