//! egui renderer for the predictor console.

mod console_panel;
pub mod style;

use std::time::Duration;

use eframe::egui::{self, Color32, Frame, Margin, RichText, StrokeKind};

use crate::egui_app::controller::PredictorController;
use crate::egui_app::state::ServiceHealth;

/// Smallest window size that keeps the form usable.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::Vec2::new(420.0, 480.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: PredictorController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app, loading persisted configuration.
    pub fn new() -> Result<Self, String> {
        let mut controller = PredictorController::from_saved_config()
            .map_err(|err| format!("Failed to load config: {err}"))?;
        controller.startup();
        Ok(Self {
            controller,
            visuals_set: false,
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(8, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Placement Predictor")
                            .color(palette.text_primary)
                            .strong(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
            });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = self.controller.ui.status.clone();
                ui.horizontal(|ui| {
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter().rect_filled(badge_rect, 0.0, status.badge_color);
                    ui.painter().rect_stroke(
                        badge_rect,
                        0.0,
                        style::section_stroke(),
                        StrokeKind::Inside,
                    );
                    ui.add_space(6.0);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let (label, color) = service_health_badge(self.controller.ui.service.health);
                        let response = ui.add(
                            egui::Label::new(RichText::new(label).color(color))
                                .sense(egui::Sense::click()),
                        );
                        if response.on_hover_text("Click to re-check").clicked() {
                            self.controller.check_service_health();
                        }
                        ui.separator();
                        ui.label(
                            RichText::new(&self.controller.ui.service.api_base)
                                .color(palette.text_muted),
                        );
                    });
                });
            });
    }
}

fn service_health_badge(health: ServiceHealth) -> (&'static str, Color32) {
    let palette = style::palette();
    match health {
        ServiceHealth::Unknown => ("Service: unknown", palette.text_muted),
        ServiceHealth::Checking => ("Service: checking…", palette.text_muted),
        ServiceHealth::Reachable => ("Service: reachable", palette.success),
        ServiceHealth::Unreachable => ("Service: unreachable", palette.warning),
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        self.render_top_bar(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_console(ui);
        });
        // Background outcomes arrive between input events; keep painting
        // until every outstanding request has been folded into state.
        if self.controller.any_job_in_progress() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
