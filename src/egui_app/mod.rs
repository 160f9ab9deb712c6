//! egui application modules: state, controller, renderer.

/// Controller bridging console state to the prediction service.
pub mod controller;
/// Shared state types consumed by the renderer.
pub mod state;
/// egui renderer.
pub mod ui;
