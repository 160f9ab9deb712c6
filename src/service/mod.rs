//! Client for the external prediction service.
//!
//! The service trains a binary placement classifier and serves predictions;
//! everything behind its HTTP surface is out of scope here. This module is
//! consumed by the egui controller's background jobs and by integration
//! tests.

mod api;

pub use api::{PredictRequest, PredictResponse, ServiceError, TrainResponse, health, predict, train};
