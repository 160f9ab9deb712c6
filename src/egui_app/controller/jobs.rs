use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;

use crate::service::{self, PredictRequest, PredictResponse, ServiceError, TrainResponse};

/// Outcome of a finished background request, delivered to the UI thread.
pub(super) enum JobMessage {
    TrainFinished(TrainOutcome),
    PredictFinished(PredictOutcome),
    HealthChecked(HealthOutcome),
}

pub(super) struct TrainOutcome {
    pub(super) result: Result<TrainResponse, ServiceError>,
}

pub(super) struct PredictOutcome {
    /// Id issued by `begin_predict`; stale outcomes are dropped by the pump.
    pub(super) request_id: u64,
    pub(super) result: Result<PredictResponse, ServiceError>,
}

pub(super) struct HealthOutcome {
    pub(super) result: Result<(), ServiceError>,
}

/// Background job runtime: one worker thread per outstanding request, all
/// outcomes funneled through a single channel drained on the UI thread.
pub(super) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    train_in_progress: bool,
    health_check_in_progress: bool,
    next_predict_request_id: u64,
    /// Most recently issued predict request; `None` while nothing is in flight.
    current_predict_request_id: Option<u64>,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            train_in_progress: false,
            health_check_in_progress: false,
            next_predict_request_id: 1,
            current_predict_request_id: None,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn train_in_progress(&self) -> bool {
        self.train_in_progress
    }

    pub(super) fn begin_train(&mut self, base_url: String) {
        if self.train_in_progress {
            return;
        }
        self.train_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = service::train(&base_url);
            let _ = tx.send(JobMessage::TrainFinished(TrainOutcome { result }));
        });
    }

    pub(super) fn clear_train(&mut self) {
        self.train_in_progress = false;
    }

    pub(super) fn predict_in_flight(&self) -> bool {
        self.current_predict_request_id.is_some()
    }

    /// Spawn a predict request and return its id. Issuing a new request
    /// supersedes any earlier one still in flight.
    pub(super) fn begin_predict(&mut self, base_url: String, request: PredictRequest) -> u64 {
        let request_id = self.next_predict_request_id;
        self.next_predict_request_id = self.next_predict_request_id.wrapping_add(1).max(1);
        self.current_predict_request_id = Some(request_id);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = service::predict(&base_url, &request);
            let _ = tx.send(JobMessage::PredictFinished(PredictOutcome {
                request_id,
                result,
            }));
        });
        request_id
    }

    pub(super) fn predict_is_current(&self, request_id: u64) -> bool {
        self.current_predict_request_id == Some(request_id)
    }

    pub(super) fn clear_predict(&mut self, request_id: u64) {
        if self.current_predict_request_id == Some(request_id) {
            self.current_predict_request_id = None;
        }
    }

    pub(super) fn health_check_in_progress(&self) -> bool {
        self.health_check_in_progress
    }

    pub(super) fn begin_health_check(&mut self, base_url: String) {
        if self.health_check_in_progress {
            return;
        }
        self.health_check_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = service::health(&base_url);
            let _ = tx.send(JobMessage::HealthChecked(HealthOutcome { result }));
        });
    }

    pub(super) fn clear_health_check(&mut self) {
        self.health_check_in_progress = false;
    }
}
