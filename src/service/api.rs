//! HTTP bindings for the prediction service endpoints.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::http_client;

const MAX_RESPONSE_BYTES: usize = 64 * 1024;

/// Feature payload for `POST /predict`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PredictRequest {
    pub cgpa: f64,
    pub iq: f64,
}

/// Successful `POST /predict` body.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct PredictResponse {
    /// Binary placement label; the service emits 0 or 1.
    pub prediction: i64,
}

/// Successful `POST /train` body.
#[derive(Clone, Debug, Deserialize)]
pub struct TrainResponse {
    pub message: String,
    #[serde(default)]
    pub metrics: Option<serde_json::Value>,
}

impl TrainResponse {
    /// Pretty-printed metrics block; an absent payload renders as `{}`.
    pub fn metrics_text(&self) -> String {
        let metrics = self
            .metrics
            .clone()
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));
        serde_json::to_string_pretty(&metrics).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Failures surfaced to the console; `Display` is the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Failure status whose body carried a `detail` string.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },
    /// Failure status without a parseable detail payload.
    #[error("Request failed: {0}")]
    Status(u16),
    /// The request never completed.
    #[error("{0}")]
    Transport(String),
    /// A success response whose body did not match the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Trigger a training run on the service's default dataset.
pub fn train(base_url: &str) -> Result<TrainResponse, ServiceError> {
    let url = endpoint(base_url, "/train");
    let response = match http_client::agent()
        .post(&url)
        .set("Accept", "application/json")
        .call()
    {
        Ok(response) => response,
        Err(err) => return Err(map_request_error(err)),
    };
    parse_success_body(response)
}

/// Request a placement prediction for one CGPA/IQ pair.
pub fn predict(base_url: &str, request: &PredictRequest) -> Result<PredictResponse, ServiceError> {
    let url = endpoint(base_url, "/predict");
    let response = match http_client::agent()
        .post(&url)
        .set("Accept", "application/json")
        .send_json(request)
    {
        Ok(response) => response,
        Err(err) => return Err(map_request_error(err)),
    };
    parse_success_body(response)
}

/// Probe service reachability. Any 2xx counts as healthy.
pub fn health(base_url: &str) -> Result<(), ServiceError> {
    let url = endpoint(base_url, "/health");
    match http_client::agent().get(&url).call() {
        Ok(_) => Ok(()),
        Err(err) => Err(map_request_error(err)),
    }
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Shape of failure bodies; `detail` is optional per the service contract.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

fn map_request_error(error: ureq::Error) -> ServiceError {
    match error {
        ureq::Error::Status(code, response) => status_error(code, response),
        ureq::Error::Transport(err) => ServiceError::Transport(err.to_string()),
    }
}

fn status_error(code: u16, response: ureq::Response) -> ServiceError {
    let detail = http_client::read_body_limited(response, MAX_RESPONSE_BYTES)
        .ok()
        .and_then(|body| serde_json::from_str::<ErrorBody>(body.trim()).ok())
        .and_then(|parsed| parsed.detail)
        .filter(|detail| !detail.is_empty());
    match detail {
        Some(detail) => ServiceError::Rejected {
            status: code,
            detail,
        },
        None => ServiceError::Status(code),
    }
}

fn parse_success_body<T: DeserializeOwned>(response: ureq::Response) -> Result<T, ServiceError> {
    let body = http_client::read_body_limited(response, MAX_RESPONSE_BYTES)
        .map_err(|err| ServiceError::InvalidResponse(err.to_string()))?;
    serde_json::from_str(body.trim()).map_err(|err| ServiceError::InvalidResponse(err.to_string()))
}
