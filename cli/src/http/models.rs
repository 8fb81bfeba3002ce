//! HTTP API data models

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use statefacts_core::api::{FactRecord, StateCodeError, StateRecord, StoreError};
use std::collections::BTreeMap;
use tracing::error;

// ============= States =============

#[derive(Debug, Default, Deserialize)]
pub struct ListStatesQuery {
    #[serde(default)]
    pub contig: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CapitalResponse {
    pub state: &'static str,
    pub capital: &'static str,
}

#[derive(Debug, Serialize)]
pub struct NicknameResponse {
    pub state: &'static str,
    pub nickname: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PopulationResponse {
    pub state: &'static str,
    /// Thousands-separated, e.g. "5,024,279".
    pub population: String,
}

#[derive(Debug, Serialize)]
pub struct AdmissionResponse {
    pub state: &'static str,
    pub admitted: &'static str,
}

impl From<&'static StateRecord> for CapitalResponse {
    fn from(r: &'static StateRecord) -> Self {
        Self {
            state: &r.state,
            capital: &r.capital_city,
        }
    }
}

impl From<&'static StateRecord> for NicknameResponse {
    fn from(r: &'static StateRecord) -> Self {
        Self {
            state: &r.state,
            nickname: &r.nickname,
        }
    }
}

impl From<&'static StateRecord> for AdmissionResponse {
    fn from(r: &'static StateRecord) -> Self {
        Self {
            state: &r.state,
            admitted: &r.admission_date,
        }
    }
}

// ============= Fun facts =============

/// Body of `POST /states/:state/funfact`. Fields stay untyped so that
/// absence and wrong types can be told apart.
#[derive(Debug, Default, Deserialize)]
pub struct CreateFactsRequest {
    #[serde(default)]
    pub funfacts: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ModifyFactRequest {
    #[serde(default)]
    pub index: Option<Value>,
    #[serde(default)]
    pub funfact: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteFactRequest {
    #[serde(default)]
    pub index: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RandomFactResponse {
    Fact { funfact: String },
    Message(MessageResponse),
}

/// A saved record, or the message explaining why nothing was changed.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FactEditResponse {
    Record(FactRecord),
    Message(MessageResponse),
}

// ============= Health =============

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: f64,
    pub requests_handled: u64,
    pub requests_by_endpoint: BTreeMap<String, u64>,
    /// Requests that failed on a store error.
    pub store_errors: u64,
    pub timestamp: String,
}

// ============= Error Handling =============

#[derive(Debug)]
pub enum HttpServerError {
    MissingParameter,
    InvalidParameter(String),
    MissingField(String),
    WrongType(String),
    Persistence(String),
}

impl From<StateCodeError> for HttpServerError {
    fn from(e: StateCodeError) -> Self {
        match e {
            StateCodeError::Missing => Self::MissingParameter,
            StateCodeError::Invalid(code) => Self::InvalidParameter(code),
        }
    }
}

impl From<StoreError> for HttpServerError {
    fn from(e: StoreError) -> Self {
        error!(error = %e, "Fact store operation failed");
        Self::Persistence(e.to_string())
    }
}

impl IntoResponse for HttpServerError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            Self::MissingParameter => (
                StatusCode::BAD_REQUEST,
                "MISSING_PARAMETER",
                StateCodeError::Missing.to_string(),
            ),
            Self::InvalidParameter(code) => (
                StatusCode::BAD_REQUEST,
                "INVALID_PARAMETER",
                StateCodeError::Invalid(code).to_string(),
            ),
            Self::MissingField(msg) => (StatusCode::BAD_REQUEST, "MISSING_FIELD", msg),
            Self::WrongType(msg) => (StatusCode::BAD_REQUEST, "WRONG_TYPE", msg),
            // Store details stay in the logs.
            Self::Persistence(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PERSISTENCE_FAILURE",
                "Internal server error".to_string(),
            ),
        };

        let body = serde_json::json!({
            "message": message,
            "error_code": error_code,
        });

        (status, Json(body)).into_response()
    }
}
