// Failure response seam
//
// The engine does not write to a transport. It shapes the failure
// payload and hands it to a responder supplied by the host layer.

use crate::{Verdict, ValidationError};
use serde::{Deserialize, Serialize};

/// Status code reported for validation failures
pub const FAILURE_STATUS: u16 = 400;

/// JSON payload sent when validation fails:
/// `{"success": false, "message": ..., "errors": {field: message}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
    pub errors: serde_json::Value,
}

impl FailureResponse {
    /// Build the payload for a failed verdict, `None` for a valid one.
    ///
    /// A halted verdict carries a single-entry error map; an aggregated
    /// one carries every failed field.
    pub fn from_verdict(verdict: &Verdict) -> Option<Self> {
        match verdict {
            Verdict::Valid => None,
            Verdict::Halted(error) => Some(Self::from_single(error)),
            Verdict::Invalid { message, errors } => Some(Self {
                success: false,
                message: message.clone(),
                errors: errors.to_json(),
            }),
        }
    }

    fn from_single(error: &ValidationError) -> Self {
        let mut map = serde_json::Map::new();
        map.insert(
            error.field.clone(),
            serde_json::Value::String(error.message.clone()),
        );
        Self {
            success: false,
            message: error.message.clone(),
            errors: serde_json::Value::Object(map),
        }
    }

    /// Serialize to a JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "success": self.success,
            "message": self.message,
            "errors": self.errors,
        })
    }
}

/// Emits the failure payload to the host transport.
pub trait Responder {
    /// Send a JSON payload with the given status code
    fn respond(&mut self, payload: &FailureResponse, status: u16);
}

/// Invoke the responder exactly once if the verdict is a failure.
/// Returns `true` when a response was sent. Never called for a valid
/// verdict, so the host can continue processing on `false`.
pub fn respond_on_failure<R: Responder>(verdict: &Verdict, responder: &mut R) -> bool {
    match FailureResponse::from_verdict(verdict) {
        Some(payload) => {
            responder.respond(&payload, FAILURE_STATUS);
            true
        }
        None => false,
    }
}
