//! Response types for the Pay Stub Engine API.
//!
//! This module defines the success bodies and the error response structures
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{AuditTrace, PayPreview, PayResult, StubDocument};

/// Body of a `/preview` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    /// Identifier of this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The preview figures.
    pub preview: PayPreview,
}

/// Body of a `/stub/layout` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutResponse {
    /// Identifier of this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The full set of figures.
    pub result: PayResult,
    /// How each figure was reached.
    pub audit_trace: AuditTrace,
    /// The laid out page.
    pub document: StubDocument,
}

/// JSON error body returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Stable machine-readable code, e.g. `MALFORMED_JSON`.
    pub code: String,
    /// What went wrong.
    pub message: String,
    /// Extra context, omitted when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates an error without details.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates an error carrying extra context.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Error for a body that is not valid form JSON.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// An [`ApiError`] paired with the status it is sent with.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::MissingRenderingDependency { dependency } => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::with_details(
                    "MISSING_RENDERING_DEPENDENCY",
                    format!("Document renderer not available: {}", dependency),
                    "Pay stub documents cannot be generated until the renderer is installed",
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::RenderError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("RENDER_ERROR", "Rendering failed", message),
            },
            EngineError::Io { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "IO_ERROR",
                    format!("Failed to write {}", path),
                    message,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_json_body_has_no_details() {
        let value = serde_json::to_value(ApiError::malformed_json("expected value")).unwrap();
        assert_eq!(value["code"], "MALFORMED_JSON");
        assert_eq!(value["message"], "expected value");
        assert!(value.get("details").is_none());
    }

    #[test]
    fn test_config_error_keeps_path_in_details() {
        let engine_error = EngineError::ConfigNotFound {
            path: "config/paystub.yaml".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
        assert_eq!(
            api_error.error.details.as_deref(),
            Some("Configuration file not found: config/paystub.yaml")
        );
    }

    #[test]
    fn test_missing_renderer_maps_to_service_unavailable() {
        let engine_error = EngineError::MissingRenderingDependency {
            dependency: "lopdf".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(api_error.error.code, "MISSING_RENDERING_DEPENDENCY");
        assert!(api_error.error.message.contains("lopdf"));
    }

    #[test]
    fn test_render_error_maps_to_internal_error() {
        let engine_error = EngineError::RenderError {
            message: "boom".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.details.as_deref(), Some("boom"));
    }
}
