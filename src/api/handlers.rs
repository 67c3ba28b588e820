//! HTTP request handlers for the Pay Stub Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate, calculate_with_audit};
use crate::document::{generate_stub, load_logo};
use crate::models::{FormValues, LogoImage};

use super::request::StubRequest;
use super::response::{ApiError, ApiErrorResponse, LayoutResponse, PreviewResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/preview", post(preview_handler))
        .route("/stub/layout", post(layout_handler))
        .route("/stub", post(stub_handler))
        .with_state(state)
}

/// Turns a JSON body rejection into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_json(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn logo_for(state: &AppState, include_logo: bool) -> Option<LogoImage> {
    if include_logo {
        load_logo(state.config().logo_path())
    } else {
        None
    }
}

/// Keeps a file name usable inside a quoted header value.
fn attachment_header(file_name: &str) -> String {
    let safe: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("attachment; filename=\"{}\"", safe)
}

/// Handler for POST /preview endpoint.
///
/// Returns the three preview figures for the submitted form.
async fn preview_handler(payload: Result<Json<FormValues>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing preview request");

    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = calculate(&form.pay_inputs());
    info!(
        correlation_id = %correlation_id,
        gross = %result.gross,
        net_pay = %result.net_pay,
        "Preview calculated"
    );

    let response = PreviewResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        preview: result.preview(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for POST /stub/layout endpoint.
///
/// Returns the figures, audit trace and page layout without rendering.
async fn layout_handler(
    State(state): State<AppState>,
    payload: Result<Json<StubRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing layout request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let calculation = calculate_with_audit(&request.form.pay_inputs());
    let metadata = request.form.stub_metadata(calculation.result.clone());
    let logo = logo_for(&state, request.include_logo);
    let document = state.config().builder().layout(&metadata, logo.as_ref());

    info!(
        correlation_id = %correlation_id,
        file_name = %document.file_name,
        lines = document.instructions.len(),
        has_logo = document.logo.is_some(),
        "Layout built"
    );

    let response = LayoutResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        result: calculation.result,
        audit_trace: calculation.audit_trace,
        document,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for POST /stub endpoint.
///
/// Renders the stub and returns the document as an attachment.
async fn stub_handler(
    State(state): State<AppState>,
    payload: Result<Json<StubRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing stub request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let mut renderer = state.renderer();
    let logo = if renderer.is_some() {
        logo_for(&state, request.include_logo)
    } else {
        None
    };
    let builder = state.config().builder();

    match generate_stub(&request.form, logo.as_ref(), renderer.as_deref_mut(), &builder) {
        Ok(stub) => {
            info!(
                correlation_id = %correlation_id,
                file_name = %stub.file_name(),
                net_pay = %stub.result.net_pay,
                bytes = stub.bytes.len(),
                "Stub rendered"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (header::CONTENT_DISPOSITION, attachment_header(stub.file_name())),
                ],
                stub.bytes,
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Stub generation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_header_quotes_file_name() {
        assert_eq!(
            attachment_header("paystub-Jane Doe.pdf"),
            "attachment; filename=\"paystub-Jane Doe.pdf\""
        );
    }

    #[test]
    fn test_attachment_header_replaces_unsafe_characters() {
        assert_eq!(
            attachment_header("paystub-Zoë \"Z\".pdf"),
            "attachment; filename=\"paystub-Zo_ _Z_.pdf\""
        );
    }
}
