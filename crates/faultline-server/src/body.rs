use axum::Json;
use axum::response::{IntoResponse, Response};
use faultline_core::{Environment, Error, ResponseError};
use serde::Serialize;

use crate::classify::classify;
use crate::diagnostics::Diagnostics;
use crate::render::PageRenderer;

/// Representation chosen for an error response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    /// Hand the error to the page renderer
    Page,
    /// Build a structured JSON body
    Structured,
}

/// Structured error body
///
/// Always carries `error` and `reason`. Diagnostic keys are flattened in
/// only outside release environments, and only when non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: bool,
    pub reason: String,
    #[serde(flatten)]
    pub diagnostics: Diagnostics,
}

impl ErrorBody {
    pub fn build(error: &dyn ResponseError, environment: Environment) -> Self {
        let diagnostics = if environment.is_release() {
            Diagnostics::default()
        } else {
            Diagnostics::extract(error)
        };

        Self {
            error: true,
            reason: classify(error).reason,
            diagnostics,
        }
    }
}

/// Structured response for an error
///
/// The status is always the classified status, whichever fields made it
/// into the body.
pub fn structured_response(error: &dyn ResponseError, environment: Environment) -> Response {
    let status = classify(error).status;
    (status, Json(ErrorBody::build(error, environment))).into_response()
}

/// Build the response for a failed request in the chosen representation
pub async fn error_response(
    error: &Error,
    environment: Environment,
    representation: Representation,
    renderer: &dyn PageRenderer,
) -> Response {
    match representation {
        Representation::Page => renderer.render_error_page(error).await,
        Representation::Structured => structured_response(error.inner(), environment),
    }
}
