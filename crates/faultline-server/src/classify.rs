use faultline_core::ResponseError;
use http::StatusCode;

/// Status and client-facing reason derived from an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub status: StatusCode,
    pub reason: String,
}

/// Classify an error for the response
///
/// Abort errors keep their declared status and reason. Anything else is a
/// 500 with the standard reason phrase.
pub fn classify(error: &dyn ResponseError) -> Classification {
    match error.as_abort() {
        Some(abort) => Classification {
            status: abort.status,
            reason: abort.reason,
        },
        None => Classification {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            reason: standard_reason(StatusCode::INTERNAL_SERVER_ERROR),
        },
    }
}

/// Status code for an error
pub fn status_of(error: &dyn ResponseError) -> StatusCode {
    error.as_abort().map_or(StatusCode::INTERNAL_SERVER_ERROR, |abort| abort.status)
}

fn standard_reason(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("Unknown").to_owned()
}
