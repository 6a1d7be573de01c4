//! Demonstration routes exercising each kind of failure

use axum::Router;
use axum::extract::Path;
use axum::routing::get;
use faultline_core::{Abort, Error};
use http::StatusCode;
use serde_json::json;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(|| async { "It works!" }))
        .route("/status/{code}", get(status))
        .route("/fail", get(fail))
        .route("/debug", get(debug))
}

async fn status(Path(code): Path<u16>) -> Result<&'static str, Error> {
    let status = StatusCode::from_u16(code).map_err(|_| Abort::bad_request(format!("invalid status code {code}")))?;

    if status.is_success() {
        return Ok("ok");
    }

    Err(Abort::new(status).with_metadata(json!({ "requested": code })).into())
}

async fn fail() -> Result<(), Error> {
    Err(Error::opaque(std::io::Error::other("simulated failure")))
}

async fn debug() -> Result<(), Error> {
    Err(Abort::new(StatusCode::SERVICE_UNAVAILABLE)
        .with_reason("Demo dependency unavailable")
        .with_identifier("demo.dependency_unavailable")
        .with_possible_cause("the demo dependency is not running")
        .with_suggested_fix("start the dependency and retry")
        .into())
}
