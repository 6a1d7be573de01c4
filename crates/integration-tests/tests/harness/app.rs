//! Application routes failing in each way the dispatcher distinguishes

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use faultline_core::{Abort, Error};
use serde_json::json;

pub fn routes() -> Router {
    Router::new()
        .route("/hello", get(|| async { "hello, world" }))
        .route(
            "/opaque",
            get(|| async { Err::<(), Error>(Error::opaque(std::io::Error::other("disk on fire"))) }),
        )
        .route(
            "/conflict",
            get(|| async {
                Err::<(), Error>(
                    Abort::new(StatusCode::CONFLICT)
                        .with_reason("User already exists")
                        .with_metadata(json!({ "id": 42 }))
                        .into(),
                )
            }),
        )
        .route(
            "/debuggable",
            get(|| async {
                Err::<(), Error>(
                    Abort::new(StatusCode::SERVICE_UNAVAILABLE)
                        .with_identifier("search.index_rebuilding")
                        .with_possible_cause("the search index is being rebuilt")
                        .with_documentation_link("https://docs.example.com/search")
                        .into(),
                )
            }),
        )
}
