//! Error-to-response translation for faultline
//!
//! [`Dispatcher`] is the request boundary: it runs the downstream
//! [`Handler`], logs failures and turns them into either a rendered page or
//! a structured body depending on content negotiation and environment.

#![allow(clippy::must_use_candidate)]

pub mod body;
pub mod classify;
pub mod diagnostics;
pub mod dispatch;
pub mod handler;
mod health;
pub mod log;
pub mod negotiate;
pub mod render;

use std::net::SocketAddr;

use axum::Router;
use faultline_config::Config;
use faultline_core::{Abort, Error};
use tower_http::trace::TraceLayer;

pub use body::{ErrorBody, Representation};
pub use classify::{Classification, classify, status_of};
pub use diagnostics::Diagnostics;
pub use dispatch::Dispatcher;
pub use handler::{Handler, HandlerFn, handler_fn};
pub use log::{ErrorLog, TracingLog};
pub use negotiate::{AcceptNegotiator, ContentNegotiator};
pub use render::{BasicPageRenderer, PageRenderer};

/// Assembled server: application routes behind the dispatcher
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration and the application's routes
    ///
    /// Requests that match no route fail with a 404 abort. The health route
    /// is added to `app`, so `app` must not define it itself.
    pub fn new(config: &Config, app: Router) -> Self {
        let mut app = app.fallback(not_found);

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        let page_format = config
            .errors
            .render_pages
            .then(|| config.errors.page_format.clone());

        let router = Dispatcher::new(app, config.environment)
            .with_page_format(page_format)
            .into_router()
            .layer(TraceLayer::new_for_http());

        Self {
            router,
            listen_address: config.server.listen_address,
        }
    }

    /// Get the configured listen address
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

async fn not_found() -> Error {
    Abort::not_found().into()
}
