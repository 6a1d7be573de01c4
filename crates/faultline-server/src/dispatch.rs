use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::Request;
use axum::response::Response;
use faultline_core::Environment;
use http::{HeaderMap, Method};

use crate::body::{Representation, error_response};
use crate::handler::Handler;
use crate::log::{ErrorLog, TracingLog, log_error};
use crate::negotiate::{AcceptNegotiator, ContentNegotiator};
use crate::render::{BasicPageRenderer, PageRenderer};

/// Top-level request boundary
///
/// Runs the downstream handler and converts any failure into a response.
/// HEAD requests are handled as GET and always answered without a body.
pub struct Dispatcher<H> {
    handler: H,
    environment: Environment,
    page_format: Option<String>,
    negotiator: Arc<dyn ContentNegotiator>,
    renderer: Arc<dyn PageRenderer>,
    log: Arc<dyn ErrorLog>,
}

impl<H: Handler> Dispatcher<H> {
    /// Dispatcher with `Accept` negotiation for `html`, the basic page
    /// renderer and `tracing` logging
    pub fn new(handler: H, environment: Environment) -> Self {
        Self {
            handler,
            environment,
            page_format: Some("html".to_owned()),
            negotiator: Arc::new(AcceptNegotiator),
            renderer: Arc::new(BasicPageRenderer),
            log: Arc::new(TracingLog),
        }
    }

    /// Format asked of the negotiator; `None` always builds structured bodies
    #[must_use]
    pub fn with_page_format(mut self, format: Option<String>) -> Self {
        self.page_format = format;
        self
    }

    #[must_use]
    pub fn with_negotiator(mut self, negotiator: Arc<dyn ContentNegotiator>) -> Self {
        self.negotiator = negotiator;
        self
    }

    #[must_use]
    pub fn with_renderer(mut self, renderer: Arc<dyn PageRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    #[must_use]
    pub fn with_log(mut self, log: Arc<dyn ErrorLog>) -> Self {
        self.log = log;
        self
    }

    /// Respond to a request; never fails
    pub async fn respond(&self, request: Request) -> Response {
        let (mut parts, body) = request.into_parts();
        self.log.info(&format!("{} {}", parts.method, parts.uri.path()));

        let is_head = parts.method == Method::HEAD;
        if is_head {
            parts.method = Method::GET;
        }

        // Content preference of the original request, consulted on failure
        let headers = parts.headers.clone();

        let mut response = match self.handler.handle(Request::from_parts(parts, body)).await {
            Ok(response) => response,
            Err(error) => {
                log_error(&*self.log, error.inner());
                let representation = self.representation(&headers);
                error_response(&error, self.environment, representation, &*self.renderer).await
            }
        };

        if is_head {
            *response.body_mut() = Body::empty();
        }

        response
    }

    fn representation(&self, headers: &HeaderMap) -> Representation {
        match &self.page_format {
            Some(format) if self.negotiator.prefers(headers, format) => Representation::Page,
            _ => Representation::Structured,
        }
    }

    /// Router that sends every request through this dispatcher
    pub fn into_router(self) -> Router {
        let dispatcher = Arc::new(self);

        Router::new().fallback(move |request: Request| {
            let dispatcher = Arc::clone(&dispatcher);
            async move { dispatcher.respond(request).await }
        })
    }
}
