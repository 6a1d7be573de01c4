use std::convert::Infallible;
use std::future::Future;

use async_trait::async_trait;
use axum::Router;
use axum::extract::Request;
use axum::response::Response;
use faultline_core::Error;
use tower::ServiceExt;

/// Downstream request handler whose failures the dispatcher translates
#[async_trait]
pub trait Handler: Send + Sync + 'static {
    async fn handle(&self, request: Request) -> Result<Response, Error>;
}

/// Routers are handlers: a route that failed with [`Error`] leaves the
/// error in its response extensions, which is turned back into `Err` here
#[async_trait]
impl Handler for Router {
    async fn handle(&self, request: Request) -> Result<Response, Error> {
        let mut response = self
            .clone()
            .oneshot(request)
            .await
            .unwrap_or_else(|never: Infallible| match never {});

        match response.extensions_mut().remove::<Error>() {
            Some(error) => Err(error),
            None => Ok(response),
        }
    }
}

/// Handler built from an async function
#[derive(Debug, Clone)]
pub struct HandlerFn<F>(F);

/// Adapt `async fn(Request) -> Result<Response, Error>` into a [`Handler`]
pub const fn handler_fn<F, Fut>(f: F) -> HandlerFn<F>
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response, Error>> + Send + 'static,
{
    HandlerFn(f)
}

#[async_trait]
impl<F, Fut> Handler for HandlerFn<F>
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response, Error>> + Send + 'static,
{
    async fn handle(&self, request: Request) -> Result<Response, Error> {
        (self.0)(request).await
    }
}
