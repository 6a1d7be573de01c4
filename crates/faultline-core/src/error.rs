use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde_json::Value;

use crate::Opaque;

/// Status, reason and metadata an error wants surfaced to the client
#[derive(Debug, Clone, PartialEq)]
pub struct AbortInfo {
    /// HTTP status code for the response
    pub status: StatusCode,
    /// Short human-readable reason
    pub reason: String,
    /// Free-form document passed through to non-release clients
    pub metadata: Option<Value>,
}

/// Long-form diagnostics for errors that know how they came about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugInfo {
    /// Readable name of the error type (e.g. `Abort`)
    pub readable_name: String,
    /// Long-form reason
    pub reason: String,
    /// Fully-qualified identifier (e.g. `database.connection_refused`)
    pub identifier: String,
    pub possible_causes: Vec<String>,
    pub suggested_fixes: Vec<String>,
    pub documentation_links: Vec<String>,
    pub stack_overflow_questions: Vec<String>,
    pub github_issues: Vec<String>,
}

/// Trait for errors that may be raised by request handlers
///
/// Both capabilities are optional. An error that implements neither is
/// treated as opaque: it maps to 500 and only the standard reason phrase
/// reaches the client.
pub trait ResponseError: std::error::Error + Send + Sync + 'static {
    /// Explicit status and reason, if this error declares one
    fn as_abort(&self) -> Option<AbortInfo> {
        None
    }

    /// Rich diagnostics, if this error carries them
    fn as_debuggable(&self) -> Option<DebugInfo> {
        None
    }

    /// Concrete type name without its module path
    fn type_name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// Strip the module path from a type name, leaving generics untouched
pub(crate) fn short_type_name(full: &'static str) -> &'static str {
    let end = full.find('<').unwrap_or(full.len());
    let start = full[..end].rfind("::").map_or(0, |idx| idx + 2);
    &full[start..]
}

/// Type-erased error returned by downstream handlers
///
/// Cheap to clone. Any [`ResponseError`] converts into it, so handlers can
/// use `?` directly. As an axum response it carries itself in the response
/// extensions, letting the dispatcher recover the original error after it
/// has travelled through a router.
#[derive(Clone)]
pub struct Error(Arc<dyn ResponseError>);

impl Error {
    /// Wrap a response error
    pub fn new<E: ResponseError>(error: E) -> Self {
        Self(Arc::new(error))
    }

    /// Wrap an arbitrary failure, hiding any capability it has
    ///
    /// The log still names the wrapped type.
    pub fn opaque<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::new(Opaque::new(error))
    }

    /// Borrow the underlying error
    pub fn inner(&self) -> &dyn ResponseError {
        &*self.0
    }
}

impl Deref for Error {
    type Target = dyn ResponseError;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl<E: ResponseError> From<E> for Error {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Placeholder only, the dispatcher rebuilds the response from the error
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(self);
        response
    }
}
