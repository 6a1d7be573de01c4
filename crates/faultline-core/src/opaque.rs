use std::fmt;

use crate::ResponseError;
use crate::error::short_type_name;

/// Internal failure that exposes nothing beyond its message
///
/// Maps to 500 with the standard reason phrase. Remembers the type name of
/// the wrapped error so the log can still say what failed.
#[derive(Debug)]
pub struct Opaque {
    inner: anyhow::Error,
    type_name: &'static str,
}

impl Opaque {
    /// Wrap a concrete error, keeping its type name
    pub fn new<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            inner: anyhow::Error::new(error),
            type_name: short_type_name(std::any::type_name::<E>()),
        }
    }
}

/// Ad-hoc `anyhow` errors have no concrete type to report
impl From<anyhow::Error> for Opaque {
    fn from(inner: anyhow::Error) -> Self {
        Self {
            inner,
            type_name: "Opaque",
        }
    }
}

impl fmt::Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl std::error::Error for Opaque {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner.source()
    }
}

impl ResponseError for Opaque {
    fn type_name(&self) -> &'static str {
        self.type_name
    }
}
