use std::fmt;

use http::StatusCode;
use serde_json::Value;

use crate::{AbortInfo, DebugInfo, ResponseError};

/// Error that aborts a request with an explicit status
///
/// The reason defaults to the canonical phrase of the status. An abort only
/// becomes debuggable once it is given an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Abort {
    status: StatusCode,
    reason: Option<String>,
    metadata: Option<Value>,
    diagnostics: Option<AbortDiagnostics>,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct AbortDiagnostics {
    identifier: String,
    possible_causes: Vec<String>,
    suggested_fixes: Vec<String>,
    documentation_links: Vec<String>,
}

impl Abort {
    pub const fn new(status: StatusCode) -> Self {
        Self {
            status,
            reason: None,
            metadata: None,
            diagnostics: None,
        }
    }

    pub const fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND)
    }

    pub const fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST).with_reason(reason)
    }

    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Attach an identifier, making the abort debuggable
    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.diagnostics_mut().identifier = identifier.into();
        self
    }

    #[must_use]
    pub fn with_possible_cause(mut self, cause: impl Into<String>) -> Self {
        self.diagnostics_mut().possible_causes.push(cause.into());
        self
    }

    #[must_use]
    pub fn with_suggested_fix(mut self, fix: impl Into<String>) -> Self {
        self.diagnostics_mut().suggested_fixes.push(fix.into());
        self
    }

    #[must_use]
    pub fn with_documentation_link(mut self, link: impl Into<String>) -> Self {
        self.diagnostics_mut().documentation_links.push(link.into());
        self
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Declared reason, or the canonical phrase for the status
    pub fn reason(&self) -> &str {
        self.reason
            .as_deref()
            .unwrap_or_else(|| self.status.canonical_reason().unwrap_or("Unknown"))
    }

    fn diagnostics_mut(&mut self) -> &mut AbortDiagnostics {
        self.diagnostics.get_or_insert_with(AbortDiagnostics::default)
    }
}

impl fmt::Display for Abort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status.as_u16(), self.reason())
    }
}

impl std::error::Error for Abort {}

impl ResponseError for Abort {
    fn as_abort(&self) -> Option<AbortInfo> {
        Some(AbortInfo {
            status: self.status,
            reason: self.reason().to_owned(),
            metadata: self.metadata.clone(),
        })
    }

    fn as_debuggable(&self) -> Option<DebugInfo> {
        let diagnostics = self
            .diagnostics
            .as_ref()
            .filter(|diagnostics| !diagnostics.identifier.is_empty())?;

        Some(DebugInfo {
            readable_name: "Abort".to_owned(),
            reason: self.reason().to_owned(),
            identifier: diagnostics.identifier.clone(),
            possible_causes: diagnostics.possible_causes.clone(),
            suggested_fixes: diagnostics.suggested_fixes.clone(),
            documentation_links: diagnostics.documentation_links.clone(),
            ..DebugInfo::default()
        })
    }
}
