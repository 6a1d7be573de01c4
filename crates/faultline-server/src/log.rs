use faultline_core::{DebugInfo, ResponseError};
use itertools::Itertools;

/// Sink for the dispatcher's operational log lines
///
/// Logging is best-effort: implementations must not panic or block the
/// response path.
pub trait ErrorLog: Send + Sync {
    fn info(&self, line: &str);
    fn error(&self, line: &str);
}

/// [`ErrorLog`] backed by `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl ErrorLog for TracingLog {
    fn info(&self, line: &str) {
        tracing::info!(target: "faultline::errors", "{line}");
    }

    fn error(&self, line: &str) {
        tracing::error!(target: "faultline::errors", "{line}");
    }
}

/// Log lines describing one failed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    /// Error-level summary
    pub line: String,
    /// Info-level hint, present for errors without diagnostics
    pub hint: Option<String>,
}

/// Describe an error for the operational log
///
/// Debuggable errors become a bracketed line:
/// `[Name: reason] [Identifier: id] [Possible causes: a, b] ...`, with one
/// segment per non-empty list. Other errors are named by type and come
/// with a hint to make them debuggable.
pub fn describe(error: &dyn ResponseError) -> Description {
    match error.as_debuggable() {
        Some(debug) => Description {
            line: debuggable_line(&debug, error.type_name()),
            hint: None,
        },
        None => {
            let type_name = error.type_name();
            Description {
                line: format!("{type_name}: {error}"),
                hint: Some(format!(
                    "Implement ResponseError::as_debuggable for {type_name} to improve diagnostics."
                )),
            }
        }
    }
}

/// Write the description of an error to the log
pub fn log_error(log: &dyn ErrorLog, error: &dyn ResponseError) {
    let description = describe(error);

    if let Some(hint) = &description.hint {
        log.info(hint);
    }
    log.error(&description.line);
}

fn debuggable_line(debug: &DebugInfo, fallback_name: &str) -> String {
    let name = if debug.readable_name.is_empty() {
        fallback_name
    } else {
        debug.readable_name.as_str()
    };

    let mut segments = vec![
        format!("{name}: {}", debug.reason),
        format!("Identifier: {}", debug.identifier),
    ];

    let lists = [
        ("Possible causes", &debug.possible_causes),
        ("Suggested fixes", &debug.suggested_fixes),
        ("Documentation links", &debug.documentation_links),
        ("Stack Overflow questions", &debug.stack_overflow_questions),
        ("GitHub issues", &debug.github_issues),
    ];

    for (label, values) in lists {
        let joined = values.iter().filter(|value| !value.is_empty()).join(", ");
        if !joined.is_empty() {
            segments.push(format!("{label}: {joined}"));
        }
    }

    segments.iter().map(|segment| format!("[{segment}]")).join(" ")
}
