use faultline_core::ResponseError;
use serde::Serialize;
use serde_json::Value;

/// Optional diagnostic fields of a structured error body
///
/// A key is serialized only when its source value is non-empty, so the
/// document never carries empty strings, empty lists or a null metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub possible_causes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggested_fixes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub documentation_links: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stack_overflow_questions: Vec<String>,
    #[serde(rename = "gitHubIssues", skip_serializing_if = "Vec::is_empty")]
    pub github_issues: Vec<String>,
}

impl Diagnostics {
    /// Collect whatever diagnostics the error's capabilities provide
    pub fn extract(error: &dyn ResponseError) -> Self {
        let mut diagnostics = Self::default();

        if let Some(abort) = error.as_abort() {
            diagnostics.metadata = abort.metadata.filter(has_content);
        }

        if let Some(debug) = error.as_debuggable() {
            diagnostics.debug_reason = non_empty(debug.reason);
            diagnostics.identifier = non_empty(debug.identifier);
            diagnostics.possible_causes = non_blank(debug.possible_causes);
            diagnostics.suggested_fixes = non_blank(debug.suggested_fixes);
            diagnostics.documentation_links = non_blank(debug.documentation_links);
            diagnostics.stack_overflow_questions = non_blank(debug.stack_overflow_questions);
            diagnostics.github_issues = non_blank(debug.github_issues);
        }

        diagnostics
    }

    /// Whether no field would be serialized
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn non_blank(mut values: Vec<String>) -> Vec<String> {
    values.retain(|value| !value.is_empty());
    values
}

fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}
