//! Error payloads returned by the application store.

use crate::validate::Issue;

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ValidationErrorBody {
    pub error: String,

    #[serde(default)]
    pub issues: Vec<Issue>,
}

const MAX_ISSUE_LINES: usize = 8;

pub fn format_validation_error(v: &ValidationErrorBody) -> String {
    if v.issues.is_empty() {
        return v.error.clone();
    }

    let mut lines: Vec<String> = Vec::new();
    lines.push(v.error.clone());
    for i in v.issues.iter().take(MAX_ISSUE_LINES) {
        lines.push(format!("- {}: {}", i.field, i.message));
    }
    if v.issues.len() > MAX_ISSUE_LINES {
        lines.push(format!("... and {} more", v.issues.len() - MAX_ISSUE_LINES));
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "../tests/remote/types_tests.rs"]
mod tests;
