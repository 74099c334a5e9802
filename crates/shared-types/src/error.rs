use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Structured form-validation error shared by the module views.
///
/// Navigation outcomes (not found, access denied, unauthenticated) are
/// ordinary `RouteDecision` variants with dedicated views, not errors;
/// this type only covers an incomplete form before submit. Field errors
/// are keyed by form field name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            message: message.into(),
            field_errors,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if !self.field_errors.is_empty() {
            write!(f, " ({} field(s))", self.field_errors.len())?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_includes_field_errors() {
        let mut fields = HashMap::new();
        fields.insert("recipient".to_string(), "select a recipient".to_string());
        let err = AppError::validation("Validation failed", fields);
        assert_eq!(
            err.field_errors.get("recipient").unwrap(),
            "select a recipient"
        );
    }

    #[test]
    fn display_impl_reports_message_and_field_count() {
        let mut fields = HashMap::new();
        fields.insert("reason".to_string(), "required".to_string());
        let err = AppError::validation("Complete the highlighted fields", fields);
        assert_eq!(
            format!("{}", err),
            "Complete the highlighted fields (1 field(s))"
        );
    }

    #[test]
    fn error_roundtrip_through_json() {
        let mut fields = HashMap::new();
        fields.insert("reason".to_string(), "required".to_string());
        let err = AppError::validation("Validation failed", fields);
        let json = serde_json::to_string(&err).unwrap();
        let parsed: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }

    #[test]
    fn field_errors_omitted_from_json_when_empty() {
        let err = AppError::validation("nothing to report", HashMap::new());
        let json = serde_json::to_string(&err).unwrap();
        assert!(!json.contains("field_errors"));
    }
}
