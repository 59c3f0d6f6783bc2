//! Request Validation Module
//!
//! Provides request validation and input sanitization for the public endpoints.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex")
});

/// Validation error types
#[derive(Debug, Error, Clone, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Required field '{field}' is missing")]
    MissingField { field: String },

    #[error("Field '{field}' is too long (max: {max}, got: {got})")]
    TooLong {
        field: String,
        max: usize,
        got: usize,
    },

    #[error("Field '{field}' is too short (min: {min}, got: {got})")]
    TooShort {
        field: String,
        min: usize,
        got: usize,
    },

    #[error("Field '{field}' contains invalid characters: {chars}")]
    InvalidCharacters { field: String, chars: String },

    #[error("Field '{field}' is not a valid email: {value}")]
    InvalidEmail { field: String, value: String },

    #[error("Request body too large: max={max} bytes, got={got} bytes")]
    BodyTooLarge { max: usize, got: usize },

    #[error("Invalid content type: expected={expected}, got={got}")]
    InvalidContentType { expected: String, got: String },

    #[error("Custom validation failed: {message}")]
    Custom { field: String, message: String },
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field } => field.as_str(),
            Self::TooLong { field, .. } => field.as_str(),
            Self::TooShort { field, .. } => field.as_str(),
            Self::InvalidCharacters { field, .. } => field.as_str(),
            Self::InvalidEmail { field, .. } => field.as_str(),
            Self::BodyTooLarge { .. } => "body",
            Self::InvalidContentType { .. } => "content_type",
            Self::Custom { field, .. } => field.as_str(),
        }
    }
}

/// Validation result type
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Request validation trait
pub trait Validatable: Send + Sync {
    /// Validate the request data
    fn validate(&self) -> ValidationResult<()>;
}

/// Request sanitizer trait
pub trait Sanitizable: Send + Sync {
    /// Sanitize the request data
    fn sanitize(&mut self);
}

/// Request validator implementation
#[derive(Debug, Clone)]
pub struct RequestValidator {
    /// Maximum request body size
    max_body_size: usize,
    /// Allowed content types
    allowed_content_types: Vec<String>,
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestValidator {
    /// Create new validator
    pub fn new() -> Self {
        Self {
            max_body_size: 1024 * 1024, // 1MB
            allowed_content_types: vec![
                "application/json".to_string(),
                "application/json; charset=utf-8".to_string(),
            ],
        }
    }

    /// Set maximum body size
    pub fn with_max_body_size(mut self, size: usize) -> Self {
        self.max_body_size = size;
        self
    }

    /// Validate field length (in chars)
    pub fn validate_length(
        &self,
        field: &str,
        value: &str,
        min: Option<usize>,
        max: Option<usize>,
    ) -> ValidationResult<()> {
        let length = value.chars().count();

        if let Some(min_len) = min {
            if length < min_len {
                return Err(ValidationError::TooShort {
                    field: field.to_string(),
                    min: min_len,
                    got: length,
                });
            }
        }

        if let Some(max_len) = max {
            if length > max_len {
                return Err(ValidationError::TooLong {
                    field: field.to_string(),
                    max: max_len,
                    got: length,
                });
            }
        }

        Ok(())
    }

    /// Validate email format
    pub fn validate_email(&self, field: &str, value: &str) -> ValidationResult<()> {
        if EMAIL_REGEX.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::InvalidEmail {
                field: field.to_string(),
                value: value.to_string(),
            })
        }
    }

    /// Validate that value contains only alphanumerics plus the allowed characters
    pub fn validate_safe_chars(
        &self,
        field: &str,
        value: &str,
        allowed: &[char],
    ) -> ValidationResult<()> {
        let invalid: String = value
            .chars()
            .filter(|c| !c.is_ascii_alphanumeric() && !allowed.contains(c))
            .collect();

        if !invalid.is_empty() {
            Err(ValidationError::InvalidCharacters {
                field: field.to_string(),
                chars: invalid,
            })
        } else {
            Ok(())
        }
    }

    /// Sanitize string input
    pub fn sanitize_string(input: &str) -> String {
        // Remove null bytes and control characters
        input
            .trim()
            .chars()
            .filter(|c| !c.is_ascii_control() || c.is_whitespace())
            .collect()
    }

    /// Check content type is allowed
    pub fn validate_content_type(&self, content_type: Option<&str>) -> ValidationResult<()> {
        let ct = content_type.ok_or_else(|| ValidationError::InvalidContentType {
            expected: self.allowed_content_types.join(", "),
            got: "none".to_string(),
        })?;

        let ct_base = ct.split(';').next().unwrap_or(ct).trim().to_lowercase();

        if !self.allowed_content_types.iter().any(|allowed| {
            let allowed_base = allowed.split(';').next().unwrap_or(allowed).trim();
            ct_base == allowed_base.to_lowercase()
        }) {
            return Err(ValidationError::InvalidContentType {
                expected: self.allowed_content_types.join(", "),
                got: ct.to_string(),
            });
        }

        Ok(())
    }

    /// Check body size
    pub fn validate_body_size(&self, size: usize) -> ValidationResult<()> {
        if size > self.max_body_size {
            return Err(ValidationError::BodyTooLarge {
                max: self.max_body_size,
                got: size,
            });
        }
        Ok(())
    }
}

/// Generic validated request wrapper
#[derive(Debug, Clone)]
pub struct ValidatedRequest<T: Validatable + Sanitizable> {
    /// The inner request data
    pub inner: T,
}

impl<T: Validatable + Sanitizable> ValidatedRequest<T> {
    /// Validate and create
    pub fn validate(inner: T) -> ValidationResult<Self> {
        inner.validate()?;
        Ok(Self { inner })
    }

    /// Sanitize and validate
    pub fn sanitize_validate(mut inner: T) -> ValidationResult<Self> {
        inner.sanitize();
        inner.validate()?;
        Ok(Self { inner })
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

/// Common validation helpers
pub mod validators {
    use super::*;

    /// Maximum chat message length accepted from the widget
    pub const MAX_CHAT_MESSAGE_CHARS: usize = 2000;
    /// Maximum number of history items forwarded to the remote backend
    pub const MAX_HISTORY_ITEMS: usize = 50;

    /// Validate chat message (non-blank, bounded)
    pub fn validate_chat_message(message: &str) -> ValidationResult<()> {
        if message.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "message".to_string(),
            });
        }
        RequestValidator::new().validate_length(
            "message",
            message,
            None,
            Some(MAX_CHAT_MESSAGE_CHARS),
        )
    }

    /// Validate session or client identifier
    pub fn validate_identifier(field: &str, value: &str) -> ValidationResult<()> {
        let validator = RequestValidator::new();
        validator.validate_length(field, value, Some(1), Some(64))?;
        validator.validate_safe_chars(field, value, &['-', '_'])
    }

    /// Validate history length
    pub fn validate_history_len(len: usize) -> ValidationResult<()> {
        if len > MAX_HISTORY_ITEMS {
            return Err(ValidationError::Custom {
                field: "history".to_string(),
                message: format!("History cannot exceed {} messages", MAX_HISTORY_ITEMS),
            });
        }
        Ok(())
    }

    /// Validate FAQ query (may be blank, the responder falls back)
    pub fn validate_faq_query(query: &str) -> ValidationResult<()> {
        RequestValidator::new().validate_length("query", query, None, Some(MAX_CHAT_MESSAGE_CHARS))
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;
    use super::*;

    #[test]
    fn test_validate_length_counts_chars() {
        let v = RequestValidator::new();
        assert!(v.validate_length("name", "日本語", Some(1), Some(3)).is_ok());
        assert!(matches!(
            v.validate_length("name", "日本語!", None, Some(3)),
            Err(ValidationError::TooLong { got: 4, .. })
        ));
    }

    #[test]
    fn test_validate_email() {
        let v = RequestValidator::new();
        assert!(v.validate_email("email", "someone@example.com").is_ok());
        assert!(v.validate_email("email", "someone@").is_err());
    }

    #[test]
    fn test_validate_content_type() {
        let v = RequestValidator::new();
        assert!(v.validate_content_type(Some("application/json")).is_ok());
        assert!(
            v.validate_content_type(Some("Application/JSON; charset=UTF-8"))
                .is_ok()
        );
        assert!(v.validate_content_type(Some("text/plain")).is_err());
        assert!(v.validate_content_type(None).is_err());
    }

    #[test]
    fn test_validate_body_size() {
        let v = RequestValidator::new().with_max_body_size(10);
        assert!(v.validate_body_size(10).is_ok());
        assert!(v.validate_body_size(11).is_err());
    }

    #[test]
    fn test_chat_message_rules() {
        assert!(validate_chat_message("Who are you?").is_ok());
        assert!(matches!(
            validate_chat_message("   "),
            Err(ValidationError::MissingField { .. })
        ));
        assert!(validate_chat_message(&"x".repeat(MAX_CHAT_MESSAGE_CHARS + 1)).is_err());
    }

    #[test]
    fn test_identifier_rules() {
        assert!(validate_identifier("session_id", "k3j9x_a-1").is_ok());
        assert!(validate_identifier("session_id", "../etc").is_err());
        assert!(validate_identifier("session_id", "").is_err());
    }

    #[test]
    fn test_history_limit() {
        assert!(validate_history_len(MAX_HISTORY_ITEMS).is_ok());
        assert!(validate_history_len(MAX_HISTORY_ITEMS + 1).is_err());
    }
}
