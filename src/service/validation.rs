//! Request validation: per-field rules applied to transfer schemas after deserialization.

use crate::error::AppError;
use regex::Regex;
use std::sync::OnceLock;

/// Implemented by every inbound transfer schema.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Email,
}

/// Constraints for one field. `required` means the value, when given, must not be blank.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub format: Option<Format>,
    pub minimum: Option<i64>,
    pub maximum: Option<i64>,
}

impl FieldRule {
    const EMPTY: FieldRule = FieldRule {
        required: false,
        min_length: None,
        max_length: None,
        format: None,
        minimum: None,
        maximum: None,
    };

    pub const fn text(max_length: usize) -> Self {
        let mut rule = Self::EMPTY;
        rule.max_length = Some(max_length);
        rule
    }

    /// Unbounded text (TEXT columns).
    pub const fn long_text() -> Self {
        Self::EMPTY
    }

    pub const fn range(minimum: i64, maximum: i64) -> Self {
        let mut rule = Self::EMPTY;
        rule.minimum = Some(minimum);
        rule.maximum = Some(maximum);
        rule
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub const fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Check a string field. `None` (absent) always passes.
    pub fn check_str(&self, col: &str, value: Option<&str>) -> Result<(), AppError> {
        let Some(s) = value else {
            return Ok(());
        };
        if self.required && s.trim().is_empty() {
            return Err(AppError::Validation(format!("{} must not be blank", col)));
        }
        let len = s.chars().count();
        if let Some(max) = self.max_length {
            if len > max {
                return Err(AppError::Validation(format!(
                    "{} must be at most {} characters",
                    col, max
                )));
            }
        }
        if let Some(min) = self.min_length {
            if len < min {
                return Err(AppError::Validation(format!(
                    "{} must be at least {} characters",
                    col, min
                )));
            }
        }
        if let Some(format) = self.format {
            validate_format(col, s, format)?;
        }
        Ok(())
    }

    /// Check an integer field. `None` (absent) always passes.
    pub fn check_int(&self, col: &str, value: Option<i64>) -> Result<(), AppError> {
        let Some(n) = value else {
            return Ok(());
        };
        if let Some(min) = self.minimum {
            if n < min {
                return Err(AppError::Validation(format!("{} must be at least {}", col, min)));
            }
        }
        if let Some(max) = self.maximum {
            if n > max {
                return Err(AppError::Validation(format!("{} must be at most {}", col, max)));
            }
        }
        Ok(())
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"))
}

fn validate_format(col: &str, s: &str, format: Format) -> Result<(), AppError> {
    match format {
        Format::Email => {
            if !email_pattern().is_match(s) {
                return Err(AppError::Validation(format!("{} must be a valid email", col)));
            }
        }
    }
    Ok(())
}
