//! Field-level validation results
//!
//! Request bodies expose an explicit `validate()` that either yields the
//! validated value or a [`ValidationErrors`] listing every offending field.

use std::fmt;

use serde::Serialize;

/// A single rule a field failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Name of the offending field as it appears in the JSON body
    pub field: &'static str,
    /// Which rule failed
    pub reason: &'static str,
}

impl FieldViolation {
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            reason: "required",
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}' failed on the '{}' rule", self.field, self.reason)
    }
}

/// Every violation found in one request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self(violations)
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
