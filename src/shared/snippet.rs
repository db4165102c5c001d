/**
 * Snippet Data Structures
 *
 * This module defines the stored `Snippet` record and the request bodies
 * accepted by the snippet endpoints.
 *
 * Request bodies are deserialized with every field optional so that a
 * missing field surfaces as a field-level violation from `validate()`
 * instead of an opaque deserialization failure. Fields the server owns
 * (`id`, `user_id`, timestamps) are not part of any request body, so
 * anything a client sends for them is dropped during deserialization.
 */
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::{FieldViolation, ValidationErrors};

/// A stored code or text fragment
///
/// `id` is generated by the server on create and `user_id` is taken from
/// the authenticated session. Neither changes after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Snippet {
    /// Server-generated unique identifier (UUID v4 string)
    pub id: String,
    /// Owner of the snippet
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub code: String,
    /// Creation time, set by the store
    pub created_at: DateTime<Utc>,
    /// Last modification time, refreshed by the store on every update
    pub updated_at: DateTime<Utc>,
}

impl Snippet {
    /// Build a fresh snippet owned by `user_id` with a newly generated id
    pub fn create(user_id: impl Into<String>, fields: SnippetFields) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            title: fields.title,
            description: fields.description,
            code: fields.code,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every editable field while keeping identity, owner and creation time
    pub fn replaced_with(&self, fields: SnippetFields) -> Self {
        Self {
            id: self.id.clone(),
            user_id: self.user_id.clone(),
            title: fields.title,
            description: fields.description,
            code: fields.code,
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }

    /// Value of a single editable field
    pub fn field(&self, field: SnippetField) -> &str {
        match field {
            SnippetField::Title => &self.title,
            SnippetField::Description => &self.description,
            SnippetField::Code => &self.code,
        }
    }

    /// Set a single editable field and refresh `updated_at`
    pub fn set_field(&mut self, field: SnippetField, value: String) {
        match field {
            SnippetField::Title => self.title = value,
            SnippetField::Description => self.description = value,
            SnippetField::Code => self.code = value,
        }
        self.updated_at = Utc::now();
    }
}

/// The editable content of a snippet, after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetFields {
    pub title: String,
    pub description: String,
    pub code: String,
}

/// Request body for create and multi-field update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnippetPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl SnippetPayload {
    /// Check that `title`, `description` and `code` are all present and non-empty
    pub fn validate(self) -> Result<SnippetFields, ValidationErrors> {
        let mut violations = Vec::new();
        let title = required("title", self.title, &mut violations);
        let description = required("description", self.description, &mut violations);
        let code = required("code", self.code, &mut violations);

        match (title, description, code) {
            (Some(title), Some(description), Some(code)) => Ok(SnippetFields {
                title,
                description,
                code,
            }),
            _ => Err(ValidationErrors::new(violations)),
        }
    }
}

/// Request body for a single-field update
///
/// `field` is only checked for presence here. Whether it names an editable
/// field is decided later, after the ownership check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOneData {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// A validated single-field update whose field name is not yet resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub field: String,
    pub value: String,
}

impl FieldUpdate {
    /// Resolve the field name against the editable allow-list
    pub fn resolve(&self) -> Result<SnippetField, SharedError> {
        self.field.parse()
    }
}

impl UpdateOneData {
    pub fn validate(self) -> Result<FieldUpdate, ValidationErrors> {
        let mut violations = Vec::new();
        let field = required("field", self.field, &mut violations);
        let value = required("value", self.value, &mut violations);

        match (field, value) {
            (Some(field), Some(value)) => Ok(FieldUpdate { field, value }),
            _ => Err(ValidationErrors::new(violations)),
        }
    }
}

/// Fields a single-field update may touch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnippetField {
    Title,
    Description,
    Code,
}

impl SnippetField {
    pub const ALL: [SnippetField; 3] = [Self::Title, Self::Description, Self::Code];

    /// Column / JSON name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Code => "code",
        }
    }
}

impl fmt::Display for SnippetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnippetField {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "code" => Ok(Self::Code),
            other => Err(SharedError::invalid_field(other)),
        }
    }
}

fn required(
    field: &'static str,
    value: Option<String>,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match value {
        Some(value) if !value.is_empty() => Some(value),
        _ => {
            violations.push(FieldViolation::required(field));
            None
        }
    }
}
