//! Proof type for validated text content.
//!
//! Enforces invariants at construction time. Once you hold a value, you know
//! it satisfies all required constraints.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A string guaranteed to be non-empty (after trimming).
///
/// Required testimony fields (`event`, `location`, `written_text`) are stored
/// as this type, so an empty value is unrepresentable past intake.
///
/// # Serde
///
/// Serializes as a plain JSON string. Deserialization validates
/// non-emptiness and fails if the string is empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyText(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("text must not be empty")]
pub struct EmptyTextError;

impl NonEmptyText {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyTextError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(EmptyTextError)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for NonEmptyText {
    type Error = EmptyTextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NonEmptyText {
    type Error = EmptyTextError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyText> for String {
    fn from(value: NonEmptyText) -> Self {
        value.0
    }
}

impl std::ops::Deref for NonEmptyText {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
