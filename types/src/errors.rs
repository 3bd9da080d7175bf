//! Error types for the testimony lifecycle.
//!
//! Every error here is local and recoverable: surfaced to the caller, never
//! fatal to the process, never retried automatically.

use std::fmt;

use thiserror::Error;

use crate::testimony::{Status, TestimonyId};

/// Required submission fields, named as a type rather than strings so a
/// missing-field error cannot reference a field that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Event,
    Date,
    Location,
    WrittenText,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Event => "event",
            Field::Date => "date",
            Field::Location => "location",
            Field::WrittenText => "writtenText",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submission failed field validation. Blocks insertion; surfaced to the
/// submitter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field '{field}' is missing")]
    MissingField { field: Field },
    #[error("'{raw}' is not a valid YYYY-MM-DD calendar date")]
    InvalidDate { raw: String },
}

/// Why a submission was not accepted.
///
/// Consent is deliberately a separate variant from field validation so the
/// presentation layer can message the two differently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("submission requires consent to review and publication")]
    ConsentRequired,
}

/// An operation referenced an id no record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no testimony with id {id}")]
pub struct NotFoundError {
    pub id: TestimonyId,
}

/// A status change was requested that the moderation state machine does not
/// define. The store is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    #[error("illegal transition for testimony {id}: {from} -> {to}")]
    Illegal {
        id: TestimonyId,
        from: Status,
        to: Status,
    },
}

/// Seeding the store from externally supplied records failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("duplicate testimony id {id} in seed records")]
    DuplicateId { id: TestimonyId },
}
