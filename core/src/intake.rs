//! Submission intake: validation and normalization of untrusted input.
//!
//! Converts a raw [`Submission`] into a validated [`Draft`] or a typed
//! rejection. Nothing reaches the store without passing through here, which
//! is what lets the store treat its drafts as already proven.

use chrono::NaiveDate;
use rawi_types::{Draft, Field, NonEmptyText, SubmitError, ValidationError};

/// Raw submission input, exactly as supplied by the submitter.
///
/// All fields are untrusted text; empty means absent. `anonymous` and
/// `consent` are the two checkboxes of the submission form.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub title: String,
    pub event: String,
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
    pub location: String,
    pub written_text: String,
    pub author: String,
    pub audio_url: String,
    pub image_url: String,
    pub anonymous: bool,
    pub consent: bool,
}

/// Validate and normalize a submission into a storable draft.
///
/// Checked in order: consent first (its absence is a distinct error so the
/// UI can message it separately), then each required field. Normalization:
/// an anonymous submission, or an empty author, stores the author sentinel;
/// empty optional fields become `None`.
pub fn validate(submission: &Submission) -> Result<Draft, SubmitError> {
    if !submission.consent {
        return Err(SubmitError::ConsentRequired);
    }

    let event = require(Field::Event, &submission.event)?;
    let date = parse_date(&submission.date)?;
    let location = require(Field::Location, &submission.location)?;
    let written_text = require(Field::WrittenText, &submission.written_text)?;

    let mut draft = Draft::new(event, date, location, written_text);
    if let Some(title) = non_blank(&submission.title) {
        draft = draft.with_title(title);
    }
    if !submission.anonymous
        && let Some(author) = non_blank(&submission.author)
    {
        draft = draft.with_author(author);
    }
    if let Some(url) = non_blank(&submission.audio_url) {
        draft = draft.with_audio_url(url);
    }
    if let Some(url) = non_blank(&submission.image_url) {
        draft = draft.with_image_url(url);
    }
    Ok(draft)
}

fn require(field: Field, value: &str) -> Result<NonEmptyText, ValidationError> {
    NonEmptyText::new(value).map_err(|_| ValidationError::MissingField { field })
}

fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField { field: Field::Date });
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        raw: trimmed.to_owned(),
    })
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}
