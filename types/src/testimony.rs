//! Testimony record domain model.
//!
//! A `Testimony` is the sole entity of the archive: a first-person account
//! with a moderation status. Records are created through intake only, so the
//! only constructor producing a fresh record fixes the status to `Pending`.

use std::fmt;
use std::num::NonZeroU32;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::text::NonEmptyText;

/// Author value stored when the submitter opts into anonymity or leaves the
/// name field empty.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

// ── Identifiers ──────────────────────────────────────────────

/// Unique identifier for a testimony record.
///
/// Assigned by the store, monotonically increasing, never reused even after
/// the record holding it is deleted. Zero is structurally unrepresentable
/// via `NonZeroU32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestimonyId(NonZeroU32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("testimony id must be a non-zero 32-bit integer")]
pub struct TestimonyIdError;

impl TestimonyId {
    /// The id assigned to the first record of an empty store.
    pub const MIN: Self = Self(NonZeroU32::MIN);

    pub fn try_new(value: u32) -> Result<Self, TestimonyIdError> {
        NonZeroU32::new(value).map(Self).ok_or(TestimonyIdError)
    }

    /// The next id in allocation order. Saturates at `u32::MAX`.
    #[must_use]
    pub const fn successor(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for TestimonyId {
    type Error = TestimonyIdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl fmt::Display for TestimonyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Moderation status ────────────────────────────────────────

/// Publication status of a testimony.
///
/// `Pending` is the only entry state; `Approved` and `Rejected` are
/// terminal. Which transitions are legal is decided by the moderation
/// workflow, not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl Status {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Approved => "approved",
            Status::Rejected => "rejected",
        }
    }

    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Status::Pending)
    }

    /// Whether the status admits no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Status::Approved | Status::Rejected)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Draft ────────────────────────────────────────────────────

/// A validated testimony awaiting storage: everything but `id` and `status`.
///
/// Produced by intake after validation and normalization; consumed by the
/// store, which assigns the id and fixes the status to `Pending`. The author
/// defaults to [`ANONYMOUS_AUTHOR`] until overridden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    title: Option<String>,
    event: NonEmptyText,
    date: NaiveDate,
    location: NonEmptyText,
    written_text: NonEmptyText,
    author: String,
    audio_url: Option<String>,
    image_url: Option<String>,
}

impl Draft {
    #[must_use]
    pub fn new(
        event: NonEmptyText,
        date: NaiveDate,
        location: NonEmptyText,
        written_text: NonEmptyText,
    ) -> Self {
        Self {
            title: None,
            event,
            date,
            location,
            written_text,
            author: ANONYMOUS_AUTHOR.to_owned(),
            audio_url: None,
            image_url: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: String) -> Self {
        self.author = author;
        self
    }

    #[must_use]
    pub fn with_audio_url(mut self, url: String) -> Self {
        self.audio_url = Some(url);
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, url: String) -> Self {
        self.image_url = Some(url);
        self
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }
}

// ── Testimony ────────────────────────────────────────────────

/// A stored testimony record.
///
/// Fields other than `status` are immutable after creation; there is no edit
/// operation. Status changes go through the store, driven by the moderation
/// workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimony {
    id: TestimonyId,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    title: Option<String>,
    event: NonEmptyText,
    date: NaiveDate,
    location: NonEmptyText,
    written_text: NonEmptyText,
    author: String,
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    image_url: Option<String>,
}

impl Testimony {
    /// Materialize a freshly accepted draft. Status is always `Pending`;
    /// records enter the archive no other way.
    #[must_use]
    pub fn from_draft(id: TestimonyId, draft: Draft) -> Self {
        Self {
            id,
            title: draft.title,
            event: draft.event,
            date: draft.date,
            location: draft.location,
            written_text: draft.written_text,
            author: draft.author,
            status: Status::Pending,
            audio_url: draft.audio_url,
            image_url: draft.image_url,
        }
    }

    #[must_use]
    pub const fn id(&self) -> TestimonyId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn event(&self) -> &str {
        self.event.as_str()
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    #[must_use]
    pub fn written_text(&self) -> &str {
        self.written_text.as_str()
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Overwrite the status field. Pure mutator: transition legality is the
    /// moderation workflow's responsibility, not this record's.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    #[must_use]
    pub fn audio_url(&self) -> Option<&str> {
        self.audio_url.as_deref()
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}
