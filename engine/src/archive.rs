//! The `Archive` facade: one owner for the store, one method per operation.

use std::time::Duration;

use rawi_core::{StatusCounts, StatusFilter, Submission, TestimonyStore, intake, moderation, query};
use rawi_types::{
    NotFoundError, SeedError, Status, SubmitError, Testimony, TestimonyId, TransitionError,
};

/// Simulated intake acceptance latency applied before a submission becomes
/// visible.
pub const DEFAULT_INTAKE_LATENCY: Duration = Duration::from_millis(1500);

/// Owns the testimony store and exposes the archive's operations.
///
/// Single-writer: one logical actor mutates at a time, so there is no
/// locking. Reads either borrow the live collection (`search`, `by_status`,
/// `counts`, `locations`) or copy it (`snapshot`) for callers that need a
/// stable point-in-time view across their own rendering.
#[derive(Debug)]
pub struct Archive {
    store: TestimonyStore,
    intake_latency: Duration,
}

impl Default for Archive {
    fn default() -> Self {
        Self::new()
    }
}

impl Archive {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: TestimonyStore::new(),
            intake_latency: DEFAULT_INTAKE_LATENCY,
        }
    }

    /// Build an archive over externally supplied records (the host's
    /// persistence boundary). Fails on duplicate ids.
    pub fn with_records(records: Vec<Testimony>) -> Result<Self, SeedError> {
        Ok(Self {
            store: TestimonyStore::from_records(records)?,
            intake_latency: DEFAULT_INTAKE_LATENCY,
        })
    }

    /// Override the simulated intake latency. Tests use `Duration::ZERO` or
    /// paused time.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.intake_latency = latency;
        self
    }

    /// Validate and accept a submission.
    ///
    /// Validation and consent failures return immediately. On the
    /// acceptance path the call suspends for the configured latency before
    /// the record is inserted, mirroring the original submission boundary.
    /// Not cancellable and not retried; dropping the future before it
    /// resolves leaves no partial state, because the insert happens strictly
    /// after the delay.
    pub async fn submit(&mut self, submission: &Submission) -> Result<TestimonyId, SubmitError> {
        let draft = intake::validate(submission)?;
        tokio::time::sleep(self.intake_latency).await;
        let id = self.store.insert(draft);
        tracing::info!(%id, author = draft_author_kind(submission), "submission accepted");
        Ok(id)
    }

    /// Apply a moderation decision. Legality is enforced by the workflow;
    /// the store is untouched on error.
    pub fn transition(&mut self, id: TestimonyId, target: Status) -> Result<(), TransitionError> {
        moderation::transition(&mut self.store, id, target)
    }

    /// Delete a record. Confirming the action with the end user is the
    /// caller's job; the core never prompts.
    pub fn remove(&mut self, id: TestimonyId) -> Result<(), NotFoundError> {
        self.store.remove(id)?;
        tracing::info!(%id, "testimony deleted");
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: TestimonyId) -> Option<&Testimony> {
        self.store.get(id)
    }

    /// Point-in-time copy of the collection in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Testimony> {
        self.store.snapshot()
    }

    /// Public-archive view: free-text search plus optional exact-location
    /// filter, in insertion order.
    #[must_use]
    pub fn search(&self, term: &str, location: Option<&str>) -> Vec<&Testimony> {
        let results = query::search(self.store.records(), term, location);
        tracing::debug!(term, ?location, hits = results.len(), "archive query");
        results
    }

    /// Moderation view: records matching the status filter, in insertion
    /// order.
    #[must_use]
    pub fn by_status(&self, filter: StatusFilter) -> Vec<&Testimony> {
        query::by_status(self.store.records(), filter)
    }

    /// Distinct locations for the filter dropdown, sorted.
    #[must_use]
    pub fn locations(&self) -> Vec<String> {
        query::locations(self.store.records())
    }

    /// Per-status counts for the moderation dashboard.
    #[must_use]
    pub fn counts(&self) -> StatusCounts {
        StatusCounts::tally(self.store.records())
    }
}

fn draft_author_kind(submission: &Submission) -> &'static str {
    if submission.anonymous || submission.author.trim().is_empty() {
        "anonymous"
    } else {
        "named"
    }
}
