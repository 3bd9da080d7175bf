//! The owned testimony collection.
//!
//! Exactly one `TestimonyStore` owns the canonical record sequence; every
//! other component works against immutable snapshots of it. The store is a
//! pure collection type: which status changes are legal is decided by the
//! moderation workflow, not here.

use std::collections::HashSet;

use rawi_types::{Draft, NotFoundError, SeedError, Status, Testimony, TestimonyId};

/// Authoritative, insertion-ordered collection of testimony records.
///
/// Ids are allocated from a monotone counter that never decrements, so an id
/// is never reused even after the record holding it is deleted.
#[derive(Debug, Clone, Default)]
pub struct TestimonyStore {
    records: Vec<Testimony>,
    next_id: Option<TestimonyId>,
}

impl TestimonyStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from an externally supplied ordered sequence, e.g.
    /// records loaded by whatever persistence layer the host application
    /// uses. Insertion order of the input is preserved; the id counter is
    /// seeded past the highest id seen.
    pub fn from_records(records: Vec<Testimony>) -> Result<Self, SeedError> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut max_id: Option<TestimonyId> = None;
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(SeedError::DuplicateId { id: record.id() });
            }
            max_id = max_id.max(Some(record.id()));
        }
        Ok(Self {
            records,
            next_id: max_id.map(TestimonyId::successor),
        })
    }

    /// Append a validated draft as a new `Pending` record and return its
    /// freshly allocated id. Always succeeds.
    pub fn insert(&mut self, draft: Draft) -> TestimonyId {
        let id = self.next_id.unwrap_or(TestimonyId::MIN);
        self.next_id = Some(id.successor());
        self.records.push(Testimony::from_draft(id, draft));
        tracing::debug!(%id, "testimony inserted");
        id
    }

    /// Overwrite the status of the record with `id`.
    ///
    /// Pure field mutator: no transition policy is applied here. Callers
    /// wanting the state machine enforced go through
    /// [`crate::moderation::transition`].
    pub fn set_status(&mut self, id: TestimonyId, status: Status) -> Result<(), NotFoundError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(NotFoundError { id })?;
        record.set_status(status);
        Ok(())
    }

    /// Remove the record with `id`. A missing id is signaled, never silently
    /// swallowed; the caller decides whether to treat it as a no-op.
    pub fn remove(&mut self, id: TestimonyId) -> Result<(), NotFoundError> {
        let index = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(NotFoundError { id })?;
        self.records.remove(index);
        tracing::debug!(%id, "testimony removed");
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: TestimonyId) -> Option<&Testimony> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Borrow the collection in insertion order.
    #[must_use]
    pub fn records(&self) -> &[Testimony] {
        &self.records
    }

    /// Point-in-time copy of the collection in insertion order. Not a live
    /// view: mutations after the call are not reflected.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Testimony> {
        self.records.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
