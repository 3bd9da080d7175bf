//! Moderation workflow: the status state machine.
//!
//! `Pending` is the only entry state; `Approved` and `Rejected` are
//! terminal. The only legal transitions are `Pending -> Approved` and
//! `Pending -> Rejected`. This module is the single authority on legality:
//! presentation layers may hide controls for non-pending records, but that
//! is a convenience, not enforcement.

use rawi_types::{NotFoundError, Status, TestimonyId, TransitionError};

use crate::store::TestimonyStore;

/// Apply a moderation decision to the record with `id`.
///
/// The store is touched only after the current status is confirmed to be
/// `Pending` and the target to be terminal; on any error it is left exactly
/// as it was. A request whose target equals the current status — including
/// `Pending -> Pending` — is an error, not a no-op: the state machine
/// defines no self-transitions.
pub fn transition(
    store: &mut TestimonyStore,
    id: TestimonyId,
    target: Status,
) -> Result<(), TransitionError> {
    let current = store.get(id).ok_or(NotFoundError { id })?.status();
    if !current.is_pending() || !target.is_terminal() {
        tracing::warn!(%id, from = %current, to = %target, "illegal transition refused");
        return Err(TransitionError::Illegal {
            id,
            from: current,
            to: target,
        });
    }
    store.set_status(id, target)?;
    tracing::info!(%id, decision = %target, "moderation decision applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rawi_types::{Draft, NonEmptyText, Status, TestimonyId, TransitionError};

    use super::transition;
    use crate::store::TestimonyStore;

    fn store_with_one_pending() -> (TestimonyStore, TestimonyId) {
        let mut store = TestimonyStore::new();
        let id = store.insert(Draft::new(
            NonEmptyText::new("حصار الفاشر").unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            NonEmptyText::new("الفاشر").unwrap(),
            NonEmptyText::new("نص الشهادة").unwrap(),
        ));
        (store, id)
    }

    #[test]
    fn pending_can_be_approved() {
        let (mut store, id) = store_with_one_pending();
        transition(&mut store, id, Status::Approved).unwrap();
        assert_eq!(store.get(id).unwrap().status(), Status::Approved);
    }

    #[test]
    fn pending_can_be_rejected() {
        let (mut store, id) = store_with_one_pending();
        transition(&mut store, id, Status::Rejected).unwrap();
        assert_eq!(store.get(id).unwrap().status(), Status::Rejected);
    }

    #[test]
    fn approved_is_terminal() {
        let (mut store, id) = store_with_one_pending();
        transition(&mut store, id, Status::Approved).unwrap();

        let err = transition(&mut store, id, Status::Rejected).unwrap_err();
        assert_eq!(
            err,
            TransitionError::Illegal {
                id,
                from: Status::Approved,
                to: Status::Rejected,
            }
        );
        assert_eq!(store.get(id).unwrap().status(), Status::Approved);
    }

    #[test]
    fn rejected_record_cannot_be_approved() {
        let (mut store, id) = store_with_one_pending();
        transition(&mut store, id, Status::Rejected).unwrap();

        let err = transition(&mut store, id, Status::Approved).unwrap_err();
        assert!(matches!(err, TransitionError::Illegal { .. }));
        assert_eq!(store.get(id).unwrap().status(), Status::Rejected);
    }

    #[test]
    fn self_transition_is_an_error_not_a_noop() {
        let (mut store, id) = store_with_one_pending();
        let err = transition(&mut store, id, Status::Pending).unwrap_err();
        assert_eq!(
            err,
            TransitionError::Illegal {
                id,
                from: Status::Pending,
                to: Status::Pending,
            }
        );
        assert_eq!(store.get(id).unwrap().status(), Status::Pending);
    }

    #[test]
    fn unknown_id_reports_not_found() {
        let (mut store, _id) = store_with_one_pending();
        let missing = TestimonyId::try_new(42).unwrap();
        let err = transition(&mut store, missing, Status::Approved).unwrap_err();
        assert!(matches!(err, TransitionError::NotFound(inner) if inner.id == missing));
    }
}
