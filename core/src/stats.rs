//! Per-status summary counts over a store snapshot.

use rawi_types::{Status, Testimony};
use serde::{Deserialize, Serialize};

/// Summary counts for a snapshot: the total and one count per status.
///
/// Pure function of the snapshot, recomputed on demand — the source
/// collection is small, so nothing is cached or incrementally maintained.
/// `total` always equals `pending + approved + rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl StatusCounts {
    #[must_use]
    pub fn tally(snapshot: &[Testimony]) -> Self {
        let mut counts = Self::default();
        for record in snapshot {
            counts.total += 1;
            match record.status() {
                Status::Pending => counts.pending += 1,
                Status::Approved => counts.approved += 1,
                Status::Rejected => counts.rejected += 1,
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rawi_types::{Draft, NonEmptyText, Status};

    use super::StatusCounts;
    use crate::moderation::transition;
    use crate::store::TestimonyStore;

    fn draft(event: &str) -> Draft {
        Draft::new(
            NonEmptyText::new(event).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            NonEmptyText::new("الخرطوم").unwrap(),
            NonEmptyText::new("نص").unwrap(),
        )
    }

    #[test]
    fn empty_snapshot_tallies_to_zero() {
        assert_eq!(StatusCounts::tally(&[]), StatusCounts::default());
    }

    #[test]
    fn counts_split_by_status_and_sum_to_total() {
        let mut store = TestimonyStore::new();
        let a = store.insert(draft("a"));
        let b = store.insert(draft("b"));
        store.insert(draft("c"));
        transition(&mut store, a, Status::Approved).unwrap();
        transition(&mut store, b, Status::Rejected).unwrap();

        let counts = StatusCounts::tally(&store.snapshot());
        assert_eq!(counts.total, 3);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.approved, 1);
        assert_eq!(counts.rejected, 1);
        assert_eq!(
            counts.total,
            counts.pending + counts.approved + counts.rejected
        );
    }

    #[test]
    fn tally_serializes_for_dashboards() {
        let counts = StatusCounts {
            total: 2,
            pending: 2,
            approved: 0,
            rejected: 0,
        };
        let json = serde_json::to_value(counts).unwrap();
        assert_eq!(json["total"], 2);
        assert_eq!(json["pending"], 2);
    }
}
