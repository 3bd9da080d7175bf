//! Archive query engine: derived, read-only views of a store snapshot.
//!
//! Two independent filter modes. The public archive combines a free-text
//! search with an optional exact-location filter; the moderation table
//! filters by status alone. Neither mutates anything, and both preserve
//! snapshot order — the engine never re-sorts results.

use std::collections::BTreeSet;

use rawi_types::{Status, Testimony};

/// Status predicate for the moderation view. `All` is the sentinel that
/// matches every record regardless of status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    #[must_use]
    pub fn matches(self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl From<Status> for StatusFilter {
    fn from(status: Status) -> Self {
        StatusFilter::Only(status)
    }
}

/// Records matching both a free-text search and an optional exact-location
/// filter, in snapshot order.
///
/// The term matches case-insensitively as a substring of `title`, `event`,
/// or `written_text`; an empty term matches every record. The location
/// filter is exact and case-sensitive; `None` matches every record.
#[must_use]
pub fn search<'a>(
    snapshot: &'a [Testimony],
    term: &str,
    location: Option<&str>,
) -> Vec<&'a Testimony> {
    let needle = term.to_lowercase();
    snapshot
        .iter()
        .filter(|record| matches_term(record, &needle))
        .filter(|record| location.is_none_or(|wanted| record.location() == wanted))
        .collect()
}

fn matches_term(record: &Testimony, needle: &str) -> bool {
    // `contains("")` is true, so an empty term matches without special-casing.
    record
        .title()
        .is_some_and(|title| title.to_lowercase().contains(needle))
        || record.event().to_lowercase().contains(needle)
        || record.written_text().to_lowercase().contains(needle)
}

/// Records matching the status filter, in snapshot order. Independent of
/// [`search`]; the two are never composed.
#[must_use]
pub fn by_status(snapshot: &[Testimony], filter: StatusFilter) -> Vec<&Testimony> {
    snapshot
        .iter()
        .filter(|record| filter.matches(record.status()))
        .collect()
}

/// Distinct location values present in the snapshot, sorted
/// lexicographically. Used to populate the location filter choices.
#[must_use]
pub fn locations(snapshot: &[Testimony]) -> Vec<String> {
    snapshot
        .iter()
        .map(Testimony::location)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rawi_types::{Draft, NonEmptyText, Status, Testimony};

    use super::{StatusFilter, by_status, locations, search};
    use crate::moderation;
    use crate::store::TestimonyStore;

    fn record(event: &str, location: &str, text: &str) -> Draft {
        Draft::new(
            NonEmptyText::new(event).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            NonEmptyText::new(location).unwrap(),
            NonEmptyText::new(text).unwrap(),
        )
    }

    fn snapshot() -> Vec<Testimony> {
        let mut store = TestimonyStore::new();
        store.insert(
            record("Battle of Omdurman", "الخرطوم", "We fled at dawn.")
                .with_title("The first week".to_owned()),
        );
        store.insert(record("حصار الفاشر", "أم درمان", "نزحنا مع بداية الحصار"));
        store.insert(record("قصف المدينة", "الفاشر", "كان القصف مستمراً لأيام"));
        store.snapshot()
    }

    #[test]
    fn empty_term_and_no_location_match_everything() {
        let snapshot = snapshot();
        let results = search(&snapshot, "", None);
        assert_eq!(results.len(), snapshot.len());
    }

    #[test]
    fn term_matches_case_insensitively_across_fields() {
        let snapshot = snapshot();
        // Title hit.
        assert_eq!(search(&snapshot, "FIRST WEEK", None).len(), 1);
        // Event hit.
        assert_eq!(search(&snapshot, "omdurman", None).len(), 1);
        // Body hit.
        assert_eq!(search(&snapshot, "dawn", None).len(), 1);
    }

    #[test]
    fn term_matches_arabic_content() {
        let snapshot = snapshot();
        let results = search(&snapshot, "الحصار", None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].location(), "أم درمان");
    }

    #[test]
    fn location_filter_is_exact() {
        let snapshot = snapshot();
        let results = search(&snapshot, "", Some("أم درمان"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].event(), "حصار الفاشر");

        // Substring of a stored location is not a match.
        assert!(search(&snapshot, "", Some("درمان")).is_empty());
    }

    #[test]
    fn term_and_location_compose_with_and() {
        let snapshot = snapshot();
        assert_eq!(search(&snapshot, "القصف", Some("الفاشر")).len(), 1);
        assert!(search(&snapshot, "القصف", Some("الخرطوم")).is_empty());
    }

    #[test]
    fn results_keep_snapshot_order() {
        let snapshot = snapshot();
        let results = search(&snapshot, "", None);
        let ids: Vec<u32> = results.iter().map(|r| r.id().value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn locations_are_distinct_and_sorted() {
        let mut store = TestimonyStore::new();
        store.insert(record("a", "الخرطوم", "x"));
        store.insert(record("b", "أم درمان", "y"));
        store.insert(record("c", "الخرطوم", "z"));
        let snapshot = store.snapshot();

        let locations = locations(&snapshot);
        assert_eq!(locations.len(), 2);
        let mut sorted = locations.clone();
        sorted.sort();
        assert_eq!(locations, sorted);
    }

    #[test]
    fn status_filter_all_matches_everything() {
        let snapshot = snapshot();
        assert_eq!(by_status(&snapshot, StatusFilter::All).len(), snapshot.len());
    }

    #[test]
    fn status_filter_only_matches_exact_status() {
        let mut store = TestimonyStore::new();
        let approved = store.insert(record("a", "x", "t"));
        store.insert(record("b", "y", "t"));
        moderation::transition(&mut store, approved, Status::Approved).unwrap();
        let snapshot = store.snapshot();

        let results = by_status(&snapshot, StatusFilter::Only(Status::Approved));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id(), approved);
        assert!(by_status(&snapshot, StatusFilter::Only(Status::Rejected)).is_empty());
    }

    #[test]
    fn record_with_no_title_still_matches_on_other_fields() {
        let snapshot = snapshot();
        let results = search(&snapshot, "مستمراً", None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title(), None);
    }
}
