use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// FeedbackRecord – one row of the feedback table
// ---------------------------------------------------------------------------

/// A single piece of client feedback (one row of the table).
///
/// Field order is the column order of the CSV report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Calendar date the feedback was left (no time component).
    pub date: NaiveDate,
    /// Which service the feedback refers to.
    pub service: String,
    /// Star rating in 1–5; the mock generator only produces 3–5.
    pub rating: u8,
    /// Free-text comment.
    pub comment: String,
}

// ---------------------------------------------------------------------------
// FeedbackSet – the complete feedback table
// ---------------------------------------------------------------------------

/// The full feedback table with a pre-computed service index.
///
/// Records are never mutated after creation; filtering selects a subset of
/// indices into `records`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackSet {
    /// All records, in generation (or import) order.
    pub records: Vec<FeedbackRecord>,
    /// Sorted distinct services present in `records`.
    pub services: Vec<String>,
}

impl FeedbackSet {
    /// Build the service index from the given records.
    pub fn from_records(records: Vec<FeedbackRecord>) -> Self {
        let services: BTreeSet<&str> = records.iter().map(|r| r.service.as_str()).collect();
        let services = services.into_iter().map(String::from).collect();
        FeedbackSet { records, services }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Oldest and newest record dates, or `None` when the table is empty.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.records.iter().map(|r| r.date).min()?;
        let max = self.records.iter().map(|r| r.date).max()?;
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, service: &str, rating: u8) -> FeedbackRecord {
        FeedbackRecord {
            date: date.parse().unwrap(),
            service: service.to_string(),
            rating,
            comment: "ok".to_string(),
        }
    }

    #[test]
    fn service_index_is_sorted_and_distinct() {
        let set = FeedbackSet::from_records(vec![
            record("2024-05-03", "Yoga Class", 5),
            record("2024-05-01", "Haircut", 4),
            record("2024-05-02", "Yoga Class", 3),
        ]);
        assert_eq!(set.services, vec!["Haircut", "Yoga Class"]);
    }

    #[test]
    fn date_span_covers_min_and_max() {
        let set = FeedbackSet::from_records(vec![
            record("2024-05-03", "Haircut", 5),
            record("2024-04-11", "Haircut", 4),
            record("2024-05-01", "Workshop", 3),
        ]);
        assert_eq!(
            set.date_span(),
            Some(("2024-04-11".parse().unwrap(), "2024-05-03".parse().unwrap()))
        );
    }

    #[test]
    fn empty_set_has_no_span() {
        let set = FeedbackSet::default();
        assert!(set.is_empty());
        assert_eq!(set.date_span(), None);
    }
}
