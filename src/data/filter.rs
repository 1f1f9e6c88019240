use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::model::FeedbackSet;

// ---------------------------------------------------------------------------
// DateSelection – the three shapes a date-range picker can produce
// ---------------------------------------------------------------------------

/// Date constraint as the input widgets express it: no selection, a single
/// day, or a start/end pair (possibly reversed).
///
/// All shapes are normalized in one place, [`DateSelection::resolve`], so the
/// filter predicate only ever sees a closed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSelection {
    /// No constraint: falls back to the full observed span of the data.
    All,
    /// One day, treated as the one-day interval `[d, d]`.
    Single(NaiveDate),
    /// Closed interval `[start, end]`; a reversed pair is swapped.
    Range(NaiveDate, NaiveDate),
}

impl DateSelection {
    /// Normalize to a closed interval. `None` means unconstrained, which only
    /// happens when the table is empty and has no span to fall back to.
    pub fn resolve(&self, set: &FeedbackSet) -> Option<(NaiveDate, NaiveDate)> {
        match *self {
            DateSelection::All => set.date_span(),
            DateSelection::Single(d) => Some((d, d)),
            DateSelection::Range(start, end) if start <= end => Some((start, end)),
            DateSelection::Range(start, end) => Some((end, start)),
        }
    }
}

// ---------------------------------------------------------------------------
// Filter predicate: selected services + date window
// ---------------------------------------------------------------------------

/// Current filter selections. An empty service set means "show nothing".
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub services: BTreeSet<String>,
    pub dates: DateSelection,
}

/// Initialise a [`FilterState`] with everything selected (i.e., show all).
pub fn init_filter_state(set: &FeedbackSet) -> FilterState {
    FilterState {
        services: set.services.iter().cloned().collect(),
        dates: DateSelection::All,
    }
}

/// Return indices of records that pass both filters, preserving order.
///
/// A record passes when its service is in the selected set and its date lies
/// inside the resolved interval, inclusive on both ends.
pub fn filtered_indices(set: &FeedbackSet, filters: &FilterState) -> Vec<usize> {
    // All observed services selected → no service constraint to check.
    let all_services = filters.services.len() == set.services.len();
    let window = filters.dates.resolve(set);

    set.records
        .iter()
        .enumerate()
        .filter(|(_, r)| all_services || filters.services.contains(&r.service))
        .filter(|(_, r)| match window {
            Some((start, end)) => start <= r.date && r.date <= end,
            None => true,
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::FeedbackRecord;

    fn record(date: &str, service: &str, rating: u8) -> FeedbackRecord {
        FeedbackRecord {
            date: date.parse().unwrap(),
            service: service.to_string(),
            rating,
            comment: "ok".to_string(),
        }
    }

    fn sample() -> FeedbackSet {
        FeedbackSet::from_records(vec![
            record("2024-05-01", "Haircut", 4),
            record("2024-05-03", "Workshop", 5),
            record("2024-05-02", "Haircut", 3),
            record("2024-05-05", "Yoga Class", 5),
            record("2024-05-03", "Haircut", 4),
        ])
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn maximal_filter_is_the_identity() {
        let set = sample();
        let filters = init_filter_state(&set);
        assert_eq!(filtered_indices(&set, &filters), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn results_are_an_ordered_subsequence_matching_both_predicates() {
        let set = sample();
        let filters = FilterState {
            services: ["Haircut".to_string()].into_iter().collect(),
            dates: DateSelection::Range(day("2024-05-02"), day("2024-05-03")),
        };
        let indices = filtered_indices(&set, &filters);
        assert_eq!(indices, vec![2, 4]);
        for &i in &indices {
            let r = &set.records[i];
            assert_eq!(r.service, "Haircut");
            assert!(r.date >= day("2024-05-02") && r.date <= day("2024-05-03"));
        }
    }

    #[test]
    fn interval_is_inclusive_on_both_ends() {
        let set = sample();
        let mut filters = init_filter_state(&set);
        filters.dates = DateSelection::Range(day("2024-05-01"), day("2024-05-05"));
        assert_eq!(filtered_indices(&set, &filters).len(), set.len());
    }

    #[test]
    fn no_services_selected_hides_everything() {
        let set = sample();
        let filters = FilterState {
            services: BTreeSet::new(),
            dates: DateSelection::All,
        };
        assert!(filtered_indices(&set, &filters).is_empty());
    }

    #[test]
    fn single_day_collapses_to_a_one_day_interval() {
        let set = sample();
        assert_eq!(
            DateSelection::Single(day("2024-05-03")).resolve(&set),
            Some((day("2024-05-03"), day("2024-05-03")))
        );

        let mut filters = init_filter_state(&set);
        filters.dates = DateSelection::Single(day("2024-05-03"));
        assert_eq!(filtered_indices(&set, &filters), vec![1, 4]);
    }

    #[test]
    fn reversed_range_is_swapped() {
        let set = sample();
        assert_eq!(
            DateSelection::Range(day("2024-05-04"), day("2024-05-01")).resolve(&set),
            Some((day("2024-05-01"), day("2024-05-04")))
        );
    }

    #[test]
    fn empty_selection_falls_back_to_the_observed_span() {
        let set = sample();
        assert_eq!(
            DateSelection::All.resolve(&set),
            Some((day("2024-05-01"), day("2024-05-05")))
        );
        assert_eq!(DateSelection::All.resolve(&FeedbackSet::default()), None);
    }
}
