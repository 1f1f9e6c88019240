use chrono::NaiveDate;

use crate::color::CategoryColors;
use crate::data::filter::{filtered_indices, init_filter_state, DateSelection, FilterState};
use crate::data::generate::{generate, MockConfig};
use crate::data::model::FeedbackSet;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// How the date filter widgets are currently configured. Maps one-to-one onto
/// the three [`DateSelection`] shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilterMode {
    AllDates,
    SingleDay,
    Between,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The current feedback table (regenerated or imported).
    pub feedback: FeedbackSet,

    /// Current filter selections.
    pub filters: FilterState,

    /// Indices of records passing the current filters (cached).
    pub visible: Vec<usize>,

    /// Per-service colours.
    pub colors: CategoryColors,

    /// Mock-data knobs; the record count is user-adjustable.
    pub config: MockConfig,

    /// Seed used for the current table; bumped on regeneration.
    pub seed: u64,

    /// Anchor date for the generator's lookback window.
    pub today: NaiveDate,

    /// Date-filter widget state, combined into `filters.dates` on change.
    pub date_mode: DateFilterMode,
    pub start_pick: NaiveDate,
    pub end_pick: NaiveDate,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the initial state with a freshly generated feedback table.
    pub fn new(config: MockConfig, seed: u64, today: NaiveDate) -> Self {
        let mut state = AppState {
            feedback: FeedbackSet::default(),
            filters: FilterState {
                services: Default::default(),
                dates: DateSelection::All,
            },
            visible: Vec::new(),
            colors: CategoryColors::new(&[]),
            config,
            seed,
            today,
            date_mode: DateFilterMode::AllDates,
            start_pick: today,
            end_pick: today,
            status_message: None,
        };
        state.set_feedback(generate(&state.config, state.seed, state.today));
        state
    }

    /// Ingest a new feedback table, re-initialise filters and colours.
    pub fn set_feedback(&mut self, feedback: FeedbackSet) {
        self.filters = init_filter_state(&feedback);
        self.visible = (0..feedback.len()).collect();
        self.colors = CategoryColors::new(&feedback.services);

        // Seed the pickers with the observed span so switching modes starts
        // from sensible bounds.
        if let Some((min, max)) = feedback.date_span() {
            self.start_pick = min;
            self.end_pick = max;
        }
        self.date_mode = DateFilterMode::AllDates;

        self.feedback = feedback;
        self.status_message = None;
    }

    /// Draw a fresh mock table with the next seed.
    pub fn regenerate(&mut self) {
        self.seed = self.seed.wrapping_add(1);
        self.set_feedback(generate(&self.config, self.seed, self.today));
    }

    /// Recompute `visible` after a filter change.
    pub fn refilter(&mut self) {
        self.filters.dates = self.date_selection();
        self.visible = filtered_indices(&self.feedback, &self.filters);
    }

    /// Current widget state expressed as a date selection.
    pub fn date_selection(&self) -> DateSelection {
        match self.date_mode {
            DateFilterMode::AllDates => DateSelection::All,
            DateFilterMode::SingleDay => DateSelection::Single(self.start_pick),
            DateFilterMode::Between => DateSelection::Range(self.start_pick, self.end_pick),
        }
    }

    /// Toggle a single service in the filter.
    pub fn toggle_service(&mut self, service: &str) {
        if !self.filters.services.remove(service) {
            self.filters.services.insert(service.to_string());
        }
        self.refilter();
    }

    /// Select every observed service.
    pub fn select_all_services(&mut self) {
        self.filters.services = self.feedback.services.iter().cloned().collect();
        self.refilter();
    }

    /// Deselect every service.
    pub fn select_no_services(&mut self) {
        self.filters.services.clear();
        self.refilter();
    }
}
