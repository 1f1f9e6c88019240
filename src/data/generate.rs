use chrono::{Days, NaiveDate};

use super::model::{FeedbackRecord, FeedbackSet};

// ---------------------------------------------------------------------------
// MockConfig – corpus and knobs for the mock generator
// ---------------------------------------------------------------------------

/// Corpus and knobs for mock feedback generation.
///
/// Passed in explicitly so the generator carries no ambient configuration and
/// stays independently testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockConfig {
    /// How many records to draw.
    pub records: usize,
    /// Service categories to draw from.
    pub services: Vec<String>,
    /// Comment corpus to draw from.
    pub comments: Vec<String>,
    /// Dates are drawn uniformly from `today - [0, lookback_days)`.
    pub lookback_days: u32,
}

impl Default for MockConfig {
    fn default() -> Self {
        MockConfig {
            records: 50,
            services: [
                "Workshop",
                "Consultation",
                "Yoga Class",
                "Math Tutoring",
                "Haircut",
            ]
            .map(String::from)
            .to_vec(),
            comments: [
                "Very helpful session!",
                "Could improve punctuality.",
                "Loved the hands-on activities.",
                "Will recommend to friends.",
                "Friendly and professional.",
                "Clear explanations.",
                "Value for money.",
                "Great atmosphere.",
                "Could use more examples.",
                "Excellent service!",
            ]
            .map(String::from)
            .to_vec(),
            lookback_days: 90,
        }
    }
}

// ---------------------------------------------------------------------------
// SimpleRng – minimal deterministic PRNG (xoshiro256**)
// ---------------------------------------------------------------------------

pub struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform index in `[0, n)`. `n` must be non-zero.
    fn next_index(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

// ---------------------------------------------------------------------------
// generate – draw a reproducible mock feedback table
// ---------------------------------------------------------------------------

/// Draw `config.records` mock feedback records, reproducibly for a given seed.
///
/// `today` anchors the date window. Ratings are uniform in {3, 4, 5}; dates,
/// services, and comments are uniform draws from their ranges. A degenerate
/// config (zero records or an empty corpus) yields an empty table.
pub fn generate(config: &MockConfig, seed: u64, today: NaiveDate) -> FeedbackSet {
    if config.records == 0 || config.services.is_empty() || config.comments.is_empty() {
        log::warn!("mock generator called with an empty corpus; returning no records");
        return FeedbackSet::default();
    }

    let lookback = config.lookback_days.max(1) as usize;
    let mut rng = SimpleRng::new(seed);
    let mut records = Vec::with_capacity(config.records);

    for _ in 0..config.records {
        let days_back = rng.next_index(lookback) as u64;
        records.push(FeedbackRecord {
            date: today - Days::new(days_back),
            service: config.services[rng.next_index(config.services.len())].clone(),
            rating: 3 + rng.next_index(3) as u8,
            comment: config.comments[rng.next_index(config.comments.len())].clone(),
        });
    }

    log::info!("generated {} mock feedback records (seed {seed})", records.len());
    FeedbackSet::from_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        "2024-06-01".parse().unwrap()
    }

    #[test]
    fn same_seed_reproduces_the_same_table() {
        let config = MockConfig::default();
        let a = generate(&config, 42, today());
        let b = generate(&config, 42, today());
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let config = MockConfig::default();
        let a = generate(&config, 1, today());
        let b = generate(&config, 2, today());
        assert_ne!(a, b);
    }

    #[test]
    fn draws_stay_inside_the_configured_ranges() {
        let config = MockConfig::default();
        let set = generate(&config, 7, today());

        assert_eq!(set.len(), config.records);
        let earliest = today() - Days::new(u64::from(config.lookback_days) - 1);
        for record in &set.records {
            assert!((3..=5).contains(&record.rating));
            assert!(record.date >= earliest && record.date <= today());
            assert!(config.services.contains(&record.service));
            assert!(config.comments.contains(&record.comment));
        }
    }

    #[test]
    fn empty_corpus_yields_an_empty_table() {
        let config = MockConfig {
            services: Vec::new(),
            ..MockConfig::default()
        };
        assert!(generate(&config, 42, today()).is_empty());
    }

    #[test]
    fn zero_records_yields_an_empty_table() {
        let config = MockConfig {
            records: 0,
            ..MockConfig::default()
        };
        assert!(generate(&config, 42, today()).is_empty());
    }
}
