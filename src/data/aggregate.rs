use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use super::model::FeedbackSet;

// ---------------------------------------------------------------------------
// Summary – the metric-card numbers
// ---------------------------------------------------------------------------

/// Headline metrics over a filtered view. Every field falls back to zero when
/// the view is empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub average_rating: f64,
    pub count: usize,
    pub net_promoter_score: i32,
}

/// Mean rating, record count, and NPS over the selected records.
///
/// NPS is `round(% rating ≥ 4) − round(% rating ≤ 3)`; each percentage is
/// rounded on its own before the subtraction.
pub fn summarize(set: &FeedbackSet, indices: &[usize]) -> Summary {
    if indices.is_empty() {
        return Summary {
            average_rating: 0.0,
            count: 0,
            net_promoter_score: 0,
        };
    }

    let n = indices.len() as f64;
    let mut sum = 0u32;
    let mut promoters = 0usize;
    let mut detractors = 0usize;
    for &i in indices {
        let rating = set.records[i].rating;
        sum += u32::from(rating);
        if rating >= 4 {
            promoters += 1;
        }
        if rating <= 3 {
            detractors += 1;
        }
    }

    let promoter_pct = (promoters as f64 / n * 100.0).round() as i32;
    let detractor_pct = (detractors as f64 / n * 100.0).round() as i32;

    Summary {
        average_rating: f64::from(sum) / n,
        count: indices.len(),
        net_promoter_score: promoter_pct - detractor_pct,
    }
}

// ---------------------------------------------------------------------------
// Grouped views for charting
// ---------------------------------------------------------------------------

/// Mean rating per distinct date, ascending.
pub fn ratings_by_date(set: &FeedbackSet, indices: &[usize]) -> Vec<(NaiveDate, f64)> {
    let mut groups: BTreeMap<NaiveDate, (u32, u32)> = BTreeMap::new();
    for &i in indices {
        let r = &set.records[i];
        let entry = groups.entry(r.date).or_default();
        entry.0 += u32::from(r.rating);
        entry.1 += 1;
    }
    groups
        .into_iter()
        .map(|(date, (sum, n))| (date, f64::from(sum) / f64::from(n)))
        .collect()
}

/// Mean rating per service present, sorted by service name.
pub fn ratings_by_service(set: &FeedbackSet, indices: &[usize]) -> Vec<(String, f64)> {
    let mut groups: BTreeMap<&str, (u32, u32)> = BTreeMap::new();
    for &i in indices {
        let r = &set.records[i];
        let entry = groups.entry(r.service.as_str()).or_default();
        entry.0 += u32::from(r.rating);
        entry.1 += 1;
    }
    groups
        .into_iter()
        .map(|(service, (sum, n))| (service.to_string(), f64::from(sum) / f64::from(n)))
        .collect()
}

/// Up to `k` record indices, newest first; same-day records keep their
/// original relative order.
pub fn top_recent(set: &FeedbackSet, indices: &[usize], k: usize) -> Vec<usize> {
    let mut recent = indices.to_vec();
    recent.sort_by(|&a, &b| set.records[b].date.cmp(&set.records[a].date).then(a.cmp(&b)));
    recent.truncate(k);
    recent
}

/// Percent change of the mean rating over the newest `window_days` span
/// versus the span immediately before it, anchored at the newest selected
/// date. `None` when either span has no records.
pub fn trend_vs_previous(set: &FeedbackSet, indices: &[usize], window_days: u32) -> Option<f64> {
    if window_days == 0 {
        return None;
    }
    let newest = indices.iter().map(|&i| set.records[i].date).max()?;
    let current_start = newest.checked_sub_days(Days::new(u64::from(window_days) - 1))?;
    let previous_start = current_start.checked_sub_days(Days::new(u64::from(window_days)))?;
    let previous_end = current_start.pred_opt()?;

    let mean_over = |from: NaiveDate, to: NaiveDate| -> Option<f64> {
        let mut sum = 0u32;
        let mut n = 0u32;
        for &i in indices {
            let r = &set.records[i];
            if from <= r.date && r.date <= to {
                sum += u32::from(r.rating);
                n += 1;
            }
        }
        (n > 0).then(|| f64::from(sum) / f64::from(n))
    };

    let current = mean_over(current_start, newest)?;
    let previous = mean_over(previous_start, previous_end)?;
    Some((current - previous) / previous * 100.0)
}
