use anyhow::{Context, Result};
use serde::Serialize;
use thiserror::Error;

use super::aggregate::Summary;
use super::model::{FeedbackRecord, FeedbackSet};

/// Column order of the CSV report; matches the field order of
/// [`FeedbackRecord`].
const CSV_HEADER: [&str; 4] = ["date", "service", "rating", "comment"];

// ---------------------------------------------------------------------------
// CSV report
// ---------------------------------------------------------------------------

/// Serialize the selected records as CSV: header row, ISO dates, no index
/// column. An empty selection produces a header-only report.
pub fn to_csv(set: &FeedbackSet, indices: &[usize]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER).context("writing CSV header")?;
    for &i in indices {
        writer
            .serialize(&set.records[i])
            .with_context(|| format!("writing CSV row {i}"))?;
    }

    let bytes = writer.into_inner().context("flushing CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not UTF-8")
}

/// Errors raised while reading a feedback CSV back in.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("record {row}: rating {rating} is outside 1-5")]
    RatingOutOfRange { row: usize, rating: u8 },
}

/// Parse a feedback CSV shaped like the output of [`to_csv`].
///
/// Ratings outside 1–5 are rejected here, at the input boundary, so the rest
/// of the data layer never sees them.
pub fn from_csv(text: &str) -> Result<Vec<FeedbackRecord>, ImportError> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut records = Vec::new();

    for (row, result) in reader.deserialize().enumerate() {
        let record: FeedbackRecord = result?;
        if !(1..=5).contains(&record.rating) {
            return Err(ImportError::RatingOutOfRange {
                row,
                rating: record.rating,
            });
        }
        records.push(record);
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON report
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct Report<'a> {
    summary: &'a Summary,
    by_service: &'a [(String, f64)],
}

/// Pretty JSON snapshot of the headline metrics plus per-service means.
pub fn report_json(summary: &Summary, by_service: &[(String, f64)]) -> Result<String> {
    serde_json::to_string_pretty(&Report {
        summary,
        by_service,
    })
    .context("serializing JSON report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::summarize;

    fn record(date: &str, service: &str, rating: u8, comment: &str) -> FeedbackRecord {
        FeedbackRecord {
            date: date.parse().unwrap(),
            service: service.to_string(),
            rating,
            comment: comment.to_string(),
        }
    }

    fn sample() -> FeedbackSet {
        FeedbackSet::from_records(vec![
            record("2024-05-01", "Haircut", 4, "Friendly and professional."),
            record("2024-05-03", "Workshop", 5, "Loved the hands-on activities."),
            record("2024-05-02", "Yoga Class", 3, "Could improve punctuality."),
        ])
    }

    #[test]
    fn report_starts_with_the_expected_header() {
        let set = sample();
        let csv = to_csv(&set, &[0, 1, 2]).unwrap();
        assert_eq!(csv.lines().next(), Some("date,service,rating,comment"));
    }

    #[test]
    fn empty_selection_exports_a_header_only_report() {
        let set = sample();
        let csv = to_csv(&set, &[]).unwrap();
        assert_eq!(csv.trim_end(), "date,service,rating,comment");
        assert_eq!(from_csv(&csv).unwrap(), Vec::new());
    }

    #[test]
    fn exported_report_parses_back_to_the_same_records() {
        let set = sample();
        let csv = to_csv(&set, &[0, 1, 2]).unwrap();
        assert_eq!(from_csv(&csv).unwrap(), set.records);
    }

    #[test]
    fn a_filtered_selection_round_trips_in_order() {
        let set = sample();
        let csv = to_csv(&set, &[2, 0]).unwrap();
        let parsed = from_csv(&csv).unwrap();
        assert_eq!(parsed, vec![set.records[2].clone(), set.records[0].clone()]);
    }

    #[test]
    fn comments_with_commas_survive_the_round_trip() {
        let set = FeedbackSet::from_records(vec![record(
            "2024-05-01",
            "Consultation",
            5,
            "Great, would book again, really.",
        )]);
        let csv = to_csv(&set, &[0]).unwrap();
        assert_eq!(from_csv(&csv).unwrap(), set.records);
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let csv = "date,service,rating,comment\n2024-05-01,Haircut,9,bad row\n";
        match from_csv(csv) {
            Err(ImportError::RatingOutOfRange { row: 0, rating: 9 }) => {}
            other => panic!("expected a rating error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_rows_are_rejected() {
        let csv = "date,service,rating,comment\nnot-a-date,Haircut,4,ok\n";
        assert!(matches!(from_csv(csv), Err(ImportError::Csv(_))));
    }

    #[test]
    fn json_report_carries_summary_and_service_means() {
        let set = sample();
        let summary = summarize(&set, &[0, 1, 2]);
        let by_service = vec![("Haircut".to_string(), 4.0)];
        let json = report_json(&summary, &by_service).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["count"], 3);
        assert_eq!(value["by_service"][0][0], "Haircut");
    }
}
