use anyhow::Result;
use chrono::Local;

use feedback_insights::data::export;
use feedback_insights::data::generate::{generate, MockConfig};

/// Writes a sample feedback CSV that the dashboard's Import action can load.
fn main() -> Result<()> {
    env_logger::init();

    let set = generate(&MockConfig::default(), 42, Local::now().date_naive());
    let indices: Vec<usize> = (0..set.len()).collect();
    let csv = export::to_csv(&set, &indices)?;

    let output_path = "feedback_sample.csv";
    std::fs::write(output_path, csv)?;

    println!("Wrote {} feedback records to {output_path}", set.len());
    Ok(())
}
