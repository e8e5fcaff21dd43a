use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use derive_getters::Getters;

#[derive(Parser, Debug, Getters)]
#[command(name = "noise-maker")]
#[command(about = "Generate fake CSV access logs for weblog-stats", long_about = None)]
pub struct CliArgs {
    #[arg(long, default_value_t = 10_000)]
    rows: usize,

    /// Rows written between flushes
    #[arg(long, default_value_t = 1_000)]
    batch_size: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Share of malformed rows, 0.0 to 1.0
    #[arg(long, default_value_t = 0.02, value_parser = parse_share)]
    noise: f64,

    /// Day the timestamps fall on (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,

    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    format: LogFormat,

    /// Write to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// path,timestamp,browser
    Plain,
    /// path,timestamp,browser,status,bytes
    Extended,
}

fn parse_share(s: &str) -> Result<f64, String> {
    let share: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&share) {
        Ok(share)
    } else {
        Err(format!("{share} is not between 0.0 and 1.0"))
    }
}
