use tracing::{debug, info};

use crate::{
    analytics::{BrowserTally, HourlyHits, ImageShare},
    ingest::Fetcher,
    models::LogRecord,
    parser::parse_records,
    report::Diagnostics,
};

/// Fetch, parse, then run every analysis over the same records.
///
/// Stops quietly after a failed fetch or when no rows survive parsing.
pub fn run<F: Fetcher, D: Diagnostics>(url: &str, fetcher: &F, diag: &mut D) {
    diag.notice(format!("Running main with URL = {url}..."));
    info!(url, "starting run");

    let content = match fetcher.fetch(url) {
        Ok(content) => content,
        Err(e) => {
            diag.notice(format!("Error downloading file: {e}"));
            return;
        }
    };
    let records = parse_records(&content, diag);
    if records.is_empty() {
        return;
    }
    info!(records = records.len(), "analysing");

    image_count(&records, diag);
    browser_count(&records, diag);
    hourly_hits(&records, diag);
}

pub fn image_count<D: Diagnostics>(records: &[LogRecord], diag: &mut D) {
    if records.is_empty() {
        diag.notice("No data available to count images.");
        return;
    }
    let share = ImageShare::from_records(records);
    debug!(images = share.images(), total = share.total(), "image share");
    diag.notice(share.to_string());
}

pub fn browser_count<D: Diagnostics>(records: &[LogRecord], diag: &mut D) {
    if records.is_empty() {
        diag.notice("No data available to count browsers.");
        return;
    }
    let tally = BrowserTally::from_records(records);
    debug!(tagged = tally.total(), counts = ?tally.counts(), "browser tally");
    diag.notice(tally.to_string());
}

pub fn hourly_hits<D: Diagnostics>(records: &[LogRecord], diag: &mut D) {
    if records.is_empty() {
        diag.warning("No data available to count hourly hits.");
        return;
    }
    let hits = HourlyHits::from_records(records, diag);
    debug!(parsed = hits.total(), rejected = hits.rejected(), "hourly hits");
    for line in hits.lines() {
        diag.notice(line);
    }
}
