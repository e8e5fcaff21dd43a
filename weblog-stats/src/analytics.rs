use std::{cmp::Reverse, fmt};

use crate::{
    error::TimestampError,
    invariants::{BrowserTag, Hour, ImageKind},
    models::LogRecord,
    report::Diagnostics,
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImageShare {
    images: usize,
    total: usize,
}

impl ImageShare {
    pub fn from_records(records: &[LogRecord]) -> Self {
        let mut share = Self::default();
        for record in records {
            share.record_path(&record.path);
        }
        share
    }

    pub fn record_path(&mut self, path: &str) {
        self.total += 1;
        if ImageKind::classify(path).is_image() {
            self.images += 1;
        }
    }

    pub fn images(&self) -> usize {
        self.images
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.images as f64 / self.total as f64) * 100.0
    }
}

impl fmt::Display for ImageShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Image requests account for {:.2}% of all requests.",
            self.percent()
        )
    }
}

/// Browser hit counts, kept in the order each tag was first seen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BrowserTally {
    counts: Vec<(BrowserTag, usize)>,
}

impl BrowserTally {
    pub fn from_records(records: &[LogRecord]) -> Self {
        let mut tally = Self::default();
        for record in records {
            tally.record_browser(&record.browser);
        }
        tally
    }

    pub fn record_browser(&mut self, field: &str) {
        let Some(tag) = BrowserTag::detect(field) else {
            return;
        };
        match self.counts.iter_mut().find(|(t, _)| *t == tag) {
            Some((_, n)) => *n += 1,
            None => self.counts.push((tag, 1)),
        }
    }

    pub fn counts(&self) -> &[(BrowserTag, usize)] {
        &self.counts
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    /// Highest count wins; on a tie the tag seen first is kept.
    pub fn most_popular(&self) -> Option<(BrowserTag, usize)> {
        self.counts.iter().fold(None, |best, &(tag, n)| match best {
            Some((_, top)) if top >= n => best,
            _ => Some((tag, n)),
        })
    }
}

impl fmt::Display for BrowserTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.most_popular() {
            Some((tag, n)) => write!(f, "The most popular browser is {tag} with {n} hits."),
            None => write!(f, "No recognizable browser data found."),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HourlyHits {
    counts: Vec<(Hour, usize)>,
    rejected: usize,
}

impl HourlyHits {
    /// Unparseable timestamps are reported as warnings and left out.
    pub fn from_records<D: Diagnostics>(records: &[LogRecord], diag: &mut D) -> Self {
        let mut hits = Self::default();
        for record in records {
            if let Err(e) = hits.record_timestamp(&record.timestamp) {
                diag.warning(e.to_string());
            }
        }
        hits
    }

    pub fn record_timestamp(&mut self, raw: &str) -> Result<Hour, TimestampError> {
        let hour = raw.parse::<Hour>().inspect_err(|_| self.rejected += 1)?;
        match self.counts.iter_mut().find(|(h, _)| *h == hour) {
            Some((_, n)) => *n += 1,
            None => self.counts.push((hour, 1)),
        }
        Ok(hour)
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    /// Busiest hours first. Equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<(Hour, usize)> {
        let mut ranked = self.counts.clone();
        ranked.sort_by_key(|(_, n)| Reverse(*n));
        ranked
    }

    pub fn lines(&self) -> impl Iterator<Item = String> {
        self.ranked()
            .into_iter()
            .map(|(hour, n)| format!("Hour {hour} has {n} hits."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Transcript;
    use asserting::prelude::*;

    fn record(path: &str, timestamp: &str, browser: &str) -> LogRecord {
        LogRecord {
            path: path.into(),
            timestamp: timestamp.into(),
            browser: browser.into(),
        }
    }

    fn sample() -> Vec<LogRecord> {
        vec![
            record("/a.jpg", "2024-01-01 10:00:00", "Mozilla Firefox/1.0"),
            record("/b.html", "2024-01-01 10:00:00", "Chrome/1.0"),
            record("/c.GIF", "2024-01-01 11:15:00", "Chrome/2.0"),
            record("/d.css", "not-a-date", "curl/7.64"),
            record("/e.png", "2024-01-01 23:59:59", "Mozilla/4.0 (MSIE 6.0)"),
        ]
    }

    #[test]
    fn image_share_counts_matching_paths() {
        let share = ImageShare::from_records(&sample());
        assert_that!(share.images()).is_equal_to(3);
        assert_that!(share.total()).is_equal_to(5);
        assert_eq!(
            share.to_string(),
            "Image requests account for 60.00% of all requests."
        );
    }

    #[test]
    fn image_share_of_nothing_is_zero() {
        let share = ImageShare::from_records(&[]);
        assert_eq!(share.percent(), 0.0);
        assert_eq!(
            share.to_string(),
            "Image requests account for 0.00% of all requests."
        );
    }

    #[test]
    fn image_share_stays_within_bounds() {
        let mut share = ImageShare::default();
        for i in 0..37 {
            share.record_path(if i % 3 == 0 { "/x.png" } else { "/x.txt" });
            let p = share.percent();
            assert!((0.0..=100.0).contains(&p), "{p}");
        }
        assert_eq!(share.to_string(), "Image requests account for 35.14% of all requests.");
    }

    #[test]
    fn browser_tally_reports_the_leader() {
        let tally = BrowserTally::from_records(&sample());
        assert_that!(tally.most_popular()).is_equal_to(Some((BrowserTag::Chrome, 2)));
        assert_eq!(
            tally.to_string(),
            "The most popular browser is Chrome with 2 hits."
        );
    }

    #[test]
    fn browser_tally_skips_unrecognised_clients() {
        let records = sample();
        let tally = BrowserTally::from_records(&records);
        let recognised = records
            .iter()
            .filter(|r| BrowserTag::detect(&r.browser).is_some())
            .count();
        assert_that!(tally.total()).is_equal_to(recognised);
        assert!(tally.total() <= records.len());
        assert_that!(tally.counts().to_vec()).is_equal_to(vec![
            (BrowserTag::Firefox, 1),
            (BrowserTag::Chrome, 2),
            (BrowserTag::Msie, 1),
        ]);
    }

    #[test]
    fn browser_ties_go_to_first_seen() {
        let mut tally = BrowserTally::default();
        for field in ["Safari/1", "MSIE 7", "MSIE 8", "Safari/2", "Firefox/3"] {
            tally.record_browser(field);
        }
        assert_that!(tally.most_popular()).is_equal_to(Some((BrowserTag::Safari, 2)));
    }

    #[test]
    fn browser_tally_without_matches() {
        let mut tally = BrowserTally::default();
        tally.record_browser("curl/7.64");
        tally.record_browser("Wget/1.21");
        assert_that!(tally.most_popular()).is_none();
        assert_eq!(tally.to_string(), "No recognizable browser data found.");
    }

    #[test]
    fn hourly_hits_warn_and_skip_bad_timestamps() {
        let mut t = Transcript::default();
        let hits = HourlyHits::from_records(&sample(), &mut t);
        assert_that!(hits.total()).is_equal_to(4);
        assert_that!(hits.rejected()).is_equal_to(1);
        let warnings = t.warnings();
        assert_that!(warnings.len()).is_equal_to(1);
        assert!(warnings[0].starts_with("Error parsing datetime 'not-a-date': "));
        assert_that!(t.notices()).is_empty();
    }

    #[test]
    fn hourly_hits_rank_by_count_then_first_seen() {
        let mut hits = HourlyHits::default();
        for ts in [
            "2024-01-01 05:00:00",
            "2024-01-01 22:00:00",
            "2024-01-02 22:30:00",
            "2024-01-01 03:00:00",
            "2024-01-01 05:10:00",
            "2024-01-01 09:00:00",
        ] {
            hits.record_timestamp(ts).unwrap();
        }
        let ranked: Vec<_> = hits
            .ranked()
            .into_iter()
            .map(|(h, n)| (h.to_string(), n))
            .collect();
        assert_that!(ranked).is_equal_to(vec![
            ("05".to_string(), 2),
            ("22".to_string(), 2),
            ("03".to_string(), 1),
            ("09".to_string(), 1),
        ]);
        let lines: Vec<_> = hits.lines().collect();
        assert_eq!(lines[0], "Hour 05 has 2 hits.");
        assert_eq!(lines[3], "Hour 09 has 1 hits.");
    }

    #[test]
    fn hourly_ranking_is_non_increasing() {
        let mut hits = HourlyHits::default();
        for i in 0..200u32 {
            let ts = format!("2024-03-{:02} {:02}:{:02}:00", 1 + i % 28, (i * i) % 24, i % 60);
            hits.record_timestamp(&ts).unwrap();
        }
        let ranked = hits.ranked();
        assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
        assert_that!(ranked.iter().map(|(_, n)| n).sum::<usize>()).is_equal_to(200);
    }
}
