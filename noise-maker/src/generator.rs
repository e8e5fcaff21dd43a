use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use rand::{
    Rng,
    distr::{Distribution, weighted::WeightedIndex},
    seq::IndexedRandom,
};

use crate::args::LogFormat;

const PATHS: [(&str, u8); 10] = [
    ("/", 10),
    ("/index.html", 20),
    ("/about.html", 5),
    ("/api/items", 30),
    ("/images/logo.png", 15),
    ("/images/banner.JPG", 8),
    ("/photos/cat.gif", 6),
    ("/photos/raw.jpeg", 2),
    ("/static/app.css", 10),
    ("/favicon.ico", 4),
];
const BROWSERS: [(&str, u8); 7] = [
    (
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
        40,
    ),
    (
        "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0",
        20,
    ),
    (
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
        15,
    ),
    ("Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1)", 3),
    ("curl/7.64.1", 5),
    ("Wget/1.21.4", 2),
    ("python-requests/2.31.0", 3),
];
// Weight per hour of day, busiest in the afternoon.
const HOUR_WEIGHTS: [u8; 24] = [
    2, 1, 1, 1, 1, 2, 4, 6, 9, 11, 12, 12, 13, 14, 15, 14, 12, 10, 9, 8, 7, 6, 4, 3,
];
static HOURS: LazyLock<WeightedIndex<u8>> =
    LazyLock::new(|| WeightedIndex::new(HOUR_WEIGHTS).expect("positive hour weights"));
const STATUS: [(u16, u8); 4] = [(200, 80), (304, 10), (404, 8), (500, 2)];
const BAD_TIMESTAMPS: [&str; 3] = ["not-a-date", "2024-13-01 10:00:00", "01/Jun/1995:00:00:59"];

pub fn generate_row<R: Rng + ?Sized>(
    rng: &mut R,
    date: NaiveDate,
    format: LogFormat,
    noise: f64,
) -> Vec<String> {
    let path = PATHS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let browser = BROWSERS.choose_weighted(rng, |(_, w)| *w).unwrap().0;

    if rng.random_bool(noise) {
        return if rng.random_bool(0.5) {
            vec![path.to_string(), timestamp(rng, date)]
        } else {
            let bad = BAD_TIMESTAMPS.choose(rng).unwrap();
            vec![path.to_string(), bad.to_string(), browser.to_string()]
        };
    }

    let mut row = vec![path.to_string(), timestamp(rng, date), browser.to_string()];
    if format == LogFormat::Extended {
        let status = STATUS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
        row.push(status.to_string());
        row.push(rng.random_range(100..20_000u32).to_string());
    }
    row
}

fn timestamp<R: Rng + ?Sized>(rng: &mut R, date: NaiveDate) -> String {
    let hour = HOURS.sample(rng) as u32;
    let time = NaiveTime::from_hms_opt(hour, rng.random_range(0..60), rng.random_range(0..60))
        .expect("hour, minute and second are in range");
    date.and_time(time).format("%Y-%m-%d %H:%M:%S").to_string()
}
