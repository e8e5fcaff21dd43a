use std::{str::FromStr, sync::LazyLock};

use chrono::{NaiveDateTime, Timelike};
use derive_more::{AsRef, Debug, Display};
use regex::Regex;

use crate::error::TimestampError;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static BROWSER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("Firefox|Chrome|Safari|MSIE").expect("valid browser pattern"));

/// Hour of day, 0 through 23.
#[derive(Debug, Display, AsRef, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("{_0:02}")]
pub struct Hour(u32);

impl From<NaiveDateTime> for Hour {
    fn from(value: NaiveDateTime) -> Self {
        Self(value.hour())
    }
}

impl FromStr for Hour {
    type Err = TimestampError;

    /// `%Y` takes exactly four digits here and `:60` seconds are refused,
    /// both stricter than chrono's own parsing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = || s.to_string();
        let year_ok = s
            .as_bytes()
            .get(..5)
            .is_some_and(|head| head[..4].iter().all(u8::is_ascii_digit) && head[4] == b'-');
        if !year_ok {
            return Err(TimestampError::Year { raw: raw() });
        }
        let parsed = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
            .map_err(|source| TimestampError::Format { raw: raw(), source })?;
        if parsed.nanosecond() >= 1_000_000_000 {
            return Err(TimestampError::LeapSecond { raw: raw() });
        }
        Ok(Self::from(parsed))
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserTag {
    #[display("Firefox")]
    Firefox,
    #[display("Chrome")]
    Chrome,
    #[display("Safari")]
    Safari,
    #[display("MSIE")]
    Msie,
}

impl BrowserTag {
    /// Leftmost recognised token in a user-agent field. Matching is case-sensitive.
    pub fn detect(field: &str) -> Option<Self> {
        BROWSER_TOKEN.find(field)?.as_str().parse().ok()
    }
}

impl FromStr for BrowserTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Firefox" => Ok(Self::Firefox),
            "Chrome" => Ok(Self::Chrome),
            "Safari" => Ok(Self::Safari),
            "MSIE" => Ok(Self::Msie),
            other => Err(format!("unrecognised browser token: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Gif,
    Png,
    Other,
}

impl ImageKind {
    pub fn classify(path: &str) -> Self {
        // A single trailing newline is tolerated; any other line break disqualifies.
        let path = path.strip_suffix('\n').unwrap_or(path);
        if path.contains('\n') {
            return Self::Other;
        }
        let Some((_, ext)) = path.rsplit_once('.') else {
            return Self::Other;
        };
        let ext: String = ext.chars().map(fold_case).collect();
        match ext.as_str() {
            "jpg" => Self::Jpeg,
            "gif" => Self::Gif,
            "png" => Self::Png,
            _ => Self::Other,
        }
    }

    pub fn is_image(self) -> bool {
        self != Self::Other
    }
}

/// ASCII lowercase, plus the dotless and dotted capital I that fold onto `i`.
fn fold_case(c: char) -> char {
    match c {
        '\u{131}' | '\u{130}' => 'i',
        c => c.to_ascii_lowercase(),
    }
}
