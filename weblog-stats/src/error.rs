use std::{path::PathBuf, string::FromUtf8Error};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unknown url type: '{0}'")]
    UnsupportedScheme(String),

    #[error("file URL does not name a local path: '{0}'")]
    NotALocalPath(String),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("content is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),
}

/// A timestamp that does not follow `%Y-%m-%d %H:%M:%S`.
#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("Error parsing datetime '{raw}': {source}")]
    Format {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Error parsing datetime '{raw}': year must be four digits")]
    Year { raw: String },

    #[error("Error parsing datetime '{raw}': second must be in 0..59")]
    LeapSecond { raw: String },
}

impl TimestampError {
    pub fn raw(&self) -> &str {
        match self {
            Self::Format { raw, .. } | Self::Year { raw } | Self::LeapSecond { raw } => raw,
        }
    }
}

#[derive(Debug, Error)]
pub enum CsvError {
    #[error(transparent)]
    Reader(#[from] csv::Error),

    #[error("field larger than field limit ({limit})")]
    FieldTooLarge { limit: usize },
}
