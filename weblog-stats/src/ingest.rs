use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use crate::error::FetchError;

pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetches over HTTP(S) with the client's default settings, or reads `file://` URLs from disk.
#[derive(Debug, Default)]
pub struct UrlFetcher {
    client: Client,
}

impl Fetcher for UrlFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let bytes = match parsed.scheme() {
            "http" | "https" => {
                let response = self.client.get(parsed).send()?.error_for_status()?;
                debug!(status = %response.status(), "response received");
                response.bytes()?.to_vec()
            }
            "file" => {
                let path = parsed
                    .to_file_path()
                    .map_err(|()| FetchError::NotALocalPath(url.to_string()))?;
                std::fs::read(&path).map_err(|source| FetchError::File { path, source })?
            }
            _ => return Err(FetchError::UnsupportedScheme(url.to_string())),
        };
        Ok(String::from_utf8(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;
    use std::io::Write;

    fn file_url(path: &std::path::Path) -> String {
        Url::from_file_path(path).unwrap().to_string()
    }

    #[test]
    fn reads_file_urls() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"/a.png,2024-01-01 10:00:00,Chrome/1.0\n").unwrap();
        let body = UrlFetcher::default().fetch(&file_url(file.path())).unwrap();
        assert_that!(body).is_equal_to("/a.png,2024-01-01 10:00:00,Chrome/1.0\n".to_string());
    }

    #[test]
    fn rejects_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'/', 0xff, 0xfe, b'\n']).unwrap();
        let err = UrlFetcher::default()
            .fetch(&file_url(file.path()))
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)), "{err:?}");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = UrlFetcher::default()
            .fetch(&file_url(&dir.path().join("absent.csv")))
            .unwrap_err();
        assert!(matches!(err, FetchError::File { .. }), "{err:?}");
    }

    #[test]
    fn rejects_relative_urls() {
        let err = UrlFetcher::default().fetch("logs/access.csv").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }), "{err:?}");
    }

    #[test]
    fn rejects_unknown_schemes() {
        let err = UrlFetcher::default()
            .fetch("gopher://example.com/log.csv")
            .unwrap_err();
        assert!(matches!(err, FetchError::UnsupportedScheme(_)), "{err:?}");
    }
}
