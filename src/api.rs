//! Fetch client for the artworks collection endpoint
//!
//! `ArtworkSource` is the seam between the table and the network: the TUI only
//! ever sees this trait, so tests drive it with an in-memory source while the
//! binary uses `ArticClient`.

use std::time::Duration;

use log::{debug, info};
use thiserror::Error;

use crate::http::{USER_AGENT, build_agent};
use crate::models::{ApiResponse, ArtworkRecord, PageResult};

/// Default collection endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.artic.edu/api/v1/artworks";

/// Fields requested from the API (everything the table displays)
const FIELDS: &str = "id,title,artist_title,date_start,date_end";

/// Errors raised while fetching a page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("page numbers start at 1")]
    InvalidPage,

    #[error("server returned HTTP {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<ureq::Error> for FetchError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => FetchError::Status(code),
            other => FetchError::Transport(other.to_string()),
        }
    }
}

/// Trait for anything that can serve pages of artworks
pub trait ArtworkSource: Send + Sync {
    /// Name of this source, used in logs and the header bar
    fn name(&self) -> &str;

    /// Fetch a 1-based page holding at most `limit` records
    fn fetch_page(&self, page: u32, limit: u32) -> Result<PageResult, FetchError>;
}

// ============================================================================
// Art Institute of Chicago
// ============================================================================

/// HTTP client for the Art Institute of Chicago API
#[derive(Debug)]
pub struct ArticClient {
    agent: ureq::Agent,
    endpoint: String,
}

impl ArticClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            agent: build_agent(timeout),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the request URL for a page
    pub fn page_url(&self, page: u32, limit: u32) -> String {
        let sep = if self.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}page={}&limit={}&fields={}",
            self.endpoint, sep, page, limit, FIELDS
        )
    }
}

impl ArtworkSource for ArticClient {
    fn name(&self) -> &str {
        "api.artic.edu"
    }

    fn fetch_page(&self, page: u32, limit: u32) -> Result<PageResult, FetchError> {
        if page == 0 {
            return Err(FetchError::InvalidPage);
        }

        let url = self.page_url(page, limit);
        info!("Requesting {url}");

        let mut response = self
            .agent
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .call()?;
        let body = response.body_mut().read_to_string()?;
        debug!("Received {} bytes for page {page}", body.len());

        parse_page(&body, page)
    }
}

/// Decode an API response body into a page of records
pub fn parse_page(body: &str, requested_page: u32) -> Result<PageResult, FetchError> {
    let response: ApiResponse = serde_json::from_str(body)?;

    let page = response
        .pagination
        .current_page
        .filter(|p| *p > 0)
        .unwrap_or(requested_page);
    let records: Vec<ArtworkRecord> = response.data.into_iter().map(Into::into).collect();

    let result = PageResult::new(page, records, response.pagination.total_pages);
    Ok(match response.pagination.total {
        Some(total) => result.with_total_records(total),
        None => result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;

    const SAMPLE: &str = r#"{
        "pagination": {
            "total": 128000,
            "limit": 3,
            "offset": 3,
            "total_pages": 42667,
            "current_page": 2
        },
        "data": [
            {"id": 4, "title": "Nocturne", "artist_title": "James McNeill Whistler", "date_start": 1875, "date_end": 1877},
            {"id": 5, "title": "Untitled", "artist_title": null, "date_start": null, "date_end": null},
            {"id": 6, "title": "The Bedroom", "artist_title": "Vincent van Gogh", "date_start": 1889, "date_end": 1889}
        ]
    }"#;

    /// Serve a single canned HTTP response on a local port
    fn serve_once(status: &str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let status = status.to_string();

        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            loop {
                line.clear();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        });

        format!("http://{addr}/api/v1/artworks")
    }

    #[test]
    fn test_parse_page_sample() {
        let page = parse_page(SAMPLE, 2).unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 42667);
        assert_eq!(page.total_records, Some(128000));
        assert_eq!(page.len(), 3);
        assert_eq!(page.records[0].artist, "James McNeill Whistler");
        assert_eq!(page.records[1].artist, "");
        assert_eq!(page.records[2].date_start, Some(1889));
    }

    #[test]
    fn test_parse_page_falls_back_to_requested_page() {
        let body = r#"{"data": [], "pagination": {"total_pages": 0}}"#;
        let page = parse_page(body, 9).unwrap();
        assert_eq!(page.page, 9);
        assert_eq!(page.total_pages, 1);
        assert!(page.is_empty());
    }

    #[test]
    fn test_parse_page_malformed() {
        let err = parse_page("<html>gateway timeout</html>", 1).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));

        let err = parse_page(r#"{"data": []}"#, 1).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_page_url() {
        let client = ArticClient::new(DEFAULT_ENDPOINT, Duration::from_secs(1));
        assert_eq!(
            client.page_url(3, 10),
            "https://api.artic.edu/api/v1/artworks?page=3&limit=10&fields=id,title,artist_title,date_start,date_end"
        );

        let client = ArticClient::new("http://localhost/artworks?q=cat", Duration::from_secs(1));
        assert!(client.page_url(1, 5).starts_with("http://localhost/artworks?q=cat&page=1"));
    }

    #[test]
    fn test_fetch_page_zero_rejected() {
        let client = ArticClient::new(DEFAULT_ENDPOINT, Duration::from_secs(1));
        assert!(matches!(
            client.fetch_page(0, 10),
            Err(FetchError::InvalidPage)
        ));
    }

    #[test]
    fn test_fetch_page_over_http() {
        let endpoint = serve_once("200 OK", SAMPLE);
        let client = ArticClient::new(endpoint, Duration::from_secs(5));

        let page = client.fetch_page(2, 3).unwrap();
        assert_eq!(page.page, 2);
        assert!(page.len() <= 3);
        assert!(page.total_pages >= 1);
    }

    #[test]
    fn test_fetch_page_http_error_status() {
        let endpoint = serve_once("500 Internal Server Error", "{}");
        let client = ArticClient::new(endpoint, Duration::from_secs(5));

        let err = client.fetch_page(1, 10).unwrap_err();
        assert!(matches!(err, FetchError::Status(500)));
    }
}
