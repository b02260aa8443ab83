//! Data models for artworks and fetched pages

use serde::{Deserialize, Serialize};

/// Unique identifier of an artwork in the collection
pub type ArtworkId = u64;

/// A single artwork row as displayed in the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    pub id: ArtworkId,
    pub title: String,
    pub artist: String,
    pub date_start: Option<i32>,
    pub date_end: Option<i32>,
}

impl ArtworkRecord {
    pub fn new(id: ArtworkId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: String::new(),
            date_start: None,
            date_end: None,
        }
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = artist.into();
        self
    }

    pub fn with_dates(mut self, start: Option<i32>, end: Option<i32>) -> Self {
        self.date_start = start;
        self.date_end = end;
        self
    }
}

/// One server-side page of artworks
///
/// A new `PageResult` replaces the previous one entirely; pages are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// 1-based page number these records belong to
    pub page: u32,
    pub records: Vec<ArtworkRecord>,
    /// Total number of pages in the collection (always >= 1)
    pub total_pages: u32,
    /// Total number of records, when the API reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_records: Option<u64>,
}

impl PageResult {
    pub fn new(page: u32, records: Vec<ArtworkRecord>, total_pages: u32) -> Self {
        Self {
            page,
            records,
            total_pages: total_pages.max(1),
            total_records: None,
        }
    }

    pub fn with_total_records(mut self, total: u64) -> Self {
        self.total_records = Some(total);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ============================================================================
// Wire format
// ============================================================================

/// Raw response body of `GET /artworks`
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub data: Vec<ApiArtwork>,
    pub pagination: ApiPagination,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiArtwork {
    pub id: ArtworkId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist_title: Option<String>,
    #[serde(default)]
    pub date_start: Option<i32>,
    #[serde(default)]
    pub date_end: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiPagination {
    #[serde(default)]
    pub current_page: Option<u32>,
    pub total_pages: u32,
    #[serde(default)]
    pub total: Option<u64>,
}

impl From<ApiArtwork> for ArtworkRecord {
    fn from(raw: ApiArtwork) -> Self {
        Self {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            artist: raw.artist_title.unwrap_or_default(),
            date_start: raw.date_start,
            date_end: raw.date_end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_result_total_pages_at_least_one() {
        let page = PageResult::new(1, Vec::new(), 0);
        assert_eq!(page.total_pages, 1);
        assert!(page.is_empty());
    }

    #[test]
    fn test_null_title_and_artist_become_empty() {
        let raw: ApiArtwork = serde_json::from_str(
            r#"{"id": 7, "title": null, "artist_title": null, "date_start": null, "date_end": 1900}"#,
        )
        .unwrap();
        let record = ArtworkRecord::from(raw);
        assert_eq!(record.id, 7);
        assert!(record.title.is_empty());
        assert!(record.artist.is_empty());
        assert_eq!(record.date_start, None);
        assert_eq!(record.date_end, Some(1900));
    }
}
