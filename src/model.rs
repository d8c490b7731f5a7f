//! Wire types for the remote artwork catalog
//!
//! These structs mirror the JSON shape returned by the catalog API:
//! a `data` array of artwork records plus a `pagination` object.
//! A page is produced fresh per fetch and superseded by the next one;
//! nothing here is cached.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// The identifier is supplied by the remote source and serves as the
/// display key for row identity. Every descriptive field except `title`
/// may be absent or null in the source data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Externally supplied identifier, used as the row key
    pub id: i64,
    /// Display title
    pub title: String,
    /// Geographic origin
    #[serde(default)]
    pub place_of_origin: Option<String>,
    /// Attribution text
    #[serde(default)]
    pub artist_display: Option<String>,
    /// Free-text annotation
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Start year of the dating range
    #[serde(default)]
    pub date_start: Option<i32>,
    /// End year of the dating range
    #[serde(default)]
    pub date_end: Option<i32>,
}

/// Pagination metadata describing the full remote collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of records in the remote collection
    pub total: u64,
    /// Records per page, as reported by the source
    #[serde(default)]
    pub limit: Option<u32>,
    /// Total number of pages
    #[serde(default)]
    pub total_pages: Option<u32>,
    /// The 1-based page this response covers
    #[serde(default)]
    pub current_page: Option<u32>,
}

/// One fetched page: an ordered record sequence plus collection metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkPage {
    /// Records in source order
    pub data: Vec<Artwork>,
    /// Collection-level pagination metadata
    #[serde(default)]
    pub pagination: Pagination,
}

impl ArtworkPage {
    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if this page carries no records
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_artwork_deserialize_full() {
        let value = json!({
            "id": 129884,
            "title": "Starry Night and the Astronauts",
            "place_of_origin": "Chicago",
            "artist_display": "Alma Thomas\nAmerican, 1891-1978",
            "inscriptions": "signed lower right",
            "date_start": 1972,
            "date_end": 1972
        });

        let artwork: Artwork = serde_json::from_value(value).unwrap();
        assert_eq!(artwork.id, 129884);
        assert_eq!(artwork.title, "Starry Night and the Astronauts");
        assert_eq!(artwork.place_of_origin.as_deref(), Some("Chicago"));
        assert_eq!(artwork.date_start, Some(1972));
        assert_eq!(artwork.date_end, Some(1972));
    }

    #[test]
    fn test_artwork_deserialize_minimal() {
        // Descriptive fields are nullable or absent in the source data
        let value = json!({
            "id": 7,
            "title": "Untitled",
            "place_of_origin": null,
            "inscriptions": null
        });

        let artwork: Artwork = serde_json::from_value(value).unwrap();
        assert_eq!(artwork.id, 7);
        assert!(artwork.place_of_origin.is_none());
        assert!(artwork.artist_display.is_none());
        assert!(artwork.inscriptions.is_none());
        assert!(artwork.date_start.is_none());
        assert!(artwork.date_end.is_none());
    }

    #[test]
    fn test_page_deserialize() {
        let value = json!({
            "pagination": {
                "total": 129000,
                "limit": 12,
                "total_pages": 10750,
                "current_page": 2
            },
            "data": [
                { "id": 1, "title": "First" },
                { "id": 2, "title": "Second" }
            ]
        });

        let page: ArtworkPage = serde_json::from_value(value).unwrap();
        assert_eq!(page.len(), 2);
        assert!(!page.is_empty());
        assert_eq!(page.pagination.total, 129000);
        assert_eq!(page.pagination.current_page, Some(2));
        assert_eq!(page.data[0].title, "First");
    }

    #[test]
    fn test_empty_page() {
        let value = json!({
            "pagination": { "total": 25 },
            "data": []
        });

        let page: ArtworkPage = serde_json::from_value(value).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.len(), 0);
        assert_eq!(page.pagination.total, 25);
    }
}
