use serde::{Deserialize, Serialize};

/// One entry of the paged search listing.
///
/// OMDb capitalizes its field names; `imdbID` and `Type` are the two that
/// don't follow PascalCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchItem {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    #[serde(rename = "Type")]
    pub media_type: String,
    /// The literal string `"N/A"` when no artwork exists.
    pub poster: String,
}

/// A decoded page of search results.
#[derive(Debug, Clone)]
pub struct SearchPage {
    pub items: Vec<SearchItem>,
    /// Total matches across all pages, as reported by OMDb.
    pub total_results: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rating {
    pub source: String,
    pub value: String,
}

/// Full record returned by the title lookup endpoint.
///
/// OMDb fills missing values with the string `"N/A"` rather than omitting
/// the field, so most fields are plain strings; options cover fields that
/// are genuinely absent on some record types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TitleRecord {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    #[serde(rename = "Type")]
    pub media_type: String,
    pub poster: String,
    #[serde(default)]
    pub rated: Option<String>,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub runtime: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub writer: Option<String>,
    #[serde(default)]
    pub actors: Option<String>,
    #[serde(default)]
    pub plot: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub box_office: Option<String>,
    #[serde(default)]
    pub ratings: Vec<Rating>,
}
