use serde::{Deserialize, Serialize};

/// A movie summary as returned by the catalog's list endpoints.
///
/// Field names match the TMDB wire format. Immutable once fetched; the
/// only copy that outlives a screen is the snapshot a favorite keeps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub overview: String,
    pub release_date: String,
    pub vote_average: f32,
    pub vote_count: u32,
    // List endpoints send genre_ids; the details endpoint sends full
    // genre objects instead, so this defaults to empty there.
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    pub popularity: f32,
    pub adult: bool,
    pub original_language: String,
}

/// One page of a paginated list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoviePage {
    pub page: u32,
    pub results: Vec<Movie>,
    pub total_pages: u32,
    pub total_results: u32,
}

impl MoviePage {
    /// A page with no results and nothing further to request.
    pub fn empty() -> Self {
        Self {
            page: 1,
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }

    /// Whether a further page may be requested.
    ///
    /// The client itself never gates on this; pagination-aware callers do.
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}
