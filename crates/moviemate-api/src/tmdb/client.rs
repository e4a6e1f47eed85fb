use moviemate_core::config::TmdbConfig;
use moviemate_core::models::{Genre, MovieDetails, MoviePage};
use reqwest::Client;
use serde::Deserialize;

use super::error::TmdbError;
use crate::recommended::combine_recommended;

/// TMDB v3 API client.
///
/// Holds no result state: every call re-fetches, and failures surface to
/// the caller with no retry.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    base_url: String,
    api_token: String,
    http: Client,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            api_token: config.api_token.clone(),
            http: Client::new(),
        }
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_token)
    }

    /// Check the HTTP response for errors and return the body text on failure.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, TmdbError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "TMDB API error");
            Err(TmdbError::Api {
                status,
                message: body,
            })
        }
    }

    async fn get_page(&self, path: &str, page: u32) -> Result<MoviePage, TmdbError> {
        let resp = self
            .http
            .get(format!("{}{path}", self.base_url))
            .header("Authorization", self.auth_header())
            .query(&[("page", page.to_string())])
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        resp.json().await.map_err(|e| TmdbError::Parse(e.to_string()))
    }

    /// Popular movies, one page at a time (1-based).
    pub async fn popular(&self, page: u32) -> Result<MoviePage, TmdbError> {
        self.get_page("/movie/popular", page).await
    }

    /// Movies currently in theaters.
    pub async fn now_playing(&self, page: u32) -> Result<MoviePage, TmdbError> {
        self.get_page("/movie/now_playing", page).await
    }

    /// Top-rated movies.
    pub async fn top_rated(&self, page: u32) -> Result<MoviePage, TmdbError> {
        self.get_page("/movie/top_rated", page).await
    }

    /// Upcoming releases.
    pub async fn upcoming(&self, page: u32) -> Result<MoviePage, TmdbError> {
        self.get_page("/movie/upcoming", page).await
    }

    /// Full details for one movie, with videos and credits appended so a
    /// detail screen needs a single round trip.
    pub async fn movie_details(&self, id: u64) -> Result<MovieDetails, TmdbError> {
        let resp = self
            .http
            .get(format!("{}/movie/{id}", self.base_url))
            .header("Authorization", self.auth_header())
            .query(&[("append_to_response", "videos,credits")])
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        resp.json().await.map_err(|e| TmdbError::Parse(e.to_string()))
    }

    /// Title search. An empty or whitespace-only query short-circuits to
    /// an empty page without a network call.
    pub async fn search(&self, query: &str, page: u32) -> Result<MoviePage, TmdbError> {
        if query.trim().is_empty() {
            return Ok(MoviePage::empty());
        }

        let page_param = page.to_string();
        let resp = self
            .http
            .get(format!("{}/search/movie", self.base_url))
            .header("Authorization", self.auth_header())
            .query(&[("query", query), ("page", page_param.as_str())])
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        resp.json().await.map_err(|e| TmdbError::Parse(e.to_string()))
    }

    /// The static genre id-to-name table.
    pub async fn genres(&self) -> Result<Vec<Genre>, TmdbError> {
        #[derive(Deserialize)]
        struct GenreListResponse {
            genres: Vec<Genre>,
        }

        let resp = self
            .http
            .get(format!("{}/genre/movie/list", self.base_url))
            .header("Authorization", self.auth_header())
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let body: GenreListResponse = resp
            .json()
            .await
            .map_err(|e| TmdbError::Parse(e.to_string()))?;
        Ok(body.genres)
    }

    /// Locally synthesized "recommended" list: one page each of popular
    /// and top-rated, fetched concurrently, then combined client-side.
    /// There is no such upstream endpoint, so the result always reports a
    /// single page.
    pub async fn recommended(&self, page: u32) -> Result<MoviePage, TmdbError> {
        let (popular, top_rated) = tokio::try_join!(self.popular(page), self.top_rated(page))?;
        let results = combine_recommended(popular.results, top_rated.results);
        Ok(MoviePage {
            page: 1,
            total_pages: 1,
            total_results: results.len() as u32,
            results,
        })
    }
}
