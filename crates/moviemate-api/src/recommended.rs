//! Client-side "recommended" composition.
//!
//! There is no recommended endpoint upstream; the list is synthesized
//! from a popular page and a top-rated page. Kept as a pure function so
//! it is testable without a transport.

use std::collections::HashSet;

use moviemate_core::models::Movie;

/// Popular movies below this rating are dropped.
pub const MIN_POPULAR_RATING: f32 = 7.0;

/// Top-rated movies at or below this popularity are dropped.
pub const MIN_TOP_RATED_POPULARITY: f32 = 50.0;

/// Maximum length of the combined list.
pub const MAX_RECOMMENDED: usize = 20;

/// Ranking score: rating dominates, popularity breaks ties.
fn score(movie: &Movie) -> f32 {
    movie.vote_average * 10.0 + movie.popularity / 10.0
}

/// Filter both inputs, union them de-duplicated by id (first occurrence
/// wins), sort by descending score, and truncate.
pub fn combine_recommended(popular: Vec<Movie>, top_rated: Vec<Movie>) -> Vec<Movie> {
    let mut seen = HashSet::new();
    let mut combined: Vec<Movie> = popular
        .into_iter()
        .filter(|m| m.vote_average >= MIN_POPULAR_RATING)
        .chain(
            top_rated
                .into_iter()
                .filter(|m| m.popularity > MIN_TOP_RATED_POPULARITY),
        )
        .filter(|m| seen.insert(m.id))
        .collect();

    combined.sort_by(|a, b| {
        score(b)
            .partial_cmp(&score(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    combined.truncate(MAX_RECOMMENDED);
    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, vote_average: f32, popularity: f32) -> Movie {
        Movie {
            id,
            title: format!("Movie {id}"),
            poster_path: None,
            backdrop_path: None,
            overview: String::new(),
            release_date: "2024-01-01".into(),
            vote_average,
            vote_count: 1000,
            genre_ids: vec![],
            popularity,
            adult: false,
            original_language: "en".into(),
        }
    }

    #[test]
    fn test_thresholds_filter_both_sides() {
        let popular = vec![movie(1, 6.9, 500.0), movie(2, 7.0, 10.0)];
        let top_rated = vec![movie(3, 9.0, 50.0), movie(4, 9.0, 50.1)];

        let result = combine_recommended(popular, top_rated);
        let ids: Vec<u64> = result.iter().map(|m| m.id).collect();
        // 1 fails the rating floor, 3 fails the strict popularity floor.
        assert_eq!(ids, vec![4, 2]);
    }

    #[test]
    fn test_duplicate_keeps_first_occurrence() {
        // Same movie on both pages with diverging stats; the popular-page
        // copy comes first and wins.
        let popular = vec![movie(1, 8.0, 30.0)];
        let top_rated = vec![movie(1, 8.0, 80.0)];

        let result = combine_recommended(popular, top_rated);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].popularity, 30.0);
    }

    #[test]
    fn test_sorted_by_composite_score_descending() {
        let popular = vec![movie(1, 7.0, 0.0), movie(2, 8.0, 0.0)];
        // Equal rating to movie 2, higher popularity: should rank first.
        let top_rated = vec![movie(3, 8.0, 90.0)];

        let result = combine_recommended(popular, top_rated);
        let ids: Vec<u64> = result.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_truncates_to_twenty() {
        let popular: Vec<Movie> = (0..30).map(|i| movie(i, 8.0, 0.0)).collect();
        let result = combine_recommended(popular, vec![]);
        assert_eq!(result.len(), MAX_RECOMMENDED);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(combine_recommended(vec![], vec![]).is_empty());
    }
}
