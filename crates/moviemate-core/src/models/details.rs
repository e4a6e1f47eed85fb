use serde::{Deserialize, Serialize};

use super::movie::Movie;

/// Full movie record from the details endpoint, fetched with videos and
/// credits appended in the same call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub movie: Movie,
    pub budget: u64,
    pub revenue: u64,
    pub runtime: Option<u32>,
    pub status: String,
    pub tagline: String,
    pub homepage: Option<String>,
    pub imdb_id: Option<String>,
    pub genres: Vec<Genre>,
    pub production_companies: Vec<ProductionCompany>,
    pub production_countries: Vec<ProductionCountry>,
    pub videos: VideoList,
    pub credits: Credits,
}

impl MovieDetails {
    /// The first YouTube trailer, if the catalog lists one.
    pub fn trailer(&self) -> Option<&Video> {
        self.videos
            .results
            .iter()
            .find(|v| v.site.eq_ignore_ascii_case("YouTube") && v.kind == "Trailer")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionCompany {
    pub id: u64,
    pub name: String,
    pub logo_path: Option<String>,
    pub origin_country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionCountry {
    pub iso_3166_1: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoList {
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub key: String,
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credits {
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    pub character: String,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    pub job: String,
    pub profile_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAILS_JSON: &str = r#"{
        "id": 27205,
        "title": "Inception",
        "poster_path": "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
        "backdrop_path": "/s3TBrRGB1iav7gFOCNx3H31MoES.jpg",
        "overview": "Cobb, a skilled thief...",
        "release_date": "2010-07-15",
        "vote_average": 8.4,
        "vote_count": 34495,
        "popularity": 83.0,
        "adult": false,
        "original_language": "en",
        "budget": 160000000,
        "revenue": 825532764,
        "runtime": 148,
        "status": "Released",
        "tagline": "Your mind is the scene of the crime.",
        "homepage": "https://www.warnerbros.com/movies/inception",
        "imdb_id": "tt1375666",
        "genres": [
            { "id": 28, "name": "Action" },
            { "id": 878, "name": "Science Fiction" }
        ],
        "production_companies": [
            { "id": 923, "name": "Legendary Pictures", "logo_path": "/8M99Dkt23MjQMTTWukq4m5XsEuo.png", "origin_country": "US" }
        ],
        "production_countries": [
            { "iso_3166_1": "GB", "name": "United Kingdom" },
            { "iso_3166_1": "US", "name": "United States of America" }
        ],
        "videos": {
            "results": [
                { "id": "v1", "key": "teaser123", "name": "Teaser", "site": "YouTube", "type": "Teaser" },
                { "id": "v2", "key": "YoHD9XEInc0", "name": "Official Trailer", "site": "YouTube", "type": "Trailer" },
                { "id": "v3", "key": "vimeo456", "name": "Trailer (mirror)", "site": "Vimeo", "type": "Trailer" }
            ]
        },
        "credits": {
            "cast": [
                { "id": 6193, "name": "Leonardo DiCaprio", "character": "Dom Cobb", "profile_path": "/wo2hJpn04vbtmh0B9utCFdsQhxM.jpg" }
            ],
            "crew": [
                { "id": 525, "name": "Christopher Nolan", "job": "Director", "profile_path": null }
            ]
        }
    }"#;

    #[test]
    fn test_deserialize_details() {
        let details: MovieDetails = serde_json::from_str(DETAILS_JSON).unwrap();
        assert_eq!(details.movie.id, 27205);
        assert_eq!(details.movie.title, "Inception");
        // Details responses carry full genres, not genre_ids.
        assert!(details.movie.genre_ids.is_empty());
        assert_eq!(details.genres.len(), 2);
        assert_eq!(details.runtime, Some(148));
        assert_eq!(details.status, "Released");
        assert_eq!(details.credits.crew[0].job, "Director");
        assert_eq!(details.credits.crew[0].profile_path, None);
    }

    #[test]
    fn test_trailer_skips_non_youtube_and_teasers() {
        let details: MovieDetails = serde_json::from_str(DETAILS_JSON).unwrap();
        let trailer = details.trailer().unwrap();
        assert_eq!(trailer.key, "YoHD9XEInc0");
    }

    #[test]
    fn test_no_trailer() {
        let mut details: MovieDetails = serde_json::from_str(DETAILS_JSON).unwrap();
        details.videos.results.retain(|v| v.kind != "Trailer");
        assert!(details.trailer().is_none());
    }
}
