//! Catalog access for moviemate: the TMDB client, image URL helpers, and
//! the locally synthesized "recommended" list.

pub mod images;
pub mod recommended;
pub mod tmdb;

pub use tmdb::{TmdbClient, TmdbError};
