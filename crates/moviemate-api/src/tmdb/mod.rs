pub mod client;
pub mod error;

pub use client::TmdbClient;
pub use error::TmdbError;
