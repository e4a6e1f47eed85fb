pub mod details;
pub mod movie;

pub use details::*;
pub use movie::*;
