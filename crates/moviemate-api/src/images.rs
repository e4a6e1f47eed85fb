//! Image URL construction.
//!
//! The catalog returns relative artwork paths; screens compose full URLs
//! from the configured image base plus a size token. Nothing here does
//! I/O — the image CDN is fetched by the rendering layer.

/// Artwork category. Each category has its own size-token family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Poster,
    Backdrop,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    Small,
    Medium,
    Large,
    Original,
}

impl ImageKind {
    /// The CDN size token for this kind at the given size.
    pub fn token(self, size: ImageSize) -> &'static str {
        match (self, size) {
            (_, ImageSize::Original) => "original",
            (Self::Poster, ImageSize::Small) => "w185",
            (Self::Poster, ImageSize::Medium) => "w342",
            (Self::Poster, ImageSize::Large) => "w500",
            (Self::Backdrop, ImageSize::Small) => "w300",
            (Self::Backdrop, ImageSize::Medium) => "w780",
            (Self::Backdrop, ImageSize::Large) => "w1280",
            (Self::Profile, ImageSize::Small) => "w45",
            (Self::Profile, ImageSize::Medium) => "w185",
            (Self::Profile, ImageSize::Large) => "h632",
        }
    }
}

/// Build a full image URL. `path` arrives from the catalog with a leading
/// slash, e.g. `/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg`.
pub fn image_url(base: &str, kind: ImageKind, size: ImageSize, path: &str) -> String {
    format!("{}/{}{path}", base.trim_end_matches('/'), kind.token(size))
}
