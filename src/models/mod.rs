//! Result models of the fanart.tv API
//!
//! All models are plain values produced fresh for every response. Decoding
//! is strict: any field the models do not know about fails the whole
//! response, while the inconsistently typed counters are normalized through
//! the lenient field decoder.

mod image;
mod images;
mod latest;

pub use image::Image;
pub use images::{AlbumImages, CATEGORY_COUNT, ImagesResult};
pub use latest::LatestResult;
