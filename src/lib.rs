//! fanart_api - Typed client for the fanart.tv artwork service
//!
//! This library queries the fanart.tv v3 API for the artwork of movies, TV
//! series and music artists, albums and labels, and for the lists of
//! entities that recently received new artwork.
//!
//! The API is loose about its JSON types: counters arrive as strings or
//! numbers, may be empty, and seasons can be `"all"`. Responses are
//! normalized into plain Rust values while unknown fields are rejected, so
//! changes of the upstream schema surface as errors instead of silently
//! missing data.
//!
//! # Examples
//!
//! ```no_run
//! use fanart_api::{ClientConfig, FanartClient, LatestRequest, QueryType, Request};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> Result<(), fanart_api::FanartError> {
//! let client = FanartClient::new(ClientConfig::from_env());
//! let cancel = CancellationToken::new();
//!
//! // Convenience method on the client
//! let artist = client
//!     .images(QueryType::MusicArtist, "f4a31f0a-51dd-4fa7-986d-3095c40c5ed9", &cancel)
//!     .await?;
//! println!("{} has {} images", artist.name, artist.image_count());
//!
//! // Or build the request value yourself
//! for entry in LatestRequest::new(QueryType::Movie).execute(&client, &cancel).await? {
//!     println!("{} ({})", entry.name, entry.id());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod lenient;
mod models;
mod query_type;
mod request;

// Re-export error types
pub use client::FanartError;
pub use query_type::ParseQueryTypeError;

pub use client::{
    API_KEY_ENV, CLIENT_KEY_ENV, ClientConfig, DEFAULT_BASE_URL, FanartClient, HttpRequest,
    HttpResponse, ReqwestTransport, Transport, TransportError,
};
pub use lenient::secure_url;
pub use models::{AlbumImages, CATEGORY_COUNT, Image, ImagesResult, LatestResult};
pub use query_type::QueryType;
pub use request::{ImagesRequest, LatestRequest, Request};
