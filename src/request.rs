//! Request values for the two query families
//!
//! A request only knows which endpoint it addresses and which model the
//! response decodes into. Sending it is the job of [`FanartClient`].

use crate::client::{FanartClient, FanartError, Transport};
use crate::models::{ImagesResult, LatestResult};
use crate::query_type::QueryType;
use serde::de::DeserializeOwned;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Trait for requests that can be executed against a [`FanartClient`]
pub trait Request {
    /// Model the response body decodes into
    type Output: DeserializeOwned + Send;

    /// Endpoint path relative to the API base URL
    fn path(&self) -> String;

    /// Sends the request through `client`
    fn execute<T: Transport>(
        &self,
        client: &FanartClient<T>,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<Self::Output, FanartError>> + Send {
        let path = self.path();
        async move { client.execute::<Self::Output>(&path, cancel).await }
    }
}

/// Request for all artwork of a single entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagesRequest {
    pub query_type: QueryType,
    /// IMDb, TMDb, TheTVDB or MusicBrainz id, passed through as is
    pub query: String,
}

impl ImagesRequest {
    pub fn new(query_type: QueryType, query: impl Into<String>) -> Self {
        Self {
            query_type,
            query: query.into(),
        }
    }
}

impl Request for ImagesRequest {
    type Output = ImagesResult;

    fn path(&self) -> String {
        format!("{}/{}", self.query_type.api_type(), self.query)
    }
}

/// Request for the entities of a type that recently received artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatestRequest {
    pub query_type: QueryType,
}

impl LatestRequest {
    pub fn new(query_type: QueryType) -> Self {
        Self { query_type }
    }
}

impl Request for LatestRequest {
    type Output = Vec<LatestResult>;

    fn path(&self) -> String {
        format!("{}/latest", self.query_type.api_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_path() {
        assert_eq!(
            ImagesRequest::new(QueryType::Movie, "tt0137523").path(),
            "movies/tt0137523"
        );
        assert_eq!(ImagesRequest::new(QueryType::Series, "75682").path(), "tv/75682");
        assert_eq!(
            ImagesRequest::new(QueryType::MusicArtist, "f4a31f0a-51dd-4fa7-986d-3095c40c5ed9")
                .path(),
            "music/f4a31f0a-51dd-4fa7-986d-3095c40c5ed9"
        );
    }

    #[test]
    fn test_latest_path() {
        let paths: Vec<_> = QueryType::ALL
            .into_iter()
            .map(|t| LatestRequest::new(t).path())
            .collect();
        assert_eq!(
            paths,
            vec![
                "movies/latest",
                "tv/latest",
                "music/latest",
                "music/albums/latest",
                "music/labels/latest",
            ]
        );
    }
}
