//! Media entity kinds known to the fanart.tv API
//!
//! Every query targets exactly one kind of entity. The kind decides which
//! path segment of the API is addressed.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string does not name a known query type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown query type: {0}")]
pub struct ParseQueryTypeError(pub String);

/// The kind of media entity a request is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    /// A movie, addressed by IMDb or TMDb id
    Movie,
    /// A TV series, addressed by TheTVDB id
    Series,
    /// A music artist, addressed by MusicBrainz id
    MusicArtist,
    /// A music album, addressed by MusicBrainz release group id
    MusicAlbum,
    /// A music label, addressed by MusicBrainz label id
    MusicLabel,
}

impl QueryType {
    /// All query types in declaration order
    pub const ALL: [QueryType; 5] = [
        QueryType::Movie,
        QueryType::Series,
        QueryType::MusicArtist,
        QueryType::MusicAlbum,
        QueryType::MusicLabel,
    ];

    /// Human readable name of the query type
    pub fn name(self) -> &'static str {
        match self {
            QueryType::Movie => "movie",
            QueryType::Series => "series",
            QueryType::MusicArtist => "artist",
            QueryType::MusicAlbum => "album",
            QueryType::MusicLabel => "label",
        }
    }

    /// Path segment of the API endpoint serving this query type
    pub fn api_type(self) -> &'static str {
        match self {
            QueryType::Movie => "movies",
            QueryType::Series => "tv",
            QueryType::MusicArtist => "music",
            QueryType::MusicAlbum => "music/albums",
            QueryType::MusicLabel => "music/labels",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QueryType {
    type Err = ParseQueryTypeError;

    /// Accepts either the display name or the API path segment
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        QueryType::ALL
            .into_iter()
            .find(|t| t.name() == needle || t.api_type() == needle)
            .ok_or_else(|| ParseQueryTypeError(s.to_string()))
    }
}
