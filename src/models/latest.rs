//! Entries of the "latest" listings

use crate::lenient::{DecodeError, RawField};
use serde::{Deserialize, Serialize};

/// Latest record as delivered by the API, before normalization.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawLatest {
    id: RawField,
    tmdb_id: RawField,
    imdb_id: RawField,
    name: RawField,
    new_images: RawField,
    total_images: RawField,
}

/// An entity that recently received new artwork.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLatest")]
pub struct LatestResult {
    /// fanart.tv id (TheTVDB or MusicBrainz id for non-movie types)
    #[serde(rename = "id")]
    pub fanart_id: String,
    pub tmdb_id: String,
    pub imdb_id: String,
    pub name: String,
    /// Images added since the previous listing
    pub new_images: i64,
    pub total_images: i64,
}

impl LatestResult {
    /// Returns the canonical id of the entry
    ///
    /// The IMDb id wins over the TMDb id, which wins over the fanart.tv id.
    pub fn id(&self) -> &str {
        [&self.imdb_id, &self.tmdb_id]
            .into_iter()
            .find(|id| !id.is_empty())
            .unwrap_or(&self.fanart_id)
    }
}

impl TryFrom<RawLatest> for LatestResult {
    type Error = DecodeError;

    fn try_from(raw: RawLatest) -> Result<Self, Self::Error> {
        Ok(LatestResult {
            new_images: raw.new_images.parse_number("new_images")?,
            total_images: raw.total_images.parse_number("total_images")?,
            fanart_id: raw.id.into_string(),
            tmdb_id: raw.tmdb_id.into_string(),
            imdb_id: raw.imdb_id.into_string(),
            name: raw.name.into_string(),
        })
    }
}
