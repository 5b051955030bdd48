//! Artwork listings for a single entity

use super::Image;
use crate::lenient;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Number of artwork categories an images response can carry
pub const CATEGORY_COUNT: usize = 28;

/// Album artwork keyed by category (`"albumcover"`, `"cdart"`, ...)
pub type AlbumImages = BTreeMap<String, Vec<Image>>;

/// Response of an images query.
///
/// Which categories are filled depends on the query type: movies carry the
/// `movie*` and `hdmovie*` categories, series the `tv*`, `season*` and
/// `show*` ones, and music queries the artist, label and album artwork.
/// Unknown keys make decoding fail so that new upstream categories are
/// noticed instead of silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesResult {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    /// fanart.tv internal id
    #[serde(rename = "id", deserialize_with = "lenient::string")]
    pub fanart_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub imdb_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub tmdb_id: String,
    #[serde(rename = "thetvdb_id", deserialize_with = "lenient::string")]
    pub tvdb_id: String,
    /// MusicBrainz id
    #[serde(rename = "mbid_id", deserialize_with = "lenient::string")]
    pub mbid: String,
    #[serde(
        rename = "clearart",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub clear_art: Vec<Image>,
    #[serde(
        rename = "clearlogo",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub clear_logo: Vec<Image>,
    #[serde(
        rename = "hdclearart",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub hd_clear_art: Vec<Image>,
    #[serde(
        rename = "hdlogo",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub hd_logo: Vec<Image>,
    #[serde(
        rename = "hdmovieclearart",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub hd_movie_clear_art: Vec<Image>,
    #[serde(
        rename = "hdmovielogo",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub hd_movie_logo: Vec<Image>,
    #[serde(
        rename = "hdmusiclogo",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub hd_music_logo: Vec<Image>,
    #[serde(
        rename = "hdtvlogo",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub hd_tv_logo: Vec<Image>,
    #[serde(
        rename = "movieart",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub movie_art: Vec<Image>,
    #[serde(
        rename = "characterart",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub character_art: Vec<Image>,
    #[serde(
        rename = "moviebackground",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub movie_background: Vec<Image>,
    #[serde(
        rename = "moviebanner",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub movie_banner: Vec<Image>,
    #[serde(
        rename = "moviedisc",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub movie_disc: Vec<Image>,
    #[serde(
        rename = "movielogo",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub movie_logo: Vec<Image>,
    #[serde(
        rename = "movieposter",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub movie_poster: Vec<Image>,
    #[serde(
        rename = "moviethumb",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub movie_thumb: Vec<Image>,
    #[serde(
        rename = "artistthumb",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub artist_thumb: Vec<Image>,
    #[serde(
        rename = "seasonbanner",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub season_banner: Vec<Image>,
    #[serde(
        rename = "seasonposter",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub season_poster: Vec<Image>,
    #[serde(
        rename = "seasonthumb",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub season_thumb: Vec<Image>,
    #[serde(
        rename = "showbackground",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub show_background: Vec<Image>,
    #[serde(
        rename = "artistbackground",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub artist_background: Vec<Image>,
    #[serde(
        rename = "tvbanner",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tv_banner: Vec<Image>,
    #[serde(
        rename = "tvposter",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tv_poster: Vec<Image>,
    #[serde(
        rename = "tvthumb",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tv_thumb: Vec<Image>,
    #[serde(
        rename = "musiclogo",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub music_logo: Vec<Image>,
    #[serde(
        rename = "musicbanner",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub music_banner: Vec<Image>,
    #[serde(
        rename = "musiclabel",
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub music_label: Vec<Image>,
    /// Album artwork keyed by MusicBrainz release group id
    #[serde(deserialize_with = "albums", skip_serializing_if = "BTreeMap::is_empty")]
    pub albums: BTreeMap<String, AlbumImages>,
}

/// Decodes the album map, treating `null` albums and categories as empty
fn albums<'de, D>(deserializer: D) -> Result<BTreeMap<String, AlbumImages>, D::Error>
where
    D: Deserializer<'de>,
{
    type RawAlbums = BTreeMap<String, Option<BTreeMap<String, Option<Vec<Image>>>>>;

    let albums: RawAlbums = lenient::null_as_default(deserializer)?;
    Ok(albums
        .into_iter()
        .map(|(album_id, categories)| {
            let categories = categories
                .unwrap_or_default()
                .into_iter()
                .map(|(category, images)| (category, images.unwrap_or_default()))
                .collect();
            (album_id, categories)
        })
        .collect())
}

impl ImagesResult {
    /// Returns the canonical id of the queried entity
    ///
    /// Precedence is MusicBrainz, TheTVDB, IMDb, TMDb and finally the
    /// fanart.tv id. The first non-empty one wins.
    pub fn id(&self) -> &str {
        [&self.mbid, &self.tvdb_id, &self.imdb_id, &self.tmdb_id]
            .into_iter()
            .find(|id| !id.is_empty())
            .unwrap_or(&self.fanart_id)
    }

    /// All artwork categories paired with their upstream key
    pub fn categories(&self) -> [(&'static str, &[Image]); CATEGORY_COUNT] {
        [
            ("clearart", self.clear_art.as_slice()),
            ("clearlogo", self.clear_logo.as_slice()),
            ("hdclearart", self.hd_clear_art.as_slice()),
            ("hdlogo", self.hd_logo.as_slice()),
            ("hdmovieclearart", self.hd_movie_clear_art.as_slice()),
            ("hdmovielogo", self.hd_movie_logo.as_slice()),
            ("hdmusiclogo", self.hd_music_logo.as_slice()),
            ("hdtvlogo", self.hd_tv_logo.as_slice()),
            ("movieart", self.movie_art.as_slice()),
            ("characterart", self.character_art.as_slice()),
            ("moviebackground", self.movie_background.as_slice()),
            ("moviebanner", self.movie_banner.as_slice()),
            ("moviedisc", self.movie_disc.as_slice()),
            ("movielogo", self.movie_logo.as_slice()),
            ("movieposter", self.movie_poster.as_slice()),
            ("moviethumb", self.movie_thumb.as_slice()),
            ("artistthumb", self.artist_thumb.as_slice()),
            ("seasonbanner", self.season_banner.as_slice()),
            ("seasonposter", self.season_poster.as_slice()),
            ("seasonthumb", self.season_thumb.as_slice()),
            ("showbackground", self.show_background.as_slice()),
            ("artistbackground", self.artist_background.as_slice()),
            ("tvbanner", self.tv_banner.as_slice()),
            ("tvposter", self.tv_poster.as_slice()),
            ("tvthumb", self.tv_thumb.as_slice()),
            ("musiclogo", self.music_logo.as_slice()),
            ("musicbanner", self.music_banner.as_slice()),
            ("musiclabel", self.music_label.as_slice()),
        ]
    }

    /// Looks up a category by its upstream key, e.g. `"movieposter"`
    pub fn images(&self, category: &str) -> Option<&[Image]> {
        self.categories()
            .into_iter()
            .find(|(key, _)| *key == category)
            .map(|(_, images)| images)
    }

    /// Total number of images, album artwork included
    pub fn image_count(&self) -> usize {
        let categories: usize = self.categories().iter().map(|(_, images)| images.len()).sum();
        let albums: usize = self
            .albums
            .values()
            .flat_map(|album| album.values())
            .map(Vec::len)
            .sum();
        categories + albums
    }
}
