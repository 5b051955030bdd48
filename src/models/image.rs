//! A single piece of artwork

use crate::lenient::{DecodeError, RawField, secure_url};
use serde::{Deserialize, Serialize};

/// Artwork record as delivered by the API, before normalization.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawImage {
    id: RawField,
    url: RawField,
    lang: RawField,
    colour: RawField,
    disc_type: RawField,
    likes: RawField,
    season: RawField,
    disc: RawField,
    size: RawField,
}

/// A piece of artwork hosted by fanart.tv.
///
/// Counters are zero when the API left them out or empty. The URL always
/// uses the `https` scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawImage")]
pub struct Image {
    /// fanart.tv id of the image
    pub id: String,
    /// Download location of the image
    pub url: String,
    /// Language code, `"00"` for language neutral artwork
    pub lang: String,
    /// Dominant colour, only set for some music artwork
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
    /// Disc type for disc artwork (`"bluray"`, `"dvd"`, `"3d"`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disc_type: Option<String>,
    /// Number of user likes
    pub likes: i64,
    /// Season the artwork belongs to; 0 means unset or all seasons
    pub season: i64,
    /// Disc number for disc artwork
    pub disc: i64,
    /// File size in bytes
    pub size: i64,
}

impl TryFrom<RawImage> for Image {
    type Error = DecodeError;

    fn try_from(raw: RawImage) -> Result<Self, Self::Error> {
        Ok(Image {
            likes: raw.likes.parse_number("likes")?,
            season: raw.season.parse_season()?,
            disc: raw.disc.parse_number("disc")?,
            size: raw.size.parse_number("size")?,
            id: raw.id.into_string(),
            url: secure_url(raw.url.into_string()),
            lang: raw.lang.into_string(),
            colour: raw.colour.into_option(),
            disc_type: raw.disc_type.into_option(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_string_counters() {
        let image: Image = serde_json::from_str(
            r#"{
                "id": "9137",
                "url": "http://assets.fanart.tv/fanart/movies/550/moviedisc/fight-club.png",
                "lang": "en",
                "likes": "12",
                "disc": "1",
                "disc_type": "bluray",
                "size": "500"
            }"#,
        )
        .unwrap();

        assert_eq!(
            image,
            Image {
                id: "9137".to_string(),
                url: "https://assets.fanart.tv/fanart/movies/550/moviedisc/fight-club.png"
                    .to_string(),
                lang: "en".to_string(),
                colour: None,
                disc_type: Some("bluray".to_string()),
                likes: 12,
                season: 0,
                disc: 1,
                size: 500,
            }
        );
    }

    #[test]
    fn test_decode_numeric_counters() {
        let image: Image =
            serde_json::from_str(r#"{"id": 7, "likes": 3, "season": 2, "size": 1024}"#).unwrap();
        assert_eq!(image.id, "7");
        assert_eq!(image.likes, 3);
        assert_eq!(image.season, 2);
        assert_eq!(image.size, 1024);
    }

    #[test]
    fn test_decode_empty_and_sentinel_values() {
        let image: Image = serde_json::from_str(
            r#"{"likes": "", "season": "all", "disc": "", "size": "", "colour": ""}"#,
        )
        .unwrap();
        assert_eq!(image.likes, 0);
        assert_eq!(image.season, 0);
        assert_eq!(image.disc, 0);
        assert_eq!(image.size, 0);
        assert_eq!(image.colour, None);
    }

    #[test]
    fn test_decode_invalid_number_names_field() {
        let err = serde_json::from_str::<Image>(r#"{"id": "1", "likes": "abc"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid likes"), "{}", err);

        let err = serde_json::from_str::<Image>(r#"{"season": "first"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid season"), "{}", err);
    }

    #[test]
    fn test_decode_signed_and_wide_counters() {
        let image: Image =
            serde_json::from_str(r#"{"likes": "-1", "size": "4294967296", "disc": -2}"#).unwrap();
        assert_eq!(image.likes, -1);
        assert_eq!(image.size, 4_294_967_296);
        assert_eq!(image.disc, -2);
    }

    #[test]
    fn test_decode_rejects_float_counters() {
        let err = serde_json::from_str::<Image>(r#"{"likes": 3.0}"#).unwrap_err();
        assert!(err.to_string().contains("invalid likes \"3.0\""), "{}", err);

        let err = serde_json::from_str::<Image>(r#"{"size": 1e3}"#).unwrap_err();
        assert!(err.to_string().contains("invalid size"), "{}", err);
    }

    #[test]
    fn test_decode_rejects_unknown_field() {
        let err =
            serde_json::from_str::<Image>(r#"{"id": "1", "url": "https://a", "rating": "5"}"#)
                .unwrap_err();
        assert!(err.to_string().contains("unknown field `rating`"), "{}", err);
    }

    #[test]
    fn test_secure_url_untouched() {
        let image: Image = serde_json::from_str(r#"{"url": "https://a/b.jpg"}"#).unwrap();
        assert_eq!(image.url, "https://a/b.jpg");
    }
}
