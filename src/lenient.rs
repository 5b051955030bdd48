//! Lenient field decoding
//!
//! The fanart.tv API is inconsistent about scalar types: counters such as
//! `likes` or `size` arrive as JSON strings, sometimes as JSON numbers,
//! sometimes as empty strings, and `season` may hold the token `"all"`.
//!
//! Decoding therefore happens in two stages. Records are first read into a
//! raw shape where every scalar is a [`RawField`] holding plain text. The raw
//! shape is then converted into the public model, parsing each numeric field
//! with explicit handling for empty values and sentinels. A value that still
//! fails to parse is reported as a [`DecodeError`] naming the field, which
//! serde folds into the message of the surrounding `serde_json::Error`.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Season token the API uses for artwork that applies to every season
const SEASON_ALL: &str = "all";

/// Errors that can occur while normalizing a raw record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum DecodeError {
    /// A numeric field held text that is not a base-10 integer
    #[error("invalid {field} {value:?}: {source}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        source: ParseIntError,
    },
}

/// A scalar as delivered by the API, kept as text
///
/// Strings are taken verbatim, numbers are kept as their decimal
/// representation and `null` becomes the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RawField(String);

impl RawField {
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn into_string(self) -> String {
        self.0
    }

    /// Returns `None` for an empty value
    pub(crate) fn into_option(self) -> Option<String> {
        if self.0.is_empty() { None } else { Some(self.0) }
    }

    /// Parses a numeric field, treating the empty value as zero
    pub(crate) fn parse_number<N>(&self, field: &'static str) -> Result<N, DecodeError>
    where
        N: FromStr<Err = ParseIntError> + Default,
    {
        if self.0.is_empty() {
            return Ok(N::default());
        }
        self.0.parse().map_err(|source| DecodeError::InvalidNumber {
            field,
            value: self.0.clone(),
            source,
        })
    }

    /// Parses the `season` field
    ///
    /// `"all"` and the empty value both yield 0, so an explicit season 0
    /// cannot be told apart from an unset season.
    pub(crate) fn parse_season(&self) -> Result<i64, DecodeError> {
        if self.as_str() == SEASON_ALL {
            return Ok(0);
        }
        self.parse_number("season")
    }
}

impl<'de> Deserialize<'de> for RawField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RawFieldVisitor)
    }
}

struct RawFieldVisitor;

impl<'de> Visitor<'de> for RawFieldVisitor {
    type Value = RawField;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string, a number or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RawField, E> {
        Ok(RawField(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<RawField, E> {
        Ok(RawField(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RawField, E> {
        Ok(RawField(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RawField, E> {
        Ok(RawField(v.to_string()))
    }

    // Debug formatting keeps the fraction (`3.0`, `1000.0`), so every float
    // fails the integer parse and is reported against its field.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<RawField, E> {
        Ok(RawField(format!("{:?}", v)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawField, E> {
        Ok(RawField::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<RawField, E> {
        Ok(RawField::default())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<RawField, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawField::deserialize(deserializer)
    }
}

/// `deserialize_with` helper for string fields that may arrive as numbers or null
pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawField::deserialize(deserializer).map(RawField::into_string)
}

/// `deserialize_with` helper mapping `null` to the default value
///
/// Used for artwork lists and maps, which the API sometimes sends as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Rewrites an `http://` URL to `https://`
///
/// Any other value, including URLs without a scheme, is returned unchanged.
pub fn secure_url(url: String) -> String {
    match url.strip_prefix("http://") {
        Some(rest) => format!("https://{}", rest),
        None => url,
    }
}
