pub mod comment;
pub mod filter;
pub mod gallery;
pub mod image;
pub mod oembed;
pub mod post;
pub mod tag;
pub mod user;

use crate::client::Request;

/// Page requested when the caller does not pick one.
pub const DEFAULT_PAGE: u32 = 1;

/// Images per page for an image search when the caller does not pick a size.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Similarity threshold for a reverse image search when the caller does not pick one.
pub const DEFAULT_DISTANCE: f64 = 0.25;

/// Builds a `q` + `page` search request against `path`.
pub(crate) fn search(path: &str, query: &str, page: Option<u32>) -> Request {
    Request::get(path)
        .query("q", query)
        .query("page", page.unwrap_or(DEFAULT_PAGE))
}

/// Deserializes a field that must be present but may be `null`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    <Option<T> as serde::Deserialize>::deserialize(deserializer)
}

/// ISO-8601 timestamps that must be written in UTC with a trailing `Z`.
pub(crate) mod zulu {
    use chrono::{DateTime, Utc};
    use serde::{de::Error as _, Deserialize, Deserializer};

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(D::Error::custom)
    }

    /// Like [`deserialize`], for a field that must be present but may be `null`.
    pub(crate) fn nullable<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| parse(&raw))
            .transpose()
            .map_err(D::Error::custom)
    }

    fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
        if raw.as_bytes().get(10) != Some(&b'T') || !raw.ends_with('Z') {
            return Err(format!("timestamp `{raw}` is not a UTC ISO-8601 datetime"));
        }
        DateTime::parse_from_rfc3339(raw)
            .map(|time| time.with_timezone(&Utc))
            .map_err(|e| format!("invalid timestamp `{raw}`: {e}"))
    }
}

pub(crate) mod macros {
    macro_rules! str_opt_ref {
        ($x:expr) => {
            $x.as_ref().map(|x| x.as_ref())
        };
    }

    /// Declares the `{ field: Inner }` wrapper an endpoint's reply arrives in.
    macro_rules! envelope {
        ($name:ident { $field:ident: $inner:ty }) => {
            #[derive(Debug, serde::Deserialize)]
            pub(crate) struct $name {
                $field: $inner,
            }

            impl crate::client::Envelope for $name {
                type Inner = $inner;

                fn open(self) -> Self::Inner {
                    self.$field
                }
            }
        };
    }

    pub(crate) use envelope;
    pub(crate) use str_opt_ref;
}
