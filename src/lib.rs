#![deny(clippy::all, clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::must_use_candidate)]
//! # dotderpi
//!
//! dotderpi is a typed wrapper library around the Derpibooru JSON API.
//!
//! Every endpoint makes exactly one request and hands back either the
//! validated resource or an [`Error`] describing what went wrong:
//! - [`Image`], [`ImageSearch`] and image uploads
//! - [`Tag`] and [`TagSearch`]
//! - [`Filter`]s, including system and user filters
//! - [`User`] profiles
//! - [`Comment`]s, forum [`Post`]s and [`GallerySearch`]
//! - [`Oembed`] data
//!
//! Replies are checked against the expected structure before they are
//! returned. Unknown fields are ignored.
//!
//! ## Example: Printing the tags of the first search result.
//!
//! ```rust,no_run
//! # type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
//! use dotderpi::image::ImageSearch;
//! use dotderpi::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new();
//!     let search = ImageSearch::new(&client, "safe, pony", None, Some(1)).await?;
//!
//!     if let Some(image) = search.first() {
//!         println!("#{} is tagged: {}", image.id(), image.tags().join(", "));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`Error`]: crate::error::Error
//! [`Image`]: crate::image::Image
//! [`ImageSearch`]: crate::image::ImageSearch
//! [`Tag`]: crate::tag::Tag
//! [`TagSearch`]: crate::tag::TagSearch
//! [`Filter`]: crate::filter::Filter
//! [`User`]: crate::user::User
//! [`Comment`]: crate::comment::Comment
//! [`Post`]: crate::post::Post
//! [`GallerySearch`]: crate::gallery::GallerySearch
//! [`Oembed`]: crate::oembed::Oembed

/// Client module contains [`Client`] and its [`Config`].
///
/// [`Config`]: crate::client::Config
pub mod client;

/// Contains the [`Error`]s that can be returned by the library.
///
/// [`Error`]: crate::error::Error
pub mod error;

/// Conversion of fallible computations into message-carrying results.
pub mod safe;

pub(crate) mod models;

pub(crate) mod result;

pub use client::Client;
pub use models::*;
pub use result::Result;
