// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mosaic Photos: the data side of a masonry photo gallery.
//!
//! - [`Photo`] and [`PhotoPage`] mirror a Pexels-style JSON API. [`Photo`]
//!   implements [`mosaic_masonry::MasonryItem`], so photos can be handed to a
//!   layout or a [`mosaic_viewport::MasonryView`] directly.
//! - [`PhotoSource`] is what a gallery fetches through. Its methods never fail:
//!   problems are logged and surface as an empty page or `None`.
//!   [`PhotoClient`] implements it over HTTP and also offers `try_*` methods
//!   returning [`PhotoSourceError`].
//! - [`PhotoFeed`] owns the gallery's query, page and accumulated photos, with
//!   explicit `append`, `replace` and `reset`.
//! - [`DebouncedQuery`] settles search-box input after a quiet period.
//!
//! ```rust,no_run
//! use mosaic_photos::{DebouncedQuery, PhotoClient, PhotoFeed};
//!
//! # async fn run() -> mosaic_photos::Result<()> {
//! let client = PhotoClient::from_env()?;
//! let mut feed = PhotoFeed::default();
//! feed.load_next(&client).await;
//!
//! let mut search = DebouncedQuery::default();
//! search.input("mountains", 0);
//! if let Some(query) = search.poll(1_000) {
//!     if feed.set_query(&query) {
//!         feed.load_next(&client).await;
//!     }
//! }
//! println!("{} photos", feed.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod feed;
mod types;

pub use client::{PhotoClient, PhotoSource};
pub use config::{
    API_KEY_VAR, BASE_URL_VAR, DEFAULT_BASE_URL, DEFAULT_PER_PAGE, PhotoSourceConfig,
};
pub use error::{PhotoSourceError, Result};
pub use feed::{DEFAULT_SEARCH_DEBOUNCE_MS, DebouncedQuery, FeedRequest, PhotoFeed};
pub use types::{Photo, PhotoId, PhotoPage, PhotoSrc};
