// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paged photo accumulation and debounced search input.

use hashbrown::HashSet;
use mosaic_viewport::Debouncer;

use crate::client::PhotoSource;
use crate::config::DEFAULT_PER_PAGE;
use crate::types::{Photo, PhotoId};

/// Quiet period before typed search text is applied.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// A page the feed wants next, for hosts that fetch on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    /// Search text; empty means the curated listing.
    pub query: String,
    /// One-based page number.
    pub page: u32,
    /// Page size.
    pub per_page: u32,
}

impl FeedRequest {
    /// Returns `true` if this request targets the curated listing.
    pub fn is_curated(&self) -> bool {
        self.query.is_empty()
    }
}

/// The photos of one listing, accumulated page by page.
///
/// This is the single owner of gallery state: the current query, the last
/// loaded page and the photos so far. Changing the query starts over at page 1.
/// Photos whose id is already present are skipped, so every id maps to one item
/// in a masonry layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoFeed {
    photos: Vec<Photo>,
    seen: HashSet<PhotoId>,
    query: String,
    page: u32,
    per_page: u32,
}

impl Default for PhotoFeed {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

impl PhotoFeed {
    /// An empty curated feed requesting `per_page` photos at a time.
    pub fn new(per_page: u32) -> Self {
        Self {
            photos: Vec::new(),
            seen: HashSet::new(),
            query: String::new(),
            page: 0,
            per_page: per_page.max(1),
        }
    }

    /// Photos loaded so far, in load order.
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Number of photos loaded so far.
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Returns `true` if nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Current search text; empty for the curated listing.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Last page loaded, 0 before the first.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Page the next load asks for.
    pub fn next_page(&self) -> u32 {
        self.page.saturating_add(1)
    }

    /// Page size.
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Adds `photos` after the current ones. Returns how many were new.
    pub fn append(&mut self, photos: impl IntoIterator<Item = Photo>) -> usize {
        let before = self.photos.len();
        for photo in photos {
            if self.seen.insert(photo.id) {
                self.photos.push(photo);
            }
        }
        self.photos.len() - before
    }

    /// Replaces every photo with `photos`, keeping the query and page.
    pub fn replace(&mut self, photos: impl IntoIterator<Item = Photo>) -> usize {
        self.photos.clear();
        self.seen.clear();
        self.append(photos)
    }

    /// Drops every photo and rewinds to before page 1. The query is kept.
    pub fn reset(&mut self) {
        self.photos.clear();
        self.seen.clear();
        self.page = 0;
    }

    /// Switches to `query`, trimmed. Returns `true` and resets if it changed.
    pub fn set_query(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query == self.query {
            return false;
        }
        log::debug!("feed query changed from {:?} to {query:?}", self.query);
        self.query = query.to_owned();
        self.reset();
        true
    }

    /// Describes the next page to load.
    pub fn next_request(&self) -> FeedRequest {
        FeedRequest {
            query: self.query.clone(),
            page: self.next_page(),
            per_page: self.per_page,
        }
    }

    /// Applies the response to `request`. Returns how many photos were new.
    ///
    /// Responses for another query or page than [`next_request`](Self::next_request)
    /// would produce now are stale and dropped. An empty response leaves the
    /// page where it is, so the same page is asked for again next time.
    pub fn apply(&mut self, request: &FeedRequest, photos: Vec<Photo>) -> usize {
        if request.query != self.query || request.page != self.next_page() {
            log::debug!(
                "dropping stale response for {:?} page {}",
                request.query,
                request.page
            );
            return 0;
        }
        if photos.is_empty() {
            return 0;
        }
        self.page = request.page;
        self.append(photos)
    }

    /// Loads the next page from `source`, curated or search depending on the query.
    pub async fn load_next<S: PhotoSource>(&mut self, source: &S) -> usize {
        let request = self.next_request();
        let photos = if request.is_curated() {
            source.fetch_curated(request.page, request.per_page).await
        } else {
            source
                .search(&request.query, request.page, request.per_page)
                .await
        };
        let added = self.apply(&request, photos);
        log::trace!(
            "loaded page {} of {:?}: {added} new, {} total",
            request.page,
            request.query,
            self.photos.len()
        );
        added
    }
}

/// Search text typed by the user, applied after a quiet period.
///
/// Built on the same [`Debouncer`] that coalesces container resizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebouncedQuery {
    input: Debouncer<String>,
}

impl Default for DebouncedQuery {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEBOUNCE_MS)
    }
}

impl DebouncedQuery {
    /// Creates a debounced query with the given quiet period.
    pub const fn new(delay_ms: u64) -> Self {
        Self {
            input: Debouncer::new(delay_ms),
        }
    }

    /// Records the text of the search box at `now_ms`.
    pub fn input(&mut self, text: impl Into<String>, now_ms: u64) {
        self.input.call(text.into(), now_ms);
    }

    /// The settled text, once the quiet period after the last input has passed.
    pub fn poll(&mut self, now_ms: u64) -> Option<String> {
        self.input.poll(now_ms)
    }

    /// When [`poll`](Self::poll) will next yield text, if anything is pending.
    pub fn deadline(&self) -> Option<u64> {
        self.input.deadline()
    }

    /// Drops pending text.
    pub fn cancel(&mut self) {
        self.input.cancel();
    }
}
