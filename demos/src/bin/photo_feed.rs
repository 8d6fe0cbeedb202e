// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fetches real photos and lays them out.
//!
//! Needs `MOSAIC_PHOTOS_API_KEY` (a Pexels API key); `MOSAIC_PHOTOS_BASE_URL`
//! optionally points at another compatible API. Search text is taken from the
//! command line and applied through the same debouncer a search box would use.
//!
//! Run:
//! - `MOSAIC_PHOTOS_API_KEY=... cargo run -p mosaic_demos --bin photo_feed -- mountains`

use mosaic_masonry::{ColumnPolicy, layout_items};
use mosaic_photos::{DebouncedQuery, PhotoClient, PhotoFeed, PhotoSourceConfig};

/// Column width and gap of the gallery page.
const COLUMN_WIDTH: f64 = 270.0;
const GAP: f64 = 6.0;
const CONTAINER_WIDTH: f64 = 1152.0;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = match PhotoSourceConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(2);
        }
    };
    let client = match PhotoClient::new(&config) {
        Ok(client) => client,
        Err(err) => {
            log::error!("could not build the HTTP client: {err}");
            std::process::exit(1);
        }
    };

    let mut feed = PhotoFeed::new(config.per_page);
    let added = feed.load_next(&client).await;
    println!("curated page {}: {added} photos", feed.page());

    // Simulate typing the query one character every 80 ms.
    let typed: String = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let mut search = DebouncedQuery::default();
    let mut now_ms = 0;
    for end in 1..=typed.chars().count() {
        search.input(typed.chars().take(end).collect::<String>(), now_ms);
        now_ms += 80;
    }
    if let Some(deadline) = search.deadline()
        && let Some(query) = search.poll(deadline)
        && feed.set_query(&query)
    {
        let added = feed.load_next(&client).await;
        println!("search {query:?} page {}: {added} photos", feed.page());
    }

    let policy = ColumnPolicy::fixed_width(COLUMN_WIDTH);
    let layout = layout_items(feed.photos(), CONTAINER_WIDTH, GAP, &policy);
    println!(
        "{} photos in {} columns of {:.1}px, {:.0}px tall",
        layout.len(),
        layout.column_count(),
        layout.column_width(),
        layout.total_height()
    );
    for (photo, item) in feed.photos().iter().zip(layout.items()).take(8) {
        let placement = item.placement;
        println!(
            "  #{:<10} col {} at ({:>6.1}, {:>7.1}) {:>5.1}x{:<5.1} {}",
            photo.id,
            item.column,
            placement.left,
            placement.top,
            placement.width,
            placement.height,
            photo.alt_text()
        );
    }

    if let Some(first) = feed.photos().first() {
        match client.try_get_by_id(first.id).await {
            Ok(photo) => println!("detail: {} by {}", photo.full_url(), photo.photographer),
            Err(err) => log::error!("detail lookup failed: {err}"),
        }
    }
}
