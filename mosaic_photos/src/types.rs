// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Response types of the photo API.

use kurbo::Size;
use mosaic_masonry::MasonryItem;
use serde::{Deserialize, Serialize};

/// Identifier of a photo.
pub type PhotoId = u64;

/// Renditions of a photo at different sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoSrc {
    /// Full-resolution file.
    pub original: String,
    /// 940px tall at 2x density.
    pub large2x: String,
    /// 650px tall at 2x density.
    pub large: String,
    /// 350px tall.
    pub medium: String,
    /// 130px tall.
    pub small: String,
    /// Cropped to 800x1200.
    pub portrait: String,
    /// Cropped to 1200x627.
    pub landscape: String,
    /// Cropped to 280x200.
    pub tiny: String,
}

/// One photo with its intrinsic pixel size and author metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Provider-assigned id.
    pub id: PhotoId,
    /// Intrinsic width in pixels.
    pub width: u32,
    /// Intrinsic height in pixels.
    pub height: u32,
    /// Page of the photo on the provider's site.
    #[serde(default)]
    pub url: String,
    /// Display name of the author.
    #[serde(default)]
    pub photographer: String,
    /// Profile page of the author.
    #[serde(default)]
    pub photographer_url: String,
    /// Provider-assigned author id.
    #[serde(default)]
    pub photographer_id: u64,
    /// Average color as `#rrggbb`, usable as a placeholder while loading.
    #[serde(default)]
    pub avg_color: Option<String>,
    /// Image URLs.
    #[serde(default)]
    pub src: PhotoSrc,
    /// Whether the API key's user liked the photo.
    #[serde(default)]
    pub liked: bool,
    /// Description supplied by the provider, possibly empty.
    #[serde(default)]
    pub alt: String,
}

impl Photo {
    /// URL to show in the grid: the medium rendition, or the original if absent.
    pub fn thumbnail_url(&self) -> &str {
        first_non_empty(&[&self.src.medium, &self.src.large, &self.src.original])
    }

    /// URL to show on a detail page: the large rendition, or the original if absent.
    pub fn full_url(&self) -> &str {
        first_non_empty(&[&self.src.large, &self.src.large2x, &self.src.original])
    }

    /// Alternative text, falling back to a credit line when the API sent none.
    pub fn alt_text(&self) -> String {
        if self.alt.trim().is_empty() {
            format!("Photo by {}", self.photographer)
        } else {
            self.alt.clone()
        }
    }
}

fn first_non_empty<'a>(candidates: &[&'a String]) -> &'a str {
    candidates
        .iter()
        .copied()
        .find(|url| !url.is_empty())
        .map_or("", String::as_str)
}

impl MasonryItem for Photo {
    type Id = PhotoId;

    fn id(&self) -> PhotoId {
        self.id
    }

    fn intrinsic_size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// One page of a curated or search listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoPage {
    /// One-based page number.
    #[serde(default)]
    pub page: u32,
    /// Requested page size.
    #[serde(default)]
    pub per_page: u32,
    /// Photos on this page.
    #[serde(default)]
    pub photos: Vec<Photo>,
    /// Size of the whole listing.
    #[serde(default)]
    pub total_results: u64,
    /// URL of the next page, absent on the last one.
    #[serde(default)]
    pub next_page: Option<String>,
}

impl PhotoPage {
    /// Returns `true` if the API advertises another page.
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }
}
