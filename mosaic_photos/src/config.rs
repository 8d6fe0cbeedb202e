// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Connection settings for the photo API.

use core::fmt;
use std::time::Duration;

use crate::error::{PhotoSourceError, Result};

/// Default photo API base URL (Pexels v1).
pub const DEFAULT_BASE_URL: &str = "https://api.pexels.com/v1";
/// Photos requested per page.
pub const DEFAULT_PER_PAGE: u32 = 80;
/// Environment variable overriding the base URL.
pub const BASE_URL_VAR: &str = "MOSAIC_PHOTOS_BASE_URL";
/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "MOSAIC_PHOTOS_API_KEY";

const CONNECT_TIMEOUT_SECS: u64 = 8;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings for a [`PhotoClient`](crate::PhotoClient).
#[derive(Clone, PartialEq, Eq)]
pub struct PhotoSourceConfig {
    /// API root, without a trailing slash.
    pub base_url: String,
    /// Sent verbatim in the `Authorization` header.
    pub api_key: String,
    /// Page size used by the feed.
    pub per_page: u32,
    /// Whole-request timeout.
    pub request_timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl fmt::Debug for PhotoSourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhotoSourceConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("per_page", &self.per_page)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl PhotoSourceConfig {
    /// Default settings against the Pexels API with `api_key`.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: api_key.into(),
            per_page: DEFAULT_PER_PAGE,
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
        }
    }

    /// Reads [`BASE_URL_VAR`] and [`API_KEY_VAR`] from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env), with variables resolved by `lookup`.
    ///
    /// Blank values count as absent. The API key is required.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let api_key = present(API_KEY_VAR).ok_or(PhotoSourceError::MissingConfig(API_KEY_VAR))?;
        let config = Self::new(api_key.trim());
        Ok(match present(BASE_URL_VAR) {
            Some(base_url) => config.with_base_url(base_url),
            None => config,
        })
    }

    /// Replaces the base URL. Trailing slashes are dropped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim().trim_end_matches('/').to_owned();
        self
    }

    /// Replaces the page size; values below 1 are raised to 1.
    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }
}
