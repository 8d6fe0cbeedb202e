// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTTP client for a Pexels-style photo API.

use core::fmt;
use core::future::Future;

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;

use crate::config::PhotoSourceConfig;
use crate::error::{PhotoSourceError, Result};
use crate::types::{Photo, PhotoId, PhotoPage};

/// Where a gallery gets its photos from.
///
/// Implementations never fail: transport and decoding problems are logged and
/// reported as an empty list or `None`.
pub trait PhotoSource {
    /// One page of the curated listing. Pages start at 1.
    fn fetch_curated(&self, page: u32, per_page: u32) -> impl Future<Output = Vec<Photo>> + Send;

    /// One page of results for `query`. Pages start at 1.
    fn search(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> impl Future<Output = Vec<Photo>> + Send;

    /// A single photo, or `None` if it could not be fetched.
    fn get_by_id(&self, id: PhotoId) -> impl Future<Output = Option<Photo>> + Send;
}

/// Photo API client.
///
/// The `try_*` methods surface every failure as a [`PhotoSourceError`]; the
/// [`PhotoSource`] implementation wraps them and logs failures at `error` level.
#[derive(Clone)]
pub struct PhotoClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl fmt::Debug for PhotoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhotoClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl PhotoClient {
    /// Creates a client from `config`.
    pub fn new(config: &PhotoSourceConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(PhotoSourceError::Http)?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            api_key: config.api_key.clone(),
            http,
        })
    }

    /// Creates a client from [`PhotoSourceConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(&PhotoSourceConfig::from_env()?)
    }

    /// The API root requests are made against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.url(path);
        log::trace!("GET {url} {query:?}");
        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, self.api_key.as_str())
            .query(query)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(PhotoSourceError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches one page of the curated listing.
    pub async fn try_fetch_curated(&self, page: u32, per_page: u32) -> Result<PhotoPage> {
        let (page, per_page) = (page.to_string(), per_page.to_string());
        self.get_json(
            "curated",
            &[("page", page.as_str()), ("per_page", per_page.as_str())],
        )
        .await
    }

    /// Fetches one page of search results for `query`.
    pub async fn try_search(&self, query: &str, page: u32, per_page: u32) -> Result<PhotoPage> {
        let (page, per_page) = (page.to_string(), per_page.to_string());
        self.get_json(
            "search",
            &[
                ("query", query),
                ("page", page.as_str()),
                ("per_page", per_page.as_str()),
            ],
        )
        .await
    }

    /// Fetches a single photo.
    pub async fn try_get_by_id(&self, id: PhotoId) -> Result<Photo> {
        self.get_json(&format!("photos/{id}"), &[]).await
    }
}

impl PhotoSource for PhotoClient {
    async fn fetch_curated(&self, page: u32, per_page: u32) -> Vec<Photo> {
        match self.try_fetch_curated(page, per_page).await {
            Ok(listing) => listing.photos,
            Err(err) => {
                log::error!("failed to fetch curated photos (page {page}): {err}");
                Vec::new()
            }
        }
    }

    async fn search(&self, query: &str, page: u32, per_page: u32) -> Vec<Photo> {
        match self.try_search(query, page, per_page).await {
            Ok(listing) => listing.photos,
            Err(err) => {
                log::error!("failed to search photos for {query:?} (page {page}): {err}");
                Vec::new()
            }
        }
    }

    async fn get_by_id(&self, id: PhotoId) -> Option<Photo> {
        match self.try_get_by_id(id).await {
            Ok(photo) => Some(photo),
            Err(err) => {
                log::error!("failed to fetch photo {id}: {err}");
                None
            }
        }
    }
}
