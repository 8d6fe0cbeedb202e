// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for the photo source.

use thiserror::Error;

/// Errors returned by the fallible `try_*` methods of [`PhotoClient`](crate::PhotoClient).
#[derive(Error, Debug)]
pub enum PhotoSourceError {
    /// The request could not be sent or its body could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("photo API returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// The response body was not the expected JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required setting was absent.
    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),
}

/// Result type for photo source operations.
pub type Result<T> = std::result::Result<T, PhotoSourceError>;
