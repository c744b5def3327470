// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where comic metadata comes from.
//!
//! The remote source serves one JSON document per comic:
//!
//! | Request            | URL                          |
//! |--------------------|------------------------------|
//! | Comic `n`          | `{base}/{n}/info.0.json`     |
//! | Latest comic       | `{base}/info.0.json`         |
//!
//! [`ComicSource`] is the seam between the crawler and the network, so builds
//! can be driven from memory in tests.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::error::FetchError;
use crate::types::{ComicId, ComicRecord};

/// Default remote base URL.
pub const DEFAULT_BASE_URL: &str = "https://xkcd.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can produce comic records by id.
pub trait ComicSource: Send + Sync {
    /// Fetch comic `num`, or the latest comic when `num` is `None`.
    fn fetch(
        &self,
        num: Option<ComicId>,
    ) -> impl Future<Output = Result<ComicRecord, FetchError>> + Send;
}

/// [`ComicSource`] over HTTP(S).
///
/// The timeout covers the whole request, body included. There are no retries:
/// a failed id is reported and left as a gap.
#[derive(Clone, Debug)]
pub struct HttpSource {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("comicdex/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url, timeout))
    }

    /// Use a preconfigured client. `timeout` is only reported in errors.
    pub fn with_client(client: Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, num: Option<ComicId>) -> String {
        match num {
            Some(num) => format!("{}/{}/info.0.json", self.base_url, num),
            None => format!("{}/info.0.json", self.base_url),
        }
    }

    fn request_error(&self, url: &str, source: reqwest::Error) -> FetchError {
        if source.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
        } else {
            FetchError::Request {
                url: url.to_string(),
                source,
            }
        }
    }
}

impl ComicSource for HttpSource {
    async fn fetch(&self, num: Option<ComicId>) -> Result<ComicRecord, FetchError> {
        let url = self.url_for(num);
        tracing::trace!(%url, "fetching comic metadata");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.request_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.request_error(&url, e))?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode { url, source })
    }
}
