//! HTTP client for the demo REST API.
//!
//! Every operation is a single GET against the configured base URL. Network
//! failures, timeouts, non-2xx statuses and undecodable bodies all surface as
//! [`FetchError`]; nothing is retried.

use std::future::Future;
use std::time::Duration;

use folio_shared::constants::{DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_MS};
use folio_shared::{Album, Comment, Photo, Post, User};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::FetchError;

/// Source of API records. Implemented by [`ApiClient`]; loaders are generic
/// over it so they can run against in-memory fixtures.
pub trait DataSource: Sync {
    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, FetchError>> + Send;

    fn get_user(&self, id: u32) -> impl Future<Output = Result<User, FetchError>> + Send;

    fn list_albums(&self) -> impl Future<Output = Result<Vec<Album>, FetchError>> + Send;

    fn list_photos(&self) -> impl Future<Output = Result<Vec<Photo>, FetchError>> + Send;

    fn list_photos_by_album(
        &self,
        album_id: u32,
    ) -> impl Future<Output = Result<Vec<Photo>, FetchError>> + Send;

    fn list_posts(&self) -> impl Future<Output = Result<Vec<Post>, FetchError>> + Send;

    fn list_comments_by_post(
        &self,
        post_id: u32,
    ) -> impl Future<Output = Result<Vec<Comment>, FetchError>> + Send;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { http, base_url })
    }

    /// Client for the public API with the default 10 s timeout.
    pub fn public() -> Result<Self, FetchError> {
        Self::new(
            DEFAULT_API_BASE_URL,
            Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, u32)],
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        let display_url = match query {
            [] => path.to_string(),
            [(key, value), ..] => format!("{path}?{key}={value}"),
        };

        debug!(url = %display_url, "GET");

        let resp = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| classify(display_url.clone(), source))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: display_url,
                status: status.as_u16(),
            });
        }

        resp.json::<T>().await.map_err(|source| {
            if source.is_timeout() {
                FetchError::Timeout { url: display_url }
            } else {
                FetchError::Decode {
                    url: display_url,
                    source,
                }
            }
        })
    }
}

fn classify(url: String, source: reqwest::Error) -> FetchError {
    if source.is_timeout() {
        FetchError::Timeout { url }
    } else {
        FetchError::Network { url, source }
    }
}

impl DataSource for ApiClient {
    async fn list_users(&self) -> Result<Vec<User>, FetchError> {
        self.get_json("/users", &[]).await
    }

    async fn get_user(&self, id: u32) -> Result<User, FetchError> {
        self.get_json(&format!("/users/{id}"), &[]).await
    }

    async fn list_albums(&self) -> Result<Vec<Album>, FetchError> {
        self.get_json("/albums", &[]).await
    }

    async fn list_photos(&self) -> Result<Vec<Photo>, FetchError> {
        self.get_json("/photos", &[]).await
    }

    async fn list_photos_by_album(&self, album_id: u32) -> Result<Vec<Photo>, FetchError> {
        self.get_json("/photos", &[("albumId", album_id)]).await
    }

    async fn list_posts(&self) -> Result<Vec<Post>, FetchError> {
        self.get_json("/posts", &[]).await
    }

    async fn list_comments_by_post(&self, post_id: u32) -> Result<Vec<Comment>, FetchError> {
        self.get_json("/comments", &[("postId", post_id)]).await
    }
}
