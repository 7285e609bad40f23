//! `reqwest` implementation of the directory API.

use crate::APP_USER_AGENT;
use anyhow::{Context, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;
use userdir_directory::{
    api::{endpoints, join_url},
    DirectoryApi, FetchError, Post, Resource, UserId, UserProfile, UserSummary,
};

/// Default request timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct HttpDirectory {
    client: Client,
    base_url: Url,
}

impl HttpDirectory {
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url =
            Url::parse(base_url.trim()).with_context(|| format!("invalid API URL: {base_url}"))?;
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get(&self, resource: Resource, path: &str) -> Result<Response, FetchError> {
        let url = join_url(self.base_url.as_str(), path);
        debug!(%url, %resource, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| map_request_error(resource, &err))?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            debug!(%url, status = status.as_u16(), "request failed");
            Err(FetchError::Status {
                resource,
                status: status.as_u16(),
            })
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: Resource,
        path: &str,
    ) -> Result<T, FetchError> {
        self.get(resource, path)
            .await?
            .json::<T>()
            .await
            .map_err(|err| decode_error(resource, &err))
    }
}

impl DirectoryApi for HttpDirectory {
    async fn list_users(&self) -> Result<Vec<UserSummary>, FetchError> {
        self.get_json(Resource::Users, &endpoints::users()).await
    }

    async fn get_user(&self, id: UserId) -> Result<Option<UserProfile>, FetchError> {
        let body: serde_json::Value = self.get_json(Resource::User, &endpoints::user(id)).await?;
        UserProfile::from_body(body).map_err(|err| decode_error(Resource::User, &err))
    }

    async fn list_posts(&self, id: UserId) -> Result<Vec<Post>, FetchError> {
        self.get_json(Resource::Posts, &endpoints::posts_by_user(id))
            .await
    }
}

fn map_request_error(resource: Resource, err: &reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::transport(resource, "Request timed out. Please try again.")
    } else {
        FetchError::transport(resource, format!("Unable to reach the server: {err}"))
    }
}

fn decode_error(resource: Resource, err: &dyn std::fmt::Display) -> FetchError {
    FetchError::transport(resource, format!("Failed to decode response: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_base_url() {
        assert!(HttpDirectory::new("not a url", DEFAULT_TIMEOUT).is_err());
    }

    #[test]
    fn keeps_base_url() -> Result<()> {
        let api = HttpDirectory::new(" https://api.example/ ", DEFAULT_TIMEOUT)?;
        assert_eq!(api.base_url().as_str(), "https://api.example/");
        Ok(())
    }
}
