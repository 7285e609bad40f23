//! Browser client for the user directory endpoints. Endpoint paths come from
//! `userdir_directory::api::endpoints` so every front end hits the same URLs.

use crate::app_lib::get_json;
use userdir_directory::{
    api::endpoints, DirectoryApi, FetchError, Post, Resource, UserId, UserProfile, UserSummary,
};

/// `DirectoryApi` over `gloo-net`, using the configured API base URL.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDirectory;

impl DirectoryApi for BrowserDirectory {
    async fn list_users(&self) -> Result<Vec<UserSummary>, FetchError> {
        get_json(Resource::Users, &endpoints::users()).await
    }

    async fn get_user(&self, id: UserId) -> Result<Option<UserProfile>, FetchError> {
        let body: serde_json::Value = get_json(Resource::User, &endpoints::user(id)).await?;
        UserProfile::from_body(body).map_err(|err| {
            FetchError::transport(Resource::User, format!("Failed to decode response: {err}"))
        })
    }

    async fn list_posts(&self, id: UserId) -> Result<Vec<Post>, FetchError> {
        get_json(Resource::Posts, &endpoints::posts_by_user(id)).await
    }
}
