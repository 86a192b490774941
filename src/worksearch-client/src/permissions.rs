//! Document-level permission management for a content source.
//!
//! Each method is one pipeline call; the path placeholders are substituted
//! here, before the path reaches the transport.

use serde_json::{json, Value};

use crate::client::Page;
use crate::transport::Params;
use crate::{Client, Result};

impl Client {
    /// List all permissions for a content source, one page at a time.
    pub async fn list_all_permissions(
        &self,
        content_source_key: &str,
        page: Page,
    ) -> Result<Option<Value>> {
        self.get(
            &format!("sources/{content_source_key}/permissions"),
            page.to_params(),
        )
        .await
    }

    /// Fetch the permissions of a single user.
    pub async fn get_user_permissions(
        &self,
        content_source_key: &str,
        user: &str,
    ) -> Result<Option<Value>> {
        self.get(
            &format!("sources/{content_source_key}/permissions/{user}"),
            Params::new(),
        )
        .await
    }

    /// Replace the permissions of a user with the given set.
    pub async fn update_user_permissions(
        &self,
        content_source_key: &str,
        user: &str,
        permissions: &[String],
    ) -> Result<Option<Value>> {
        self.post(
            &format!("sources/{content_source_key}/permissions/{user}"),
            permissions_params(permissions),
        )
        .await
    }

    /// Add permissions to a user, keeping the ones already granted.
    pub async fn add_user_permissions(
        &self,
        content_source_key: &str,
        user: &str,
        permissions: &[String],
    ) -> Result<Option<Value>> {
        self.post(
            &format!("sources/{content_source_key}/permissions/{user}/add"),
            permissions_params(permissions),
        )
        .await
    }

    /// Remove permissions from a user.
    pub async fn remove_user_permissions(
        &self,
        content_source_key: &str,
        user: &str,
        permissions: &[String],
    ) -> Result<Option<Value>> {
        self.post(
            &format!("sources/{content_source_key}/permissions/{user}/remove"),
            permissions_params(permissions),
        )
        .await
    }
}

fn permissions_params(permissions: &[String]) -> Params {
    let mut params = Params::new();
    params.insert("permissions".to_string(), json!(permissions));
    params
}
