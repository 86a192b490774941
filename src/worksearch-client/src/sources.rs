//! Content source management.

use serde_json::{json, Value};

use crate::client::Page;
use crate::transport::Params;
use crate::{Client, Result};

impl Client {
    /// List the content sources registered with the service.
    pub async fn list_content_sources(&self, page: Page) -> Result<Option<Value>> {
        self.get("sources", page.to_params()).await
    }

    /// Fetch one content source by key.
    pub async fn get_content_source(&self, content_source_key: &str) -> Result<Option<Value>> {
        self.get(&format!("sources/{content_source_key}"), Params::new())
            .await
    }

    /// Register a new content source.
    pub async fn create_content_source(&self, name: &str) -> Result<Option<Value>> {
        let mut params = Params::new();
        params.insert("name".to_string(), json!(name));
        self.post("sources", params).await
    }

    /// Remove a content source and everything indexed into it.
    pub async fn destroy_content_source(&self, content_source_key: &str) -> Result<Option<Value>> {
        self.delete(&format!("sources/{content_source_key}"), Params::new())
            .await
    }
}
