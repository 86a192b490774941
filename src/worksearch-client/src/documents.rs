//! Document indexing and deletion for a content source.

use serde_json::{json, Value};

use crate::client::Page;
use crate::transport::Params;
use crate::{Client, Result};

impl Client {
    /// Index a batch of documents into a content source. Documents are
    /// arbitrary JSON objects; the service reports per-document results.
    pub async fn index_documents(
        &self,
        content_source_key: &str,
        documents: Vec<Value>,
    ) -> Result<Option<Value>> {
        let mut params = Params::new();
        params.insert("documents".to_string(), Value::Array(documents));
        self.post(
            &format!("sources/{content_source_key}/documents/bulk_create"),
            params,
        )
        .await
    }

    /// Delete documents from a content source by id.
    pub async fn destroy_documents(
        &self,
        content_source_key: &str,
        document_ids: &[String],
    ) -> Result<Option<Value>> {
        let mut params = Params::new();
        params.insert("document_ids".to_string(), json!(document_ids));
        self.post(
            &format!("sources/{content_source_key}/documents/bulk_destroy"),
            params,
        )
        .await
    }

    /// List the documents of a content source, one page at a time.
    pub async fn list_documents(
        &self,
        content_source_key: &str,
        page: Page,
    ) -> Result<Option<Value>> {
        self.get(
            &format!("sources/{content_source_key}/documents"),
            page.to_params(),
        )
        .await
    }
}
