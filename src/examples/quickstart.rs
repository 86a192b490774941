//! Minimal end-to-end usage: register a content source, index a couple of
//! documents, grant a user permission to see them.
//!
//! ```bash
//! WORKSEARCH_ACCESS_TOKEN=... cargo run --example quickstart
//! ```

use serde_json::json;
use worksearch_client::{Client, Config, Page};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let token = std::env::var("WORKSEARCH_ACCESS_TOKEN").unwrap_or_default();
    let client = Client::new(Config::new("http://localhost:3002/api/ws/v1", token))?;

    let source = client
        .create_content_source("quickstart-wiki")
        .await?
        .expect("create returns the new source");
    let key = source["key"].as_str().expect("source key").to_string();
    println!("created content source {key}");

    let receipt = client
        .index_documents(
            &key,
            vec![
                json!({"id": "doc-1", "title": "Onboarding guide", "body": "Welcome!"}),
                json!({"id": "doc-2", "title": "Holiday calendar", "body": "See HR portal."}),
            ],
        )
        .await?;
    println!("indexed: {receipt:?}");

    client
        .add_user_permissions(&key, "jane", &["read".to_string()])
        .await?;

    let permissions = client.list_all_permissions(&key, Page::default()).await?;
    println!("permissions: {permissions:?}");

    Ok(())
}
