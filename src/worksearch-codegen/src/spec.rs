//! Serde model of the API specification document.
//!
//! The document is OpenAPI-like: `paths` maps a path template to its
//! operations keyed by HTTP method, and every parameter reference resolves
//! through `components.parameters`. `BTreeMap` keeps generation
//! deterministic run to run.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ApiSpec {
    /// Path template -> HTTP method -> operation.
    pub paths: BTreeMap<String, BTreeMap<String, Operation>>,
    pub components: Components,
}

#[derive(Debug, Deserialize)]
pub struct Components {
    pub parameters: BTreeMap<String, Parameter>,
}

#[derive(Debug, Deserialize)]
pub struct Parameter {
    pub description: String,
    #[serde(default)]
    pub required: bool,
    pub schema: Schema,
}

#[derive(Debug, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub items: Option<Box<Schema>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub operation_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub summary: String,
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<ParameterRef>,
}

#[derive(Debug, Deserialize)]
pub struct ParameterRef {
    pub name: String,
}

impl ApiSpec {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let spec = serde_json::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(spec)
    }
}
