//! Internal endpoint generator for the Worksearch client.
//!
//! Reads the API specification document and emits one Rust module per
//! operation, each a thin wrapper delegating to the client's request
//! pipeline. Development tool only; the client library never depends on it
//! at runtime.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod generator;
mod spec;

#[derive(Parser)]
#[command(name = "worksearch-codegen", version, about = "Worksearch endpoint generator")]
struct Cli {
    /// Path to the API specification document (JSON).
    #[arg(long, default_value = "spec/search-api.json")]
    spec: PathBuf,

    /// Directory the generated modules are written to.
    #[arg(long, default_value = "generated")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("worksearch_codegen=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let spec = spec::ApiSpec::load(&cli.spec)?;
    let count = generator::generate(&spec, &cli.out)?;
    tracing::info!(operations = count, out = %cli.out.display(), "generation complete");
    Ok(())
}
