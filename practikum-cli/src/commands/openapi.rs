//! OpenAPI export command

use anyhow::{Context, Result};
use practikum_server::openapi::ApiDoc;
use utoipa::OpenApi;

/// Write the API description as pretty-printed JSON
pub fn openapi(output: &str) -> Result<()> {
    let document = ApiDoc::openapi().to_pretty_json()?;
    std::fs::write(output, document)
        .with_context(|| format!("Failed to write output file: {}", output))?;

    tracing::debug!("Wrote OpenAPI document to {}", output);
    println!("Saved {}", output);
    Ok(())
}
