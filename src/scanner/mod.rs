//! Scanner module — dispatch by file extension.

pub mod script;

use crate::model::DeclareRecord;
use anyhow::{anyhow, Context, Result};
use std::path::Path;

/// File extensions recognized as inputs.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["js", "mjs", "ts", "dk", "json"];

/// Collect the declarations of a source file based on its extension.
pub fn scan_file(path: &Path, content: &str) -> Result<Vec<DeclareRecord>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("js" | "mjs" | "ts" | "dk") => Ok(script::scan(content)),
        Some("json") => parse_declarations(content)
            .with_context(|| format!("invalid declaration file: {}", path.display())),
        _ => Err(anyhow!("unsupported file type: {}", path.display())),
    }
}

/// Parse a JSON array of declarations, as produced by an external scanner.
pub fn parse_declarations(content: &str) -> Result<Vec<DeclareRecord>> {
    Ok(serde_json::from_str(content)?)
}
