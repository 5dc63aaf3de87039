//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the documentation model directly.

use crate::model::Documentation;
use crate::render::Renderer;
use anyhow::Result;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Documentation) -> Result<String> {
        let mut out = serde_json::to_string_pretty(doc)?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
