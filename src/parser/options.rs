//! Pager options parsing

use crate::models::PagerOptions;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse pager options from bytes
pub fn parse_options(content: &[u8]) -> Result<PagerOptions> {
    let content_str = std::str::from_utf8(content)
        .context("Invalid UTF-8 in pager options")?;
    
    // json5 so option files can carry comments
    let options: PagerOptions = json5::from_str(content_str)
        .context("Failed to parse pager options")?;
    
    options.validate()
        .context("Invalid pager options")?;
    
    Ok(options)
}

/// Parse pager options from file path
pub fn parse_options_from_file(path: impl AsRef<Path>) -> Result<PagerOptions> {
    let path = path.as_ref();
    let content = std::fs::read(path)
        .with_context(|| format!("Failed to read options file {}", path.display()))?;
    parse_options(&content)
}

/// Parse pager options from string
pub fn parse_options_from_str(content: &str) -> Result<PagerOptions> {
    parse_options(content.as_bytes())
}
