// lopdf helper - Pure Rust PDF operations
use anyhow::{Context, Result};
use lopdf::Document;
use std::path::Path;

/// Load a PDF document using lopdf
pub fn load_pdf(path: &Path) -> Result<Document> {
    Document::load(path).with_context(|| format!("failed to parse PDF {}", path.display()))
}

pub fn get_page_count(path: &Path) -> Result<usize> {
    Ok(load_pdf(path)?.get_pages().len())
}
