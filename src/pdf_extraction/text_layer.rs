// Direct extraction of the embedded text layer
use anyhow::Result;
use log::{debug, warn};
use std::path::Path;

use super::lopdf_helper::load_pdf;

/// Source of a document's embedded text, one string per page in page order.
pub trait TextLayer {
    fn extract_pages(&self, pdf_path: &Path) -> Result<Vec<String>>;
}

/// Reads the text layer with lopdf, no rendering involved.
pub struct LopdfTextLayer;

impl TextLayer for LopdfTextLayer {
    fn extract_pages(&self, pdf_path: &Path) -> Result<Vec<String>> {
        let document = load_pdf(pdf_path)?;
        let pages = document.get_pages();
        debug!("Reading text layer of {} ({} pages)", pdf_path.display(), pages.len());

        let mut texts = Vec::with_capacity(pages.len());
        for &page_number in pages.keys() {
            match document.extract_text(&[page_number]) {
                Ok(text) => texts.push(text),
                Err(e) => {
                    // An undecodable page counts as empty rather than failing the document
                    warn!("Could not decode text on page {}: {}", page_number, e);
                    texts.push(String::new());
                }
            }
        }
        Ok(texts)
    }
}

/// Concatenate per-page text, each page terminated by a newline.
pub fn join_direct_pages(pages: &[String]) -> String {
    let mut text = String::new();
    for page in pages {
        text.push_str(page);
        text.push('\n');
    }
    text
}
