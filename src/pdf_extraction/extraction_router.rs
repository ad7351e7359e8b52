// Strategy selection between direct text extraction and OCR
//
// A document is read directly when its text layer carries at least
// MIN_TEXT_CHARS non-whitespace characters. Anything less, including a
// document lopdf cannot parse at all, is routed to OCR.

use log::{debug, info};
use std::fmt;
use std::path::Path;

use super::text_layer::{join_direct_pages, TextLayer};
use crate::config::MIN_TEXT_CHARS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMethod {
    Direct,
    Ocr,
}

impl fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionMethod::Direct => write!(f, "direct"),
            ExtractionMethod::Ocr => write!(f, "ocr"),
        }
    }
}

/// Extraction result with the method that produced it
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub text: String,
    pub method: ExtractionMethod,
    pub page_count: usize,
    pub extraction_time_ms: u64,
}

impl ExtractionResult {
    pub fn new(text: String, method: ExtractionMethod, page_count: usize) -> Self {
        Self {
            text,
            method,
            page_count,
            extraction_time_ms: 0,
        }
    }
}

/// Routing decision. The direct branch carries the text it already read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    Direct { text: String, page_count: usize },
    Ocr,
}

pub struct ExtractionRouter;

impl ExtractionRouter {
    pub fn determine_strategy(layer: &dyn TextLayer, pdf_path: &Path) -> Strategy {
        let pages = match layer.extract_pages(pdf_path) {
            Ok(pages) => pages,
            Err(e) => {
                info!("Text layer unreadable ({:#}), routing to OCR", e);
                return Strategy::Ocr;
            }
        };

        let text = join_direct_pages(&pages);
        debug!("Text layer has {} meaningful characters", meaningful_char_count(&text));

        if !has_meaningful_text(&text) {
            Strategy::Ocr
        } else {
            Strategy::Direct {
                text,
                page_count: pages.len(),
            }
        }
    }
}

/// Number of non-whitespace characters in `text`.
pub fn meaningful_char_count(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

pub fn has_meaningful_text(text: &str) -> bool {
    meaningful_char_count(text) >= MIN_TEXT_CHARS
}

/// Render one page of OCR output with its 1-based page marker.
pub fn format_ocr_page(page_number: usize, text: &str) -> String {
    format!("--- Page {} ---\n{}\n\n", page_number, text)
}
