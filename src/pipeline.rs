// Extraction pipeline: route, extract, persist
use log::info;
use std::path::Path;
use std::time::Instant;

use crate::config::MIN_TEXT_CHARS;
use crate::error::ExtractError;
use crate::output;
use crate::pdf_extraction::extraction_router::{format_ocr_page, meaningful_char_count};
use crate::pdf_extraction::{
    ExtractionMethod, ExtractionResult, ExtractionRouter, OcrEngine, Strategy, TextLayer,
};
use crate::system_pdf_renderer::PageRasterizer;

/// How the extractor is allowed to choose between direct text and OCR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Read the text layer and fall back to OCR when it is too sparse
    #[default]
    Auto,
    /// Skip the text layer entirely
    ForceOcr,
    /// Never run OCR; a sparse text layer is an error
    NoOcr,
}

pub struct Extractor<'a> {
    text_layer: &'a dyn TextLayer,
    rasterizer: &'a dyn PageRasterizer,
    ocr: Option<&'a dyn OcrEngine>,
    mode: Mode,
}

impl<'a> Extractor<'a> {
    /// `ocr` is `None` when no working OCR engine was found.
    pub fn new(
        text_layer: &'a dyn TextLayer,
        rasterizer: &'a dyn PageRasterizer,
        ocr: Option<&'a dyn OcrEngine>,
    ) -> Self {
        Self {
            text_layer,
            rasterizer,
            ocr,
            mode: Mode::Auto,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Extract and write the text to `output_path`.
    pub fn run(&self, pdf_path: &Path, output_path: &Path) -> Result<ExtractionResult, ExtractError> {
        let result = self.extract(pdf_path)?;
        // Unreachable while both paths enforce MIN_TEXT_CHARS
        if result.text.is_empty() {
            return Err(ExtractError::NoText);
        }
        output::save_text(&result.text, output_path)?;
        Ok(result)
    }

    pub fn extract(&self, pdf_path: &Path) -> Result<ExtractionResult, ExtractError> {
        if !pdf_path.exists() {
            return Err(ExtractError::NotFound(pdf_path.to_path_buf()));
        }
        info!("Processing {}...", pdf_path.display());

        let start = Instant::now();
        let strategy = match self.mode {
            Mode::ForceOcr => Strategy::Ocr,
            Mode::Auto => ExtractionRouter::determine_strategy(self.text_layer, pdf_path),
            Mode::NoOcr => match ExtractionRouter::determine_strategy(self.text_layer, pdf_path) {
                Strategy::Ocr => return Err(ExtractError::DirectInsufficient(pdf_path.to_path_buf())),
                direct => direct,
            },
        };

        let mut result = match strategy {
            Strategy::Direct { text, page_count } => {
                info!("{} can be processed normally...", pdf_path.display());
                ExtractionResult::new(text, ExtractionMethod::Direct, page_count)
            }
            Strategy::Ocr => {
                let engine = self
                    .ocr
                    .ok_or_else(|| ExtractError::OcrUnavailable(pdf_path.to_path_buf()))?;
                info!("{} requires OCR processing...", pdf_path.display());
                let (text, recognized, page_count) = self.extract_with_ocr(engine, pdf_path)?;
                if recognized < MIN_TEXT_CHARS {
                    return Err(ExtractError::OcrInsufficient(pdf_path.to_path_buf()));
                }
                ExtractionResult::new(text, ExtractionMethod::Ocr, page_count)
            }
        };

        result.extraction_time_ms = start.elapsed().as_millis() as u64;
        Ok(result)
    }

    fn extract_with_ocr(
        &self,
        engine: &dyn OcrEngine,
        pdf_path: &Path,
    ) -> Result<(String, usize, usize), ExtractError> {
        let ocr_failed =
            |e: anyhow::Error| ExtractError::OcrFailed(format!("Error performing OCR on {}: {:#}", pdf_path.display(), e));

        let page_count = self.rasterizer.page_count(pdf_path).map_err(ocr_failed)?;
        let mut text = String::new();
        // Page markers are excluded from the threshold count
        let mut recognized = 0;

        for page_index in 0..page_count {
            let page = self.rasterizer.render_page(pdf_path, page_index).map_err(ocr_failed)?;
            let page_text = engine.recognize(&page.path).map_err(ocr_failed)?;
            recognized += meaningful_char_count(&page_text);
            text.push_str(&format_ocr_page(page_index + 1, &page_text));
            info!("Processed page {}", page_index + 1);
        }

        Ok((text, recognized, page_count))
    }
}
