// PDF extraction module
pub mod extraction_router;
pub mod lopdf_helper;
pub mod ocr_engine;
pub mod text_layer;

pub use extraction_router::{ExtractionMethod, ExtractionResult, ExtractionRouter, Strategy};
pub use ocr_engine::{OcrEngine, Tesseract};
pub use text_layer::{LopdfTextLayer, TextLayer};
