//! Text extraction from PDF documents with a Tesseract OCR fallback for
//! scanned pages.
//!
//! The flow is linear: read the embedded text layer, and if it carries too
//! little text, rasterize every page with `pdftoppm` and recognize it with
//! `tesseract`. Every failure maps to a fixed process exit code through
//! [`ExtractError::code`].

pub mod config;
pub mod error;
pub mod output;
pub mod pdf_extraction;
pub mod pipeline;
pub mod system_pdf_renderer;

pub use error::{ExtractError, EXIT_USAGE};
pub use pdf_extraction::{ExtractionMethod, ExtractionResult};
pub use pipeline::{Extractor, Mode};
