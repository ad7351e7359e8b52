// Persisting extracted text
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_OUTPUT_NAME;
use crate::error::ExtractError;

/// `output.txt` next to the input PDF.
pub fn default_output_path(pdf_path: &Path) -> PathBuf {
    match pdf_path.parent() {
        Some(dir) => dir.join(DEFAULT_OUTPUT_NAME),
        None => PathBuf::from(DEFAULT_OUTPUT_NAME),
    }
}

pub fn save_text(text: &str, path: &Path) -> Result<(), ExtractError> {
    fs::write(path, text.as_bytes()).map_err(|source| ExtractError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Text successfully saved to {}", path.display());
    Ok(())
}
