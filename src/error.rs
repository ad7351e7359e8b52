// Error types and their process exit codes
use std::path::PathBuf;

/// Exit code for a missing or malformed command line.
pub const EXIT_USAGE: u8 = 1;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("OCR failed: {0}")]
    OcrFailed(String),

    #[error("Failed to extract meaningful OCR text from {}. Please try a higher-quality scan.", .0.display())]
    OcrInsufficient(PathBuf),

    #[error("{} appears to need OCR but Tesseract is not available.", .0.display())]
    OcrUnavailable(PathBuf),

    #[error("Failed to extract meaningful text from {}. The PDF may be empty or scanned as images.", .0.display())]
    DirectInsufficient(PathBuf),

    #[error("File {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("Error saving text to {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No text was extracted from the PDF file")]
    NoText,
}

impl ExtractError {
    pub fn code(&self) -> u8 {
        match self {
            ExtractError::OcrFailed(_) => 3,
            ExtractError::OcrInsufficient(_) => 4,
            ExtractError::OcrUnavailable(_) => 5,
            ExtractError::DirectInsufficient(_) => 6,
            ExtractError::NotFound(_) => 7,
            ExtractError::WriteFailed { .. } => 8,
            ExtractError::NoText => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            ExtractError::OcrFailed("boom".into()),
            ExtractError::OcrInsufficient("a.pdf".into()),
            ExtractError::OcrUnavailable("a.pdf".into()),
            ExtractError::DirectInsufficient("a.pdf".into()),
            ExtractError::NotFound("a.pdf".into()),
            ExtractError::WriteFailed {
                path: "out.txt".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            },
            ExtractError::NoText,
        ];
        let codes: Vec<u8> = errors.iter().map(ExtractError::code).collect();
        assert_eq!(codes, vec![3, 4, 5, 6, 7, 8, 10]);
        assert!(!codes.contains(&EXIT_USAGE));
    }

    #[test]
    fn test_not_found_message_names_path() {
        let err = ExtractError::NotFound("missing.pdf".into());
        assert_eq!(err.to_string(), "File missing.pdf not found");
    }
}
