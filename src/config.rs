// Configuration constants for pdfscan
use std::env;
use std::path::PathBuf;
use std::time::Duration;

// Extraction thresholds
pub const MIN_TEXT_CHARS: usize = 50;

// Rasterization: PDF user space is 72 DPI, render at 2x zoom
pub const RENDER_SCALE: u32 = 2;
pub const RENDER_DPI: u32 = 72 * RENDER_SCALE;

// How long `tesseract --version` may take before we give up on it
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

pub const DEFAULT_OUTPUT_NAME: &str = "output.txt";

pub const TESSERACT_ENV: &str = "PDFSCAN_TESSERACT";
pub const PDFTOPPM_ENV: &str = "PDFSCAN_PDFTOPPM";
pub const PDFINFO_ENV: &str = "PDFSCAN_PDFINFO";

/// Explicit tesseract binary from the environment, if any.
/// When set, it is the only candidate the locator considers.
pub fn tesseract_override() -> Option<PathBuf> {
    env::var_os(TESSERACT_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

// Get rasterizer command from environment or use default
pub fn pdftoppm_command() -> PathBuf {
    env::var_os(PDFTOPPM_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("pdftoppm"))
}

pub fn pdfinfo_command() -> PathBuf {
    env::var_os(PDFINFO_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("pdfinfo"))
}

/// Install locations checked when tesseract is not on PATH.
pub fn common_tesseract_paths() -> Vec<PathBuf> {
    if cfg!(windows) {
        let mut paths = vec![
            PathBuf::from(r"C:\Program Files\Tesseract-OCR\tesseract.exe"),
            PathBuf::from(r"C:\Program Files (x86)\Tesseract-OCR\tesseract.exe"),
        ];
        if let Ok(user) = env::var("USERNAME") {
            paths.push(PathBuf::from(format!(
                r"C:\Users\{}\AppData\Local\Programs\Tesseract-OCR\tesseract.exe",
                user
            )));
        }
        paths.push(PathBuf::from(r"C:\tesseract\tesseract.exe"));
        paths
    } else {
        vec![
            PathBuf::from("/usr/bin/tesseract"),
            PathBuf::from("/usr/local/bin/tesseract"),
            PathBuf::from("/opt/homebrew/bin/tesseract"),
            PathBuf::from("/opt/local/bin/tesseract"),
        ]
    }
}
