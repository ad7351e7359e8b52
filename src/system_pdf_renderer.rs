// System PDF renderer using pdftoppm
use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use crate::config;
use crate::pdf_extraction::lopdf_helper;

/// A rasterized page on disk. The backing directory is removed on drop.
#[derive(Debug)]
pub struct RenderedPage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    _dir: TempDir,
}

impl RenderedPage {
    pub fn new(dir: TempDir, path: PathBuf, width: u32, height: u32) -> Self {
        Self {
            path,
            width,
            height,
            _dir: dir,
        }
    }
}

pub trait PageRasterizer {
    fn page_count(&self, pdf_path: &Path) -> Result<usize>;

    /// Render a 0-based page to a PNG image.
    fn render_page(&self, pdf_path: &Path, page_index: usize) -> Result<RenderedPage>;
}

pub struct SystemPdfRenderer {
    command: PathBuf,
    info_command: PathBuf,
    dpi: u32,
}

impl SystemPdfRenderer {
    pub fn new() -> Self {
        Self::with_commands(config::pdftoppm_command(), config::pdfinfo_command())
    }

    pub fn with_command(command: impl Into<PathBuf>) -> Self {
        Self::with_commands(command, config::pdfinfo_command())
    }

    pub fn with_commands(command: impl Into<PathBuf>, info_command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            info_command: info_command.into(),
            dpi: config::RENDER_DPI,
        }
    }

    // Poppler repairs damaged files lopdf rejects, so ask it first
    fn poppler_page_count(&self, pdf_path: &Path) -> Result<usize> {
        let output = Command::new(&self.info_command)
            .arg(pdf_path)
            .output()
            .with_context(|| format!("failed to start {}", self.info_command.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("pdfinfo failed: {}", stderr.trim());
        }

        parse_page_count(&String::from_utf8_lossy(&output.stdout))
            .ok_or_else(|| anyhow!("pdfinfo reported no page count"))
    }
}

impl Default for SystemPdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRasterizer for SystemPdfRenderer {
    fn page_count(&self, pdf_path: &Path) -> Result<usize> {
        match self.poppler_page_count(pdf_path) {
            Ok(count) => Ok(count),
            Err(e) => {
                debug!("{:#}; counting pages with lopdf", e);
                lopdf_helper::get_page_count(pdf_path)
            }
        }
    }

    fn render_page(&self, pdf_path: &Path, page_index: usize) -> Result<RenderedPage> {
        // pdftoppm pages are 1-based
        let page = (page_index + 1).to_string();
        debug!("Rendering page {} of {} at {} DPI", page, pdf_path.display(), self.dpi);

        let temp_dir = TempDir::new()?;
        let output_prefix = temp_dir.path().join("page");

        let output = Command::new(&self.command)
            .arg("-png")
            .arg("-r")
            .arg(self.dpi.to_string())
            .arg("-f")
            .arg(&page)
            .arg("-l")
            .arg(&page)
            .arg(pdf_path)
            .arg(&output_prefix)
            .output()
            .with_context(|| format!("failed to start {}", self.command.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("pdftoppm failed on page {}: {}", page, stderr.trim());
        }

        // The page suffix is zero-padded to the width of the page count,
        // so take whichever PNG was produced
        let image_path = find_png(temp_dir.path())?
            .ok_or_else(|| anyhow!("pdftoppm produced no image for page {}", page))?;

        let (width, height) = image::image_dimensions(&image_path)
            .with_context(|| format!("unreadable page image {}", image_path.display()))?;
        debug!("Page {} rendered: {}x{}", page, width, height);

        Ok(RenderedPage::new(temp_dir, image_path, width, height))
    }
}

/// Value of the `Pages:` line in `pdfinfo` output.
fn parse_page_count(info: &str) -> Option<usize> {
    info.lines()
        .find_map(|line| line.strip_prefix("Pages:"))
        .and_then(|value| value.trim().parse().ok())
}

fn find_png(dir: &Path) -> Result<Option<PathBuf>> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("png")) {
            return Ok(Some(path));
        }
    }
    Ok(None)
}
