// OCR Engine module for Tesseract
use anyhow::{bail, Context, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Duration;

use crate::config;

/// Anything that can turn a rendered page image into text.
pub trait OcrEngine {
    fn recognize(&self, image_path: &Path) -> Result<String>;
}

/// A tesseract binary, found on PATH or at a fixed install location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tesseract {
    command: PathBuf,
    on_path: bool,
}

impl Tesseract {
    pub fn at(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            on_path: false,
        }
    }

    /// Find a tesseract candidate without checking that it actually runs.
    ///
    /// An explicit `PDFSCAN_TESSERACT` wins outright. Otherwise PATH is
    /// probed first, then the common install locations for this platform.
    pub fn locate() -> Option<Self> {
        if let Some(command) = config::tesseract_override() {
            debug!("Using tesseract from {}: {}", config::TESSERACT_ENV, command.display());
            return Some(Self::at(command));
        }

        if probe(Path::new("tesseract"), config::PROBE_TIMEOUT) {
            return Some(Self {
                command: PathBuf::from("tesseract"),
                on_path: true,
            });
        }

        config::common_tesseract_paths()
            .into_iter()
            .find(|path| path.exists())
            .map(Self::at)
    }

    /// True when `tesseract --version` exits cleanly within the probe timeout.
    pub fn is_available(&self) -> bool {
        probe(&self.command, config::PROBE_TIMEOUT)
    }

    pub fn command(&self) -> &Path {
        &self.command
    }

    pub fn on_path(&self) -> bool {
        self.on_path
    }
}

impl OcrEngine for Tesseract {
    fn recognize(&self, image_path: &Path) -> Result<String> {
        debug!("Running {} on {}", self.command.display(), image_path.display());

        let output = Command::new(&self.command)
            .arg(image_path)
            .arg("stdout")
            .output()
            .with_context(|| format!("failed to start {}", self.command.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "tesseract failed on {}: {}",
                image_path.display(),
                stderr.trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn probe(command: &Path, timeout: Duration) -> bool {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            warn!("Could not start probe runtime: {}", e);
            return false;
        }
    };
    runtime.block_on(probe_version(command, timeout))
}

async fn probe_version(command: &Path, timeout: Duration) -> bool {
    let mut child = match tokio::process::Command::new(command)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            debug!("{} did not start: {}", command.display(), e);
            return false;
        }
    };

    match tokio::time::timeout(timeout, child.wait()).await {
        Ok(Ok(status)) => status.success(),
        Ok(Err(e)) => {
            debug!("Waiting on {} failed: {}", command.display(), e);
            false
        }
        Err(_) => {
            warn!("{} --version timed out after {:?}", command.display(), timeout);
            let _ = child.kill().await;
            false
        }
    }
}
