//! Per-style encode and fan-out.
//!
//! For each configured style the expected source archive is located,
//! encrypted exactly once, and the same ciphertext is written under the
//! obfuscated name to the style folder and to the common folder. A missing
//! archive only affects its own style. Read and write failures abort the run.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::cipher::{CipherContext, Fingerprint};
use crate::config::Config;
use crate::layout::Layout;
use crate::naming::{encode_name, ensure_safe_component};
use crate::types::{Encoded, StyleOutcome, Summary};
use crate::ui;

/// Encodes every configured style of one run.
pub struct Pipeline<'a> {
    config: &'a Config,
    layout: &'a Layout,
    cipher: &'a CipherContext,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a Config, layout: &'a Layout, cipher: &'a CipherContext) -> Self {
        Self { config, layout, cipher }
    }

    /// Processes all styles in order.
    ///
    /// Reports "no files were found" when no style archive exists; that case
    /// is not an error.
    ///
    /// # Errors
    ///
    /// Returns the first fatal I/O failure.
    pub fn run(&self) -> Result<Summary> {
        let mut summary = Summary::default();

        for dir in self.layout.styles() {
            summary.outcomes.push(self.encode_style(&dir.style, &dir.path)?);
        }

        if !summary.found_any() {
            ui::show_no_files();
        }

        Ok(summary)
    }

    #[instrument(skip_all, fields(style = %style))]
    fn encode_style(&self, style: &str, style_dir: &Path) -> Result<StyleOutcome> {
        let file_name = self.config.source_file_name(style);
        let source = self.layout.source().join(&file_name);

        let plaintext = match fs::read(&source) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                ui::show_not_found(&source);
                return Ok(StyleOutcome::NotFound { style: style.to_owned(), expected: source });
            }
            Err(e) => return Err(e).with_context(|| format!("failed to read source archive: {}", source.display())),
        };

        let ciphertext = self.cipher.encrypt(&plaintext);
        debug!(plaintext = plaintext.len(), ciphertext = ciphertext.len(), "encrypted");

        let output_name = encode_name(&file_name);
        ensure_safe_component(&output_name)?;

        let fingerprint = Fingerprint::of(&ciphertext);
        let mut targets = Vec::with_capacity(2);
        for dir in [style_dir, self.layout.common()] {
            let path = write_output(dir, &output_name, &ciphertext)?;
            debug!(path = %path.display(), blake3 = %fingerprint.to_hex(), "written");
            targets.push(path);
        }

        let encoded = Encoded { source, output_name, targets, size: plaintext.len() as u64, fingerprint };
        Ok(StyleOutcome::Encoded { style: style.to_owned(), encoded })
    }
}

fn write_output(dir: &Path, name: &str, ciphertext: &[u8]) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, ciphertext).with_context(|| format!("failed to write encoded file: {}", path.display()))?;
    ui::show_encoded(&path);
    Ok(path)
}
