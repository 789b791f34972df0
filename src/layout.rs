//! Directory layout of an encode run.
//!
//! Everything is resolved against the configured base directory:
//!
//! ```text
//! <base>/SourceFolder/
//! <base>/DestinationFolder/
//! <base>/DestinationFolder/common/
//! <base>/DestinationFolder/<style>/<patch-version>/
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::{COMMON_FOLDER, Config, DESTINATION_FOLDER, SOURCE_FOLDER};
use crate::ui;

/// Output folder of one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDir {
    pub style: String,
    pub path: PathBuf,
}

/// Resolved folders for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    source: PathBuf,
    destination: PathBuf,
    common: PathBuf,
    styles: Vec<StyleDir>,
}

impl Layout {
    /// Derives every folder from `config` without touching the filesystem.
    pub fn resolve(config: &Config) -> Self {
        let source = config.base_dir.join(SOURCE_FOLDER);
        let destination = config.base_dir.join(DESTINATION_FOLDER);
        let common = destination.join(COMMON_FOLDER);
        let styles = config.styles.iter().map(|style| StyleDir { style: style.clone(), path: destination.join(style).join(&config.patch_version) }).collect();

        Self { source, destination, common, styles }
    }

    #[inline]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[inline]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    #[inline]
    pub fn common(&self) -> &Path {
        &self.common
    }

    #[inline]
    pub fn styles(&self) -> &[StyleDir] {
        &self.styles
    }

    /// Output folder of `style`, if it is configured.
    pub fn style_dir(&self, style: &str) -> Option<&Path> {
        self.styles.iter().find(|dir| dir.style == style).map(|dir| dir.path.as_path())
    }

    /// Creates every folder of the layout. Existing folders are left as they are.
    ///
    /// # Errors
    ///
    /// Any failure is fatal: the run cannot proceed without its folders.
    pub fn create(&self) -> Result<()> {
        create_dir(&self.source, "Source")?;
        create_dir(&self.destination, "Destination")?;
        create_dir(&self.common, "Common")?;

        for dir in &self.styles {
            create_dir(&dir.path, "Style")?;
        }

        Ok(())
    }
}

fn create_dir(path: &Path, label: &str) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("failed to create {} folder: {}", label.to_lowercase(), path.display()))?;
    ui::show_folder_ready(label, path);
    Ok(())
}
