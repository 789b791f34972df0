//! Global Configuration Constants
//!
//! This module holds every naming and cryptographic parameter used by the
//! encode run. The constants are the shipped defaults; the runtime [`Config`]
//! is built from them and handed to each component, so tests and the command
//! line can replace individual values without touching a static.
//!
//! ## Naming
//!
//! Source archives follow the grammar
//! `<PRODUCT_PREFIX><style><VERSION> + <PATCH_NAME><PATCH_VERSION><ARCHIVE_EXTENSION>`,
//! for example `ComplementaryReimagined_r5.5.1 + EuphoriaPatches_1.6.3.zip`.
//!
//! ## Key Material
//!
//! The key and IV are fixed for the lifetime of a release. They are not
//! secret in any meaningful sense (they ship inside the loader that reads the
//! output), but they are still wrapped in [`SecretBytes`] so they never end up
//! in logs.

use std::path::PathBuf;

use crate::secret::SecretBytes;

/// Fixed prefix of every source archive name.
pub const PRODUCT_PREFIX: &str = "Complementary";

/// Name of the patch bundled into each archive.
pub const PATCH_NAME: &str = "EuphoriaPatches";

/// Base shader version suffix, including its leading underscore.
pub const VERSION: &str = "_r5.5.1";

/// Patch version suffix.
///
/// Doubles as the version tag: source files whose name lacks it are deleted
/// before encoding, and it names the per-style output subfolder.
pub const PATCH_VERSION: &str = "_1.6.3";

/// Styles processed on every run, in order.
pub const STYLES: &[&str] = &["Reimagined", "Unbound"];

pub const ARCHIVE_EXTENSION: &str = ".zip";

/// Literal separator between the base shader name and the patch name.
pub const NAME_SEPARATOR: &str = " + ";

// === Filesystem Layout ===

/// Input folder, resolved against the base directory.
pub const SOURCE_FOLDER: &str = "SourceFolder";

/// Output root, resolved against the base directory.
pub const DESTINATION_FOLDER: &str = "DestinationFolder";

/// Flat aggregation folder under the output root. Cleared on every run.
pub const COMMON_FOLDER: &str = "common";

// === AES-128-CBC Parameters ===

/// Size of the AES-128 key in bytes.
pub const KEY_SIZE: usize = 16;

/// Size of the CBC initialization vector in bytes (one AES block).
pub const IV_SIZE: usize = 16;

/// Embedded encryption key.
pub const KEY: [u8; KEY_SIZE] = [0xa3, 0x46, 0xfb, 0xcf, 0xcd, 0x8f, 0x67, 0x6d, 0x45, 0x12, 0xf3, 0x3f, 0x96, 0xee, 0x73, 0x06];

/// Embedded initialization vector. Reused for every file in every run.
pub const IV: [u8; IV_SIZE] = [0xa5, 0xc2, 0x5d, 0x37, 0x3a, 0x15, 0xc4, 0xae, 0x52, 0xca, 0x57, 0xa0, 0xa8, 0x70, 0x2d, 0x97];

/// Runtime configuration for one encode run.
///
/// Every field starts at the matching constant above. The command line may
/// override naming fields; key and IV are only replaced programmatically.
#[derive(Debug)]
pub struct Config {
    /// Directory the source and destination folders are resolved against.
    pub base_dir: PathBuf,
    pub product_prefix: String,
    pub patch_name: String,
    pub version: String,
    pub patch_version: String,
    pub styles: Vec<String>,
    pub key: SecretBytes,
    pub iv: SecretBytes,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            product_prefix: PRODUCT_PREFIX.to_owned(),
            patch_name: PATCH_NAME.to_owned(),
            version: VERSION.to_owned(),
            patch_version: PATCH_VERSION.to_owned(),
            styles: STYLES.iter().map(|s| (*s).to_owned()).collect(),
            key: SecretBytes::new(&KEY),
            iv: SecretBytes::new(&IV),
        }
    }
}

impl Config {
    /// Creates the default configuration rooted at `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into(), ..Self::default() }
    }

    /// Expected source archive name for `style`.
    #[must_use]
    pub fn source_file_name(&self, style: &str) -> String {
        format!("{}{style}{}{NAME_SEPARATOR}{}{}{ARCHIVE_EXTENSION}", self.product_prefix, self.version, self.patch_name, self.patch_version)
    }

    /// The substring a source file must contain to survive cleanup.
    #[inline]
    #[must_use]
    pub fn version_tag(&self) -> &str {
        &self.patch_version
    }
}
