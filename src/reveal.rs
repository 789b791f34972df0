//! Inverse of one encode output: recover the archive name and its content.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail, ensure};
use tracing::debug;

use crate::cipher::CipherContext;
use crate::naming::decode_name;

/// Decrypts the encoded file `input` into `output_dir`, under its original name.
///
/// # Errors
///
/// Fails if the file name does not decode, the decoded name is not a plain
/// file name, the content does not decrypt, or the target already exists.
pub fn reveal(cipher: &CipherContext, input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let encoded = input.file_name().and_then(|name| name.to_str()).ok_or_else(|| anyhow!("input has no usable file name: {}", input.display()))?;
    let original = decode_name(encoded)?;
    ensure!(Path::new(&original).file_name().is_some_and(|name| name == original.as_str()), "decoded name is not a plain file name: {original}");

    let ciphertext = fs::read(input).with_context(|| format!("failed to read encoded file: {}", input.display()))?;
    let plaintext = cipher.decrypt(&ciphertext).with_context(|| format!("failed to decrypt: {}", input.display()))?;
    debug!(ciphertext = ciphertext.len(), plaintext = plaintext.len(), "decrypted");

    let output = output_dir.join(&original);
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&output) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => bail!("output file already exists: {}", output.display()),
        Err(e) => return Err(e).with_context(|| format!("failed to create revealed file: {}", output.display())),
    };
    file.write_all(&plaintext).with_context(|| format!("failed to write revealed file: {}", output.display()))?;

    Ok(output)
}
