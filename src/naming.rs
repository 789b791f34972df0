//! Reversible output filename obfuscation.
//!
//! Output files are named with the unpadded standard base64 encoding of the
//! UTF-8 source filename. This only hides the name from a casual glance; it
//! is trivially reversible and provides no confidentiality.

use anyhow::{Context, Result, ensure};
use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD;

/// Encodes a source filename into its obfuscated output name.
#[inline]
#[must_use]
pub fn encode_name(name: &str) -> String {
    STANDARD_NO_PAD.encode(name.as_bytes())
}

/// Recovers the original filename from an obfuscated output name.
///
/// # Errors
///
/// Returns an error if `encoded` is not valid unpadded base64 or does not
/// decode to UTF-8.
pub fn decode_name(encoded: &str) -> Result<String> {
    let bytes = STANDARD_NO_PAD.decode(encoded).with_context(|| format!("not an encoded file name: {encoded}"))?;
    String::from_utf8(bytes).with_context(|| format!("encoded file name is not valid UTF-8: {encoded}"))
}

/// Checks that an encoded name can be used as a single path component.
///
/// The standard alphabet includes `/`, which would turn the name into a
/// nested path.
pub fn ensure_safe_component(encoded: &str) -> Result<()> {
    ensure!(!encoded.is_empty(), "encoded file name is empty");
    ensure!(!encoded.contains(['/', '\\']), "encoded file name contains a path separator: {encoded}");
    Ok(())
}
