//! # Cryptographic Operations Module
//!
//! AES-128 in CBC mode with PKCS#7 padding, keyed once per run with the
//! embedded key and IV.
//!
//! ## Key Concepts
//!
//! - **Single initialization**: [`CipherContext::new`] validates the key
//!   material and builds the block cipher once. Every file processed during
//!   the run reuses that context.
//! - **Determinism**: the IV is fixed, so encrypting the same bytes twice
//!   yields identical ciphertext. Output is meant to be reproducible, not
//!   semantically secure.
//! - **Shared read-only state**: encryption clones the keyed mode state per
//!   call and never mutates the context, so a `&CipherContext` can be shared
//!   freely.

use aes::Aes128;
use anyhow::{Result, anyhow, ensure};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

mod fingerprint;

pub use fingerprint::Fingerprint;

use crate::config::{IV_SIZE, KEY_SIZE};
use crate::secret::SecretBytes;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;

/// AES block size in bytes; ciphertext is always a non-zero multiple of it.
pub const BLOCK_SIZE: usize = 16;

/// Keyed AES-128-CBC state shared across the whole run.
pub struct CipherContext {
    encryptor: Aes128CbcEnc,
    decryptor: Aes128CbcDec,
}

impl CipherContext {
    /// Builds the cipher from raw key material.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not 16 bytes or the IV is not 16 bytes.
    /// Callers treat this as fatal: nothing can be produced without a cipher.
    pub fn new(key: &SecretBytes, iv: &SecretBytes) -> Result<Self> {
        ensure!(key.len() == KEY_SIZE, "invalid key length: expected {} bytes, got {}", KEY_SIZE, key.len());
        ensure!(iv.len() == IV_SIZE, "invalid IV length: expected {} bytes, got {}", IV_SIZE, iv.len());

        let encryptor = Aes128CbcEnc::new_from_slices(key.expose_secret(), iv.expose_secret()).map_err(|e| anyhow!("aes-cbc encryptor init failed: {e}"))?;
        let decryptor = Aes128CbcDec::new_from_slices(key.expose_secret(), iv.expose_secret()).map_err(|e| anyhow!("aes-cbc decryptor init failed: {e}"))?;

        Ok(Self { encryptor, decryptor })
    }

    /// Encrypts `plaintext`, appending PKCS#7 padding.
    ///
    /// Empty input is valid and produces a single padding block.
    #[inline]
    #[must_use]
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        self.encryptor.clone().encrypt_padded_vec_mut::<Pkcs7>(plaintext)
    }

    /// Decrypts `ciphertext` and strips its padding.
    ///
    /// # Errors
    ///
    /// Returns an error if the length is not a positive multiple of the block
    /// size or the padding is malformed (wrong key, truncated or foreign data).
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        ensure!(
            !ciphertext.is_empty() && ciphertext.len().is_multiple_of(BLOCK_SIZE),
            "invalid ciphertext length {}: must be a positive multiple of {}",
            ciphertext.len(),
            BLOCK_SIZE
        );

        self.decryptor.clone().decrypt_padded_vec_mut::<Pkcs7>(ciphertext).map_err(|_| anyhow!("aes-cbc unpadding failed"))
    }
}
