//! Common type definitions for the encode run.
//!
//! # Overview
//!
//! - [`Status`]: per-style result label shown in the summary
//! - [`Encoded`]: what was produced for a style whose archive was found
//! - [`StyleOutcome`]: result of processing one style
//! - [`Summary`]: all outcomes of a run, in style order

use std::path::PathBuf;

use strum::Display;

use crate::cipher::Fingerprint;

/// Result label for one style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Status {
    #[strum(to_string = "encoded")]
    Encoded,

    #[strum(to_string = "not found")]
    NotFound,
}

/// Output produced for one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// Source archive that was read.
    pub source: PathBuf,

    /// Obfuscated name used in every destination.
    pub output_name: String,

    /// Every file written, style folder first, then the common folder.
    pub targets: Vec<PathBuf>,

    /// Plaintext size in bytes.
    pub size: u64,

    pub fingerprint: Fingerprint,
}

/// Result of processing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleOutcome {
    Encoded { style: String, encoded: Encoded },
    NotFound { style: String, expected: PathBuf },
}

impl StyleOutcome {
    #[inline]
    pub fn style(&self) -> &str {
        match self {
            Self::Encoded { style, .. } | Self::NotFound { style, .. } => style,
        }
    }

    #[inline]
    pub fn status(&self) -> Status {
        match self {
            Self::Encoded { .. } => Status::Encoded,
            Self::NotFound { .. } => Status::NotFound,
        }
    }
}

/// All per-style outcomes of a run.
#[derive(Debug, Default)]
pub struct Summary {
    pub outcomes: Vec<StyleOutcome>,
}

impl Summary {
    /// Whether at least one style archive was found and encoded.
    pub fn found_any(&self) -> bool {
        self.outcomes.iter().any(|outcome| outcome.status() == Status::Encoded)
    }

    pub fn encoded(&self) -> impl Iterator<Item = (&str, &Encoded)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            StyleOutcome::Encoded { style, encoded } => Some((style.as_str(), encoded)),
            StyleOutcome::NotFound { .. } => None,
        })
    }
}
