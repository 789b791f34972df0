//! patchcrypt - encrypts shader patch archives for distribution.
//!
//! One run:
//! - creates the source, destination, common and per-style folders
//! - deletes source files that lack the patch version tag
//! - clears the common output folder
//! - encrypts each style's archive once with AES-128-CBC and writes it, under
//!   a base64-obfuscated name, to its style folder and the common folder

pub mod app;
pub mod cipher;
pub mod cleanup;
pub mod config;
pub mod layout;
pub mod naming;
pub mod pipeline;
pub mod reveal;
pub mod secret;
pub mod types;
pub mod ui;
