use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::Level;

use crate::cipher::CipherContext;
use crate::cleanup::{clear_folder, delete_non_matching};
use crate::config::Config;
use crate::layout::Layout;
use crate::pipeline::Pipeline;
use crate::reveal::reveal;
use crate::types::Summary;

#[derive(Subcommand)]
pub enum Commands {
    /// Clean the source folder, clear the common folder and encode every style (default).
    Encode,

    /// Decrypt an encoded output back to its original archive.
    Reveal {
        /// Encoded file to decrypt.
        #[arg(short, long)]
        input: PathBuf,

        /// Directory to write the archive to (defaults to the input's folder).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Overrides for the archive naming constants. Ignored by `reveal`.
#[derive(Args)]
pub struct Naming {
    #[arg(long, global = true)]
    patch_name: Option<String>,

    /// Base shader version suffix, e.g. `_r5.5.1`.
    #[arg(long, global = true)]
    shader_version: Option<String>,

    /// Patch version suffix; also the version tag kept in the source folder.
    #[arg(long, global = true)]
    patch_version: Option<String>,

    /// Style to encode; repeat to process several. Replaces the built-in list.
    #[arg(long = "style", global = true)]
    styles: Vec<String>,
}

impl Naming {
    fn apply(self, config: &mut Config) {
        if let Some(patch_name) = self.patch_name {
            config.patch_name = patch_name;
        }
        if let Some(version) = self.shader_version {
            config.version = version;
        }
        if let Some(patch_version) = self.patch_version {
            config.patch_version = patch_version;
        }
        if !self.styles.is_empty() {
            config.styles = self.styles;
        }
    }
}

#[derive(Parser)]
#[command(name = "patchcrypt", version, about = "Encrypt shader patch archives with AES-128-CBC and fan them out to obfuscated per-style folders.")]
pub struct App {
    /// Directory containing SourceFolder and DestinationFolder.
    #[arg(short, long, global = true, default_value = ".")]
    base_dir: PathBuf,

    /// Show debug diagnostics.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Exit with an error when no style archive was found.
    #[arg(long, global = true)]
    strict: bool,

    #[command(flatten)]
    naming: Naming,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl App {
    pub fn init() -> Result<Self> {
        let app = Self::parse();
        let level = if app.verbose { Level::DEBUG } else { Level::WARN };
        let subscriber = tracing_subscriber::fmt().with_max_level(level).with_file(true).with_line_number(true).finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(app)
    }

    pub fn execute(self) -> Result<()> {
        let mut config = Config::with_base_dir(self.base_dir);

        match self.command {
            Some(Commands::Encode) | None => {
                self.naming.apply(&mut config);
                Self::run_encode(&config, self.strict)
            }
            Some(Commands::Reveal { input, output }) => Self::run_reveal(&config, &input, output),
        }
    }

    fn run_encode(config: &Config, strict: bool) -> Result<()> {
        let summary = encode(config)?;
        crate::ui::show_summary(&summary);

        if strict && !summary.found_any() {
            bail!("no style archive found in {}", Layout::resolve(config).source().display());
        }

        Ok(())
    }

    fn run_reveal(config: &Config, input: &Path, output: Option<PathBuf>) -> Result<()> {
        let cipher = CipherContext::new(&config.key, &config.iv).context("cipher initialization failed")?;
        let output_dir = output.or_else(|| input.parent().map(Path::to_path_buf)).unwrap_or_else(|| PathBuf::from("."));

        let revealed = reveal(&cipher, input, &output_dir)?;
        crate::ui::show_revealed(input, &revealed);

        Ok(())
    }
}

/// Runs one full encode pass: create folders, clean the source folder, clear
/// the common folder, then encode every style.
///
/// # Errors
///
/// Returns an error on any fatal failure: folder creation, cipher setup,
/// reading a located archive or writing an output.
pub fn encode(config: &Config) -> Result<Summary> {
    let layout = Layout::resolve(config);
    layout.create()?;

    delete_non_matching(layout.source(), config.version_tag());
    clear_folder(layout.common());

    let cipher = CipherContext::new(&config.key, &config.iv).context("cipher initialization failed")?;
    Pipeline::new(config, &layout, &cipher).run()
}
