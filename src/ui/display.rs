//! Status lines and run summary.

use std::path::Path;

use bytesize::ByteSize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Table};
use console::style;

use crate::types::{StyleOutcome, Summary};

/// Reports a folder that was created or already existed.
pub fn show_folder_ready(label: &str, path: &Path) {
    println!("Created or verified {label} folder: {}", style(path.display()).blue());
}

/// Reports a stale source file about to be deleted.
pub fn show_deleted(path: &Path) {
    println!("{}", style(format!("Deleting file: {}", path.display())).red());
}

/// Reports a previous output about to be cleared from the common folder.
pub fn show_cleared(path: &Path) {
    println!("Clearing file from common folder: {}", path.display());
}

/// Reports a recoverable failure.
pub fn show_failure(message: &str) {
    eprintln!("{}", style(message).red());
}

pub fn show_not_found(path: &Path) {
    println!("{}", style(format!("File not found: {}", path.display())).red());
}

/// Reports one written output file.
pub fn show_encoded(path: &Path) {
    println!("{} {}", style("File encoded successfully:").green(), style(path.display()).blue());
}

pub fn show_no_files() {
    println!("{}", style("No files were found to encode.").red());
}

pub fn show_revealed(input: &Path, output: &Path) {
    println!("{} {} -> {}", style("✓").green(), input.display(), style(output.display()).blue());
}

/// Prints one row per style with its status, size, output name and fingerprint.
pub fn show_summary(summary: &Summary) {
    if summary.outcomes.is_empty() {
        return;
    }

    println!();
    println!("{}", summary_table(summary));
}

fn summary_table(summary: &Summary) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Style", "Status", "Size", "Output name", "Fingerprint"]);

    for outcome in &summary.outcomes {
        let row = match outcome {
            StyleOutcome::Encoded { style, encoded } => vec![
                Cell::new(style),
                Cell::new(outcome.status()).fg(Color::Green),
                Cell::new(ByteSize::b(encoded.size)),
                Cell::new(&encoded.output_name),
                Cell::new(encoded.fingerprint),
            ],
            StyleOutcome::NotFound { style, .. } => vec![Cell::new(style), Cell::new(outcome.status()).fg(Color::Red), Cell::new("-"), Cell::new("-"), Cell::new("-")],
        };
        table.add_row(row);
    }

    table
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::cipher::Fingerprint;
    use crate::types::Encoded;

    #[test]
    fn test_summary_table_rows() {
        let encoded = Encoded {
            source: PathBuf::from("ComplementaryReimagined_r5.5.1 + EuphoriaPatches_1.6.3.zip"),
            output_name: "Q29tcA".to_owned(),
            targets: Vec::new(),
            size: 2048,
            fingerprint: Fingerprint::of(b"ct"),
        };
        let summary = Summary {
            outcomes: vec![
                StyleOutcome::Encoded { style: "Reimagined".to_owned(), encoded },
                StyleOutcome::NotFound { style: "Unbound".to_owned(), expected: PathBuf::from("missing.zip") },
            ],
        };

        let rendered = summary_table(&summary).to_string();
        assert!(rendered.contains("Reimagined"));
        assert!(rendered.contains("encoded"));
        assert!(rendered.contains("Q29tcA"));
        assert!(rendered.contains("Unbound"));
        assert!(rendered.contains("not found"));
        assert!(rendered.contains(&Fingerprint::of(b"ct").to_string()));
    }
}
