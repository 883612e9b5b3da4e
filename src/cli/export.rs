//! CLI commands for data export

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{BankbookError, BankbookResult};
use crate::export::export_movements_csv;
use crate::storage::Storage;

use super::{engine_for, parse_date};

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export movements between two dates to CSV
    Movements {
        /// First date (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        /// Last date (YYYY-MM-DD)
        #[arg(long)]
        to: String,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> BankbookResult<()> {
    let engine = engine_for(storage, settings);

    match cmd {
        ExportCommands::Movements { from, to, output } => {
            let start = parse_date(&from)?;
            let end = parse_date(&to)?;

            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        BankbookError::Export(format!(
                            "Failed to create file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    let count = export_movements_csv(&engine, start, end, BufWriter::new(file))?;
                    println!("Exported {} movements to: {}", count, path.display());
                }
                None => {
                    let stdout = std::io::stdout();
                    export_movements_csv(&engine, start, end, stdout.lock())?;
                }
            }
        }
    }

    Ok(())
}
