use anyhow::Result;
use clap::{Parser, Subcommand};

use bankbook::cli::{
    handle_account_command, handle_export_command, handle_movement_command,
    handle_report_command, handle_transfer_command,
};
use bankbook::config::{BankbookPaths, Settings};
use bankbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "bankbook",
    version,
    about = "Track balances across your bank accounts",
    long_about = "Bankbook keeps one account per bank (Nubank, Santander, Inter), \
                  records deposits and withdrawals, moves money between accounts \
                  and reports where your money is."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,

    /// Account management commands
    #[command(subcommand)]
    Account(bankbook::cli::AccountCommands),

    /// Move money from one account to another
    Transfer {
        /// Source bank or account ID
        from: String,
        /// Destination bank or account ID
        to: String,
        /// Amount (e.g., "40.00")
        amount: String,
    },

    /// Deposits and withdrawals
    #[command(subcommand, alias = "mov")]
    Movement(bankbook::cli::MovementCommands),

    /// Balance reports
    #[command(subcommand)]
    Report(bankbook::cli::ReportCommands),

    /// Export data
    #[command(subcommand)]
    Export(bankbook::cli::ExportCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BankbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    bankbook::logging::init(&settings.log_filter);

    let storage = Storage::open(paths.clone())?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Bankbook at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            storage.save()?;
            println!("Initialization complete!");
            println!();
            println!("Run 'bankbook account create nubank --balance 100' to open an account.");
        }
        Some(Commands::Config) => {
            println!("Bankbook Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Ledger file:      {}", paths.ledger_file().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:           {}", settings.currency_symbol);
            println!("  Date format:               {}", settings.date_format);
            println!(
                "  Reject inactive movements: {}",
                settings.reject_inactive_movements
            );
            println!("  Log filter:                {}", settings.log_filter);
        }
        Some(Commands::Account(cmd)) => {
            handle_account_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Transfer { from, to, amount }) => {
            handle_transfer_command(&storage, &settings, &from, &to, &amount)?;
        }
        Some(Commands::Movement(cmd)) => {
            handle_movement_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, &settings, cmd)?;
        }
        None => {
            println!("Bankbook - balances across your bank accounts");
            println!();
            println!("Run 'bankbook --help' for usage information.");
        }
    }

    Ok(())
}
