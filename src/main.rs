use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::{Env, Target};
use log::warn;

use society_dashboard::cli::{
    handle_export_command, handle_missing_command, handle_months_command,
    handle_summary_command, handle_table_command, ExportArgs, TableArgs,
};
use society_dashboard::config::{DashboardPaths, Settings};
use society_dashboard::session::{Session, TableKind};
use society_dashboard::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "society",
    version,
    about = "Terminal dashboard for a housing society's maintenance and funds",
    long_about = "Reads the society workbook (maintenance ledger, other revenue, \
                  expenses and missing maintenance) and shows the collection \
                  and fund balance figures, month by month."
)]
struct Cli {
    /// Workbook to load instead of the configured file
    #[arg(short, long, global = true, env = "SOCIETY_WORKBOOK")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (default)
    #[command(alias = "ui")]
    Tui,

    /// Show the six financial metrics
    Summary,

    /// Show other revenue for one month
    Revenue(TableArgs),

    /// Show expenses for one month, with bill links
    Expenses(TableArgs),

    /// List the months a table can be filtered to
    Months {
        /// Table to list months for
        #[arg(value_enum)]
        table: TableKind,

        /// Show how many rows each month holds
        #[arg(long)]
        counts: bool,
    },

    /// Show the missing maintenance sheet
    Missing,

    /// Export the dashboard
    Export(ExportArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = DashboardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let command = cli.command.unwrap_or(Commands::Tui);
    init_logging(&paths, matches!(command, Commands::Tui));

    match command {
        Commands::Tui => {
            let session = open_for_tui(cli.file, &settings)?;
            run_tui(session, settings)?;
        }
        Commands::Summary => {
            let session = open_fixed(cli.file, &settings)?;
            handle_summary_command(&session, &settings)?;
        }
        Commands::Revenue(args) => {
            let mut session = open_fixed(cli.file, &settings)?;
            handle_table_command(&mut session, &settings, TableKind::Revenue, args)?;
        }
        Commands::Expenses(args) => {
            let mut session = open_fixed(cli.file, &settings)?;
            handle_table_command(&mut session, &settings, TableKind::Expenses, args)?;
        }
        Commands::Months { table, counts } => {
            let session = open_fixed(cli.file, &settings)?;
            handle_months_command(&session, table, counts)?;
        }
        Commands::Missing => {
            let session = open_fixed(cli.file, &settings)?;
            handle_missing_command(&session)?;
        }
        Commands::Export(args) => {
            let mut session = open_fixed(cli.file, &settings)?;
            handle_export_command(&mut session, &settings, args)?;
        }
        Commands::Init => {
            println!("Initializing society dashboard at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
            println!();
            println!("Edit the file to set the society name, currency and sheet names.");
        }
        Commands::Config => {
            let cwd = std::env::current_dir()?;
            println!("Society Dashboard Configuration");
            println!("===============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Society name:    {}", settings.society_name);
            if !settings.subtitle.is_empty() {
                println!("  Subtitle:        {}", settings.subtitle);
            }
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Workbook:        {}", settings.workbook_path(&cwd).display());
            println!("  Ledger sheet:    {}", settings.sheets.ledger);
            println!("  Revenue sheet:   {}", settings.sheets.revenue);
            println!("  Expenses sheet:  {}", settings.sheets.expenses);
            println!("  Missing sheet:   {}", settings.sheets.missing);
        }
    }

    Ok(())
}

/// Log to stderr, or to the log file while the TUI owns the terminal
fn init_logging(paths: &DashboardPaths, tui: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));

    if tui {
        let file = paths.ensure_directories().ok().and_then(|_| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(paths.log_file())
                .ok()
        });
        match file {
            Some(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            // Nowhere safe to write while in the alternate screen
            None => {
                builder.filter_level(log::LevelFilter::Off);
            }
        }
    }

    builder.init();
}

/// Fixed-file mode: the workbook must exist and load
fn open_fixed(file: Option<PathBuf>, settings: &Settings) -> Result<Session> {
    let path = match file {
        Some(path) => path,
        None => settings.workbook_path(&std::env::current_dir()?),
    };

    let mut session = Session::new();
    session
        .load_file(&path, &settings.sheets)
        .with_context(|| format!("Could not load {}", path.display()))?;
    Ok(session)
}

/// The TUI loads `--file` strictly; without it, a missing default workbook
/// starts the dashboard on the load prompt instead
fn open_for_tui(file: Option<PathBuf>, settings: &Settings) -> Result<Session> {
    if file.is_some() {
        return open_fixed(file, settings);
    }

    let path = settings.workbook_path(&std::env::current_dir()?);
    if !path.exists() {
        warn!("No workbook at {}, starting on the load prompt", path.display());
        return Ok(Session::new());
    }
    open_fixed(Some(path), settings)
}
