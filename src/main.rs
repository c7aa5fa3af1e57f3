use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use monthly_ledger::cli::{
    handle_audit_command, handle_category_command, handle_income_command, handle_period_command,
    handle_report_command, handle_transaction_command, CategoryCommands, IncomeCommands,
    PeriodCommands, ReportCommands, TransactionCommands,
};
use monthly_ledger::config::{paths::LedgerPaths, settings::Settings};
use monthly_ledger::locale::Locale;
use monthly_ledger::models::TrendWindow;
use monthly_ledger::state::AppState;
use monthly_ledger::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Monthly expense and income ledger",
    long_about = "Records expenses and monthly income, and reports the balance of \
                  a month, the trend across recent months and where the money went \
                  by category."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Choose the period being viewed
    #[command(subcommand)]
    Period(PeriodCommands),

    /// Monthly income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Summary, trend and category reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
        /// Only show changes to transaction, income or category
        #[arg(short, long)]
        entity: Option<String>,
    },

    /// Initialize a new ledger
    Init,

    /// Show or change configuration
    Config {
        /// Month names and decimal separator (pt-BR or en)
        #[arg(long)]
        locale: Option<String>,
        /// Currency symbol shown before amounts
        #[arg(long)]
        currency: Option<String>,
        /// Default trend window (3, 6 or 12)
        #[arg(long)]
        trend_months: Option<u32>,
        /// Date format for tables (strftime)
        #[arg(long)]
        date_format: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let command = match cli.command {
        Some(Commands::Init) => {
            println!("Initializing ledger at: {}", paths.base_dir().display());
            let seeded = initialize_storage(&paths)?;
            println!("Initialization complete!");
            if seeded {
                println!();
                println!("Default categories have been created.");
                println!("Run 'ledger category list' to see them.");
            }
            return Ok(());
        }
        Some(Commands::Config {
            locale,
            currency,
            trend_months,
            date_format,
        }) => {
            let changed = locale.is_some()
                || currency.is_some()
                || trend_months.is_some()
                || date_format.is_some();

            if let Some(locale) = locale {
                settings.locale = locale.parse::<Locale>().map_err(anyhow::Error::msg)?;
            }
            if let Some(currency) = currency {
                settings.currency_symbol = currency;
            }
            if let Some(months) = trend_months {
                settings.default_trend_months = TrendWindow::try_from(months)?;
            }
            if let Some(date_format) = date_format {
                settings.set_date_format(&date_format)?;
            }
            if changed {
                settings.save(&paths)?;
            }

            println!("Monthly Ledger Configuration");
            println!("============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Locale:         {}", settings.locale);
            println!("  Currency:       {}", settings.currency_symbol);
            println!("  Date format:    {}", settings.date_format);
            println!("  Trend window:   {}", settings.default_trend_months);
            return Ok(());
        }
        Some(command) => command,
        None => {
            println!("Monthly Ledger - monthly expenses and income");
            println!();
            println!("Run 'ledger --help' for usage information.");
            println!("Run 'ledger init' to set up a new ledger.");
            return Ok(());
        }
    };

    if !paths.is_initialized() {
        bail!("No ledger found. Run 'ledger init' first.");
    }

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let mut state = AppState::load(&paths)?;
    state.retain_existing(&storage.transactions.get_all()?);

    let result = match command {
        Commands::Transaction(cmd) => {
            handle_transaction_command(&storage, &settings, &mut state, cmd)
        }
        Commands::Period(cmd) => handle_period_command(&storage, &settings, &mut state, cmd),
        Commands::Income(cmd) => handle_income_command(&storage, &settings, &state, cmd),
        Commands::Category(cmd) => handle_category_command(&storage, cmd),
        Commands::Report(cmd) => handle_report_command(&storage, &settings, &mut state, cmd),
        Commands::Audit { limit, entity } => handle_audit_command(&storage, limit, entity),
        Commands::Init | Commands::Config { .. } => return Ok(()),
    };

    // A handler can fail after committing a change, so the state is
    // reconciled with storage and saved either way
    state.retain_existing(&storage.transactions.get_all()?);
    state.save(&paths)?;

    result?;

    Ok(())
}
