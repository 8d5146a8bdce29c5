use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for dutyrota
/// CLI application to generate monthly on-call duty rosters with SQLite
#[derive(Parser)]
#[command(
    name = "dutyrota",
    version = env!("CARGO_PKG_VERSION"),
    about = "Fair monthly on-call duty roster generator: assign primary/backup workers and produce handover report skeletons",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for invalid values")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(
            long = "check",
            help = "Check database integrity and assignment/report linkage"
        )]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the worker roster
    Worker {
        #[command(subcommand)]
        action: WorkerAction,
    },

    /// (Re)generate all duty assignments and report skeletons for a month
    Generate {
        /// Target year (e.g. 2025)
        year: i32,

        /// Target month (1-12)
        month: u32,

        /// Fixed seed for the placeholder report content
        #[arg(long = "seed")]
        seed: Option<u64>,

        /// Only synthesize reports for dates up to today
        #[arg(long = "past-only")]
        past_only: bool,
    },

    /// List duty assignments (or reports) with workers resolved
    List {
        /// Filter by year, month or day (YYYY / YYYY-MM / YYYY-MM-DD); default: current month
        #[arg(long, short)]
        period: Option<String>,

        #[arg(long = "reports", help = "List duty reports instead of assignments")]
        reports: bool,
    },

    /// Export duty assignments or reports
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year, month or day; default: current month"
        )]
        range: Option<String>,

        #[arg(long = "reports", help = "Export duty reports instead of assignments")]
        reports: bool,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum WorkerAction {
    /// Add a worker to the roster
    Add {
        name: String,

        #[arg(long, default_value = "")]
        department: String,

        #[arg(long, default_value = "")]
        rank: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,

        /// Explicit worker id (default: next free id)
        #[arg(long)]
        id: Option<i64>,
    },

    /// List the roster
    List {
        #[arg(long, help = "Include excluded workers")]
        all: bool,
    },

    /// Exclude a worker from future scheduling runs
    Exclude { id: i64 },

    /// Re-include a previously excluded worker
    Include { id: i64 },

    /// Import workers from a CSV file (headers: name,department,rank,email,phone[,id][,excluded])
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}
