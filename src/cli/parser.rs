use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worklogger
/// CLI application to track daily work/leave entries with SQLite
#[derive(Parser)]
#[command(
    name = "worklogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal work-log tracker: record daily work/leave entries against projects, sync to a remote store, export to CSV/JSON",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the remote store root (useful for tests)
    #[arg(global = true, long = "remote")]
    pub remote: Option<String>,

    /// Override the account id used for remote sync
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

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

    /// Manage the configuration file (view or verify)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Add a work/leave entry for a date
    Add {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// Entry type: work, full-leave, half-leave, holiday
        #[arg(long = "type", short = 't')]
        entry_type: String,

        /// Project key (PROJECT_ID-SUB_CODE), required for work entries
        #[arg(long = "project", short = 'p')]
        project: Option<String>,

        /// Worked hours (work entries only; leave hours are fixed by type)
        #[arg(long = "hours")]
        hours: Option<f64>,

        /// Half-day period for half-leave: am | pm
        #[arg(long = "period")]
        period: Option<String>,

        /// Free-form comments
        #[arg(long = "comments", default_value = "")]
        comments: String,
    },

    /// Delete an entry by position within a date, or by id
    Del {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        #[arg(long = "entry", help = "1-based entry position within the date")]
        entry: Option<usize>,

        #[arg(long = "id", help = "Entry id (overrides --entry)")]
        id: Option<String>,
    },

    /// List entries (or projects)
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "projects", help = "List the project registry instead")]
        projects: bool,
    },

    /// Manage the project registry
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Synchronize with the remote store (push by default)
    Sync {
        #[arg(long = "pull", help = "Replace local data with the remote mirror")]
        pull: bool,

        #[arg(long = "status", help = "Show sync status without transferring")]
        status: bool,
    },

    /// Export work-log data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Restore data from a JSON backup envelope
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite the destination without asking")]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Register a new project
    Add {
        #[arg(long = "id", help = "Project id (e.g. P100)")]
        project_id: String,

        #[arg(long = "sub", help = "Sub code (e.g. 01)")]
        sub_code: String,

        #[arg(long = "title", default_value = "")]
        title: String,

        #[arg(long = "category", default_value = "")]
        category: String,
    },

    /// Delete a project (rejected while entries reference it)
    Del {
        /// Project key (PROJECT_ID-SUB_CODE)
        key: String,
    },

    /// Archive a project so it can no longer be booked
    Archive {
        key: String,
    },

    /// Restore an archived project
    Restore {
        key: String,
    },

    /// List all projects
    List,
}
