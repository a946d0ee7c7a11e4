use crate::export::ExportFormat;
use crate::models::study_mode::StudyMode;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rollcall
/// CLI application to manage student rosters and record attendance with SQLite
#[derive(Parser)]
#[command(
    name = "rollcall",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: manage a student roster and record tap-based attendance using SQLite",
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
    /// Initialize the configuration, databases folder and default database
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing folders")]
        check: bool,
    },

    /// Manage attendance databases (create, select, inspect)
    Db {
        #[arg(long = "create", value_name = "NAME", help = "Create a new database and select it")]
        create: Option<String>,

        #[arg(
            long = "use",
            value_name = "NAME",
            conflicts_with = "create",
            help = "Select an existing database from the databases folder"
        )]
        use_db: Option<String>,

        #[arg(long = "list", help = "List database files in the databases folder")]
        list: bool,

        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Add a single student to the roster
    Add {
        /// Student identifier (the value a tapped card submits)
        #[arg(long)]
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        major: String,

        #[arg(long)]
        stage: String,

        /// Study mode: morning, evening or hosted
        #[arg(long, value_enum)]
        study: StudyMode,

        #[arg(long)]
        group: String,
    },

    /// Bulk-import students from a delimited file
    ///
    /// The file must have a header row followed by six columns in fixed
    /// order: id, name, major, stage, study, group. Rows with an empty
    /// required cell are skipped; duplicate ids are counted and skipped.
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// List the student roster
    List,

    /// Run an interactive tap-in session
    ///
    /// Reads identifiers from stdin, one per line, exactly what a card
    /// scanner feeding a text field produces. Lines starting with ':'
    /// are directives: :status, :reset, :export [FILE], :load NAME,
    /// :quit.
    Session {
        /// Require the exact study mode instead of treating Morning and
        /// Hosted as interchangeable
        #[arg(long = "strict-study")]
        strict_study: bool,
    },

    /// Export attendance for an explicit cohort
    Export {
        #[arg(long)]
        major: String,

        #[arg(long)]
        stage: String,

        #[arg(long, value_enum)]
        study: StudyMode,

        #[arg(long)]
        group: String,

        /// Output format; inferred from --file extension when omitted
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Output file path; defaults to the export folder with a
        /// date_major_stage_study_group name
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Require the exact study mode instead of exporting Morning and
        /// Hosted together
        #[arg(long = "strict-study")]
        strict_study: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Clear all attendance events. Irreversible
    Reset {
        #[arg(long, help = "Confirm the reset without prompting")]
        yes: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
