use clap::{Parser, Subcommand};

/// Command-line interface definition for rtimeclock
/// CLI punch clock to track employee clock-in/out and break times
#[derive(Parser)]
#[command(
    name = "rtimeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple punch clock CLI: track employee clock-in/out and break times",
    long_about = None
)]
pub struct Cli {
    /// Override state file path (useful for tests or custom locations)
    #[arg(global = true, long = "state")]
    pub state: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and state file
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Manage the employee roster
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Clock in the selected employee
    In {
        /// Override the event timestamp (RFC3339), mainly for tests
        #[arg(long = "at", hide = true)]
        at: Option<String>,
    },

    /// Clock out the selected employee
    Out {
        #[arg(long = "at", hide = true)]
        at: Option<String>,
    },

    /// Start or end a break in the active session
    Break {
        #[command(subcommand)]
        action: BreakAction,
    },

    /// Show the current state and live elapsed time
    Status {
        #[arg(long = "at", hide = true)]
        at: Option<String>,
    },

    /// Show today's records for the selected employee
    Today {
        #[arg(long = "at", hide = true)]
        at: Option<String>,
    },

    /// Show (or clear) the session history grouped by date
    History {
        #[arg(long = "clear", help = "Delete all finalized history records")]
        clear: bool,

        #[arg(long, short, help = "Show only one date (YYYY-MM-DD)")]
        period: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Register a new employee (and select it)
    Add {
        /// Display name
        name: String,

        /// Schedule kind: full (8h) or half (4h)
        #[arg(long = "schedule", help = "Schedule kind: full (8h) or half (4h)")]
        schedule: Option<String>,
    },

    /// List registered employees
    List,

    /// Select the employee the clock commands act on
    Select {
        /// Employee id (see `employee list`)
        id: String,
    },
}

#[derive(Subcommand)]
pub enum BreakAction {
    /// Start a break
    Start {
        #[arg(long = "at", hide = true)]
        at: Option<String>,
    },

    /// End the running break
    End {
        #[arg(long = "at", hide = true)]
        at: Option<String>,
    },
}
