use clap::{Parser, Subcommand, ValueEnum};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.1.0"
/// Format for dev builds: "v0.1.0\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "students",
    bin_name = "students",
    version = get_version(),
    disable_help_subcommand = true,
    after_help = "The roster lives in memory. Use `students shell` to run several commands against one roster."
)]
#[command(about = "In-memory student roster: list, add, edit, check and remove students", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputMode::Text, help_heading = "Options")]
    pub output: OutputMode,

    /// Number of synthetic students to start with (overrides configuration)
    #[arg(long, global = true, help_heading = "Options")]
    pub seed: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Roster(RosterCommands),

    /// Show the resolved configuration
    #[command(display_order = 30)]
    Config {
        /// Print a commented sample students.toml instead
        #[arg(long)]
        template: bool,
    },

    /// Run commands from stdin against one live roster
    #[command(display_order = 31)]
    Shell,
}

/// Commands available both as subcommands and inside `students shell`.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RosterCommands {
    /// List students
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Only checked students
        #[arg(long, conflicts_with = "unchecked")]
        checked: bool,

        /// Only unchecked students
        #[arg(long)]
        unchecked: bool,
    },

    /// Show one or more students
    #[command(alias = "view", display_order = 2)]
    Show {
        /// Student IDs
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Add a student
    #[command(alias = "new", display_order = 3)]
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        id: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        address: String,

        /// Mark the new student as checked
        #[arg(long)]
        checked: bool,

        /// Image handle (defaults to the configured one)
        #[arg(long)]
        image: Option<String>,
    },

    /// Edit a student; fields not given keep their value
    #[command(alias = "e", display_order = 4)]
    Edit {
        /// ID of the student to edit
        id: String,

        #[arg(long)]
        name: Option<String>,

        /// Re-key the student under a new ID
        #[arg(long = "new-id")]
        new_id: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        address: Option<String>,

        /// Set the checked flag (true/false)
        #[arg(long)]
        checked: Option<bool>,

        #[arg(long)]
        image: Option<String>,
    },

    /// Delete one or more students
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Student IDs
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Flip the checked flag of one or more students
    #[command(display_order = 6)]
    Toggle {
        /// Student IDs
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Print the number of students
    #[command(display_order = 7)]
    Count,

    /// Format a phone number the way listings show it
    #[command(display_order = 8)]
    FormatPhone { phone: String },
}

/// One line typed into `students shell`.
#[derive(Parser, Debug)]
#[command(name = "students", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommands {
    #[command(flatten)]
    Roster(RosterCommands),

    /// Clear the roster and seed it again
    #[command(display_order = 20)]
    Reset {
        /// Number of students to seed (defaults to the configured count)
        #[arg(long)]
        seed: Option<usize>,
    },

    /// Remove every student
    #[command(display_order = 21)]
    Clear,

    /// Leave the shell
    #[command(alias = "quit", display_order = 22)]
    Exit,
}
