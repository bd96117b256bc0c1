//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "lazyseq",
    bin_name = "lazyseq",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Lazy sequence generators and a short language-feature tour",
    long_about = "lazyseq drives pull-based generators one value at a time \
                  and walks through a handful of small illustrations.",
    after_help = "EXAMPLES:\n\
        \x20 lazyseq tour\n\
        \x20 lazyseq seq --start 100 --step -10 --count 21\n\
        \x20 lazyseq gcd 20 25\n\
        \x20 lazyseq clock --zone Europe/Berlin --zone Asia/Tokyo",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run every illustration once, in order.
    #[command(
        visible_alias = "t",
        about = "Run the full tour",
        after_help = "EXAMPLES:\n\
            \x20 lazyseq tour\n\
            \x20 lazyseq tour --no-clock\n\
            \x20 lazyseq tour --output-format json"
    )]
    Tour(TourArgs),

    /// Drive one arithmetic progression.
    #[command(
        visible_alias = "s",
        about = "Generate an arithmetic progression",
        after_help = "EXAMPLES:\n\
            \x20 lazyseq seq --count 11\n\
            \x20 lazyseq seq --start 100 --step -10 --count 21\n\
            \x20 lazyseq seq --start 0.5 --step 0.25 --type f64"
    )]
    Seq(SeqArgs),

    /// Greatest common divisor of two integers.
    #[command(about = "Compute a greatest common divisor")]
    Gcd(GcdArgs),

    /// Show the current instant in several time zones.
    #[command(
        about = "Show the time in several zones",
        after_help = "EXAMPLES:\n\
            \x20 lazyseq clock\n\
            \x20 lazyseq clock --zone Australia/Sydney"
    )]
    Clock(ClockArgs),

    /// Initialise a lazyseq configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 lazyseq init\n\
            \x20 lazyseq init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 lazyseq completions bash > ~/.local/share/bash-completion/completions/lazyseq\n\
            \x20 lazyseq completions zsh  > ~/.zfunc/_lazyseq"
    )]
    Completions(CompletionsArgs),

    /// Inspect the lazyseq configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 lazyseq config get seq.count\n\
            \x20 lazyseq config list\n\
            \x20 lazyseq config path"
    )]
    Config(ConfigCommands),
}

// ── tour ──────────────────────────────────────────────────────────────────────

/// Arguments for `lazyseq tour`.
#[derive(Debug, Args)]
pub struct TourArgs {
    /// Leave out the zoned clock section (its output changes every run).
    #[arg(long = "no-clock", help = "Skip the time-zone section")]
    pub no_clock: bool,
}

// ── seq ───────────────────────────────────────────────────────────────────────

/// Arguments for `lazyseq seq`.
#[derive(Debug, Args)]
pub struct SeqArgs {
    /// First term.
    #[arg(
        long = "start",
        value_name = "START",
        allow_hyphen_values = true,
        help = "First term (default from config, else 0)"
    )]
    pub start: Option<String>,

    /// Difference between consecutive terms.
    #[arg(
        long = "step",
        value_name = "STEP",
        allow_hyphen_values = true,
        help = "Step between terms (default from config, else 1)"
    )]
    pub step: Option<String>,

    /// How many terms to produce.
    #[arg(
        short = 'n',
        long = "count",
        value_name = "N",
        help = "Number of terms (default from config, else 10)"
    )]
    pub count: Option<usize>,

    /// Element type of the progression.
    #[arg(
        short = 't',
        long = "type",
        value_enum,
        default_value = "i64",
        help = "Element type"
    )]
    pub element: ElementType,
}

/// Numeric element types `seq` can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ElementType {
    I8,
    I32,
    I64,
    U64,
    F64,
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::I8 => write!(f, "i8"),
            Self::I32 => write!(f, "i32"),
            Self::I64 => write!(f, "i64"),
            Self::U64 => write!(f, "u64"),
            Self::F64 => write!(f, "f64"),
        }
    }
}

// ── gcd ───────────────────────────────────────────────────────────────────────

/// Arguments for `lazyseq gcd`.
#[derive(Debug, Args)]
pub struct GcdArgs {
    #[arg(value_name = "A", allow_negative_numbers = true)]
    pub a: i64,

    #[arg(value_name = "B", allow_negative_numbers = true)]
    pub b: i64,
}

// ── clock ─────────────────────────────────────────────────────────────────────

/// Arguments for `lazyseq clock`.
#[derive(Debug, Args)]
pub struct ClockArgs {
    /// IANA zone names; repeat the flag for several zones.
    #[arg(
        short = 'z',
        long = "zone",
        value_name = "ZONE",
        help = "Time zone to show (repeatable; default from config)"
    )]
    pub zones: Vec<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `lazyseq init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `lazyseq completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `lazyseq config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `seq.count`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
