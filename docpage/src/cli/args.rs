//! CLI argument definitions
//!
//! All Clap derive structs for `docpage` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Render documentation article pages with scroll-aware navigation.
#[derive(Parser, Debug)]
#[command(name = "docpage", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "DOCPAGE_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true, env = "DOCPAGE_LOG_FORMAT")]
    pub log_format: LogFormat,
}

// ============================================================================
// Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one page to HTML.
    Render(RenderArgs),

    /// Validate page contexts against the site configuration.
    Validate(ValidateArgs),

    /// Serve a directory of pages over HTTP for preview.
    Serve(ServeArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for `render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Page context file (.yaml, .yml or .json).
    #[arg(short, long)]
    pub page: PathBuf,

    /// Site configuration file (defaults to ./docpage.yaml when present).
    #[arg(short, long, env = "DOCPAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Current location (`/path?query#hash`); defaults to the page route.
    #[arg(short, long)]
    pub location: Option<String>,

    /// Write HTML here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Page context files to validate.
    #[arg(short, long = "page", required = true, num_args = 1..)]
    pub pages: Vec<PathBuf>,

    /// Site configuration file (defaults to ./docpage.yaml when present).
    #[arg(short, long, env = "DOCPAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Treat warnings as errors.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Directory scanned recursively for page context files.
    #[arg(long)]
    pub pages: PathBuf,

    /// Site configuration file (defaults to ./docpage.yaml when present).
    #[arg(short, long, env = "DOCPAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Bind address as `[host:]port`.
    #[arg(long, default_value = "127.0.0.1:4000", env = "DOCPAGE_BIND")]
    pub bind: String,
}

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
