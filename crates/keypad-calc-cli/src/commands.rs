//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// keypad-calc: press calculator buttons from the command line
#[derive(Parser, Debug)]
#[command(name = "keypad-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Output format (text, json)
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: FormatArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press buttons in order and show the display
    Press(PressArgs),

    /// Read button labels from stdin, one line at a time
    Repl(ReplArgs),

    /// Show the keypad layout
    Keypad,

    /// Show configuration
    Config,
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Button labels: 0-9 . + - − × ÷ * / = C ←
    #[arg(required = true)]
    pub labels: Vec<String>,

    /// Show the display after every press
    #[arg(long)]
    pub steps: bool,

    /// Fail on labels that match no button instead of ignoring them
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the repl command
#[derive(Parser, Debug)]
pub struct ReplArgs {
    /// Print a prompt before each line
    #[arg(long)]
    pub prompt: bool,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Detect terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Plain text
    #[default]
    Text,
    /// JSON
    Json,
}
