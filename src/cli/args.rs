use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::lyrics::SubtitleFormat;

#[derive(Parser, Debug)]
#[command(name = "sync-lyrics")]
#[command(version)]
#[command(about = "Time-synchronised SRT/WebVTT lyrics in the terminal", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom config file
    #[arg(long, global = true, value_name = "FILE", env = "SYNC_LYRICS_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play lyrics against a simulated playback clock in the TUI
    Play(PlayArgs),

    /// Print the parsed cues of a subtitle resource
    Show(ShowArgs),

    /// Print the active line index at one or more playback times
    At(AtArgs),

    /// Convert a subtitle resource between SRT and WebVTT
    Convert(ConvertArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

impl Commands {
    /// Whether this command takes over the terminal.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Play(_))
    }
}

#[derive(Parser, Debug)]
pub struct PlayArgs {
    /// Subtitle URL (http/https) or local file path
    #[arg(value_name = "LOCATOR")]
    pub locator: String,

    /// Start playback at this position in seconds
    #[arg(long, value_name = "SECONDS")]
    pub start: Option<f64>,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Subtitle URL (http/https) or local file path
    #[arg(value_name = "LOCATOR")]
    pub locator: String,
}

#[derive(Parser, Debug)]
pub struct AtArgs {
    /// Subtitle URL (http/https) or local file path
    #[arg(value_name = "LOCATOR")]
    pub locator: String,

    /// Playback times in seconds
    #[arg(value_name = "SECONDS", required = true, num_args = 1..)]
    pub times: Vec<f64>,
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Subtitle URL (http/https) or local file path
    #[arg(value_name = "LOCATOR")]
    pub locator: String,

    /// Output format
    #[arg(short = 't', long = "to", value_enum)]
    pub to: OutputFormat,

    /// Output file path (default: standard output)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Show current configuration
    #[arg(long)]
    pub show: bool,

    /// Initialize default configuration file
    #[arg(long)]
    pub init: bool,

    /// Show configuration file path
    #[arg(long)]
    pub path: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    /// SubRip (.srt)
    Srt,
    /// WebVTT (.vtt)
    Vtt,
}

impl From<OutputFormat> for SubtitleFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Srt => SubtitleFormat::Srt,
            OutputFormat::Vtt => SubtitleFormat::WebVtt,
        }
    }
}
