//! CLI argument definitions.
//!
//! Lives in the library so the binary and `xtask` (man pages, completions)
//! share one source of truth.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::ColorPreference;

/// Version string: crate version plus git hash and build date for dev builds,
/// clean version for official builds (`--features release`).
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("TINGE_BUILD_DATE"),
    ")"
);
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("TINGE_BUILD_DATE"), ")");

#[derive(Parser)]
#[command(
    name = "tinge",
    version = VERSION,
    about = "Render tagged text to the console in color",
    long_about = "Render tagged text to the console in color.\n\n\
        A color name used as a tag sets the foreground for its contents\n\
        (e.g. <red>error</red>), and the fg/bg tags read a color from their\n\
        color or c attribute (e.g. <bg c=\"db\">note</bg>). Tags nest, and\n\
        the previous colors are restored when a tag closes. Use &lt; and\n\
        &gt; for literal angle brackets."
)]
pub struct Cli {
    /// When to emit color escape codes (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorPreference>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render tagged text to stdout
    Print {
        /// Text containing color tags and {N} placeholders
        text: String,

        /// Values substituted for the {0}, {1}, ... placeholders
        args: Vec<String>,

        /// Do not append a trailing newline
        #[arg(short = 'n', long)]
        no_newline: bool,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Add missing fields to the config file
    Migrate,
}
