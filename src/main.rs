//! tinge - tag-based console colorizer CLI.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tinge::cli::{Cli, Commands, ConfigAction};
use tinge::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Print {
            text,
            args,
            no_newline,
        } => {
            let color = match cli.color {
                Some(color) => color,
                None => Config::load()?.color,
            };
            commands::print::handle_print(&text, &args, no_newline, color)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Path => commands::config::handle_path(),
            ConfigAction::Migrate => commands::config::handle_migrate(),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "tinge", &mut std::io::stdout());
            Ok(())
        }
    }
}
