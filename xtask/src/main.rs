//! Development tasks: man page and shell completion generation.
//!
//! Run with `cargo xtask <task>`. Output lands in `target/dist`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tinge::cli::Cli as TingeCli;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for tinge")]
struct Cli {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate the man page
    Man,
    /// Generate completions for all supported shells
    Completions,
    /// Generate all distributable artifacts
    Dist,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.task {
        Task::Man => generate_man(),
        Task::Completions => generate_completions(),
        Task::Dist => {
            generate_man()?;
            generate_completions()
        }
    }
}

fn dist_dir() -> Result<PathBuf> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("target")
        .join("dist");
    fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
    Ok(dir)
}

fn generate_man() -> Result<()> {
    let dir = dist_dir()?;
    let man = clap_mangen::Man::new(TingeCli::command());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    let path = dir.join("tinge.1");
    fs::write(&path, buffer).with_context(|| format!("failed to write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn generate_completions() -> Result<()> {
    let dir = dist_dir()?;
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        let mut command = TingeCli::command();
        let path = clap_complete::generate_to(shell, &mut command, "tinge", &dir)
            .with_context(|| format!("failed to generate {shell} completions"))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
