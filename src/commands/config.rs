//! Config subcommands handler.

use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use tinge::config::{migrate_config, Config};
use tinge::console;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    print!("{}", toml_str);
    Ok(())
}

/// Print the config file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Migrate the config file by adding missing fields.
///
/// Reads the existing config file (or empty if it doesn't exist), adds any
/// missing fields from the current default config, shows a preview of the
/// additions, and prompts for confirmation.
#[cfg(not(tarpaulin_include))]
pub fn handle_migrate() -> Result<()> {
    let config_path = Config::config_path()?;
    let file_exists = config_path.exists();

    // Read existing content (empty string if file doesn't exist)
    let content = if file_exists {
        fs::read_to_string(&config_path)?
    } else {
        String::new()
    };

    let result = migrate_config(&content)?;

    if !result.has_changes() {
        console::println("<n>Config is already up to date.</n>", &[])?;
        return Ok(());
    }

    if !file_exists {
        console::println(
            "Config file does not exist. Will create it with default settings.",
            &[],
        )?;
    }
    for key in &result.added {
        console::println("  <n>+</n> {0}", &[key.as_str()])?;
    }
    println!();

    let prompt = if file_exists {
        format!("Update {}?", config_path.display())
    } else {
        format!("Create {}?", config_path.display())
    };
    if !prompt_confirmation(&prompt)? {
        console::println("<y>No changes made.</y>", &[])?;
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config_path, &result.content)?;
    let written = config_path.display().to_string();
    console::println("<n>Wrote {0}.</n>", &[written.as_str()])?;
    Ok(())
}

/// Ask a yes/no question on stdin, defaulting to no.
#[cfg(not(tarpaulin_include))]
fn prompt_confirmation(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}
