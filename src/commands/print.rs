//! Print command handler.

use anyhow::Result;
use tinge::config::ColorPreference;
use tinge::console::{self, AnsiConsole, ConsoleSink, PlainConsole};

/// Renders tagged text to stdout, honoring the color mode.
pub fn handle_print(
    text: &str,
    args: &[String],
    no_newline: bool,
    color: ColorPreference,
) -> Result<()> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let colored = match color {
        ColorPreference::Always => true,
        ColorPreference::Never => false,
        ColorPreference::Auto => atty::is(atty::Stream::Stdout),
    };

    if colored {
        let mut sink = AnsiConsole::stdout();
        render(&mut sink, text, &args, no_newline)
    } else {
        let mut sink = PlainConsole::stdout();
        render(&mut sink, text, &args, no_newline)
    }
}

fn render(sink: &mut dyn ConsoleSink, text: &str, args: &[&str], no_newline: bool) -> Result<()> {
    if no_newline {
        console::write(sink, text, args)?;
    } else {
        console::write_line(sink, text, args)?;
    }
    Ok(())
}
