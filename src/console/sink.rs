//! Output sinks for rendered console text.
//!
//! A [`ConsoleSink`] owns the current foreground/background pair alongside the
//! character stream. The renderer saves and restores that pair around each
//! tagged region, so sinks only need to track it faithfully.

use std::io::{self, Write};

use crossterm::style::{ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::QueueableCommand;

use super::color::Color;

/// Default foreground of the classic console.
pub const DEFAULT_FOREGROUND: Color = Color::Gray;

/// Default background of the classic console.
pub const DEFAULT_BACKGROUND: Color = Color::Black;

/// A text sink with mutable foreground/background color attributes.
///
/// Terminals cannot report their current colors, so implementations track the
/// pair themselves, starting from the Gray-on-Black console defaults.
pub trait ConsoleSink {
    /// Currently active foreground color.
    fn foreground(&self) -> Color;

    /// Currently active background color.
    fn background(&self) -> Color;

    fn set_foreground(&mut self, color: Color) -> io::Result<()>;

    fn set_background(&mut self, color: Color) -> io::Result<()>;

    /// Returns both colors to the console defaults.
    fn reset_colors(&mut self) -> io::Result<()>;

    fn write_str(&mut self, s: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;
}

/// Sink that emits ANSI escape codes through crossterm.
pub struct AnsiConsole<W: Write> {
    writer: W,
    foreground: Color,
    background: Color,
}

impl<W: Write> AnsiConsole<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            foreground: DEFAULT_FOREGROUND,
            background: DEFAULT_BACKGROUND,
        }
    }

    /// Consumes the sink, returning the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl AnsiConsole<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink for AnsiConsole<W> {
    fn foreground(&self) -> Color {
        self.foreground
    }

    fn background(&self) -> Color {
        self.background
    }

    fn set_foreground(&mut self, color: Color) -> io::Result<()> {
        self.writer.queue(SetForegroundColor(color.into()))?;
        self.foreground = color;
        Ok(())
    }

    fn set_background(&mut self, color: Color) -> io::Result<()> {
        self.writer.queue(SetBackgroundColor(color.into()))?;
        self.background = color;
        Ok(())
    }

    fn reset_colors(&mut self) -> io::Result<()> {
        self.writer.queue(ResetColor)?;
        self.foreground = DEFAULT_FOREGROUND;
        self.background = DEFAULT_BACKGROUND;
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.writer.write_all(s.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Sink that tracks color state but never emits escape codes.
///
/// Used when color output is disabled (piped output, `--color never`).
pub struct PlainConsole<W: Write> {
    writer: W,
    foreground: Color,
    background: Color,
}

impl<W: Write> PlainConsole<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            foreground: DEFAULT_FOREGROUND,
            background: DEFAULT_BACKGROUND,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl PlainConsole<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink for PlainConsole<W> {
    fn foreground(&self) -> Color {
        self.foreground
    }

    fn background(&self) -> Color {
        self.background
    }

    fn set_foreground(&mut self, color: Color) -> io::Result<()> {
        self.foreground = color;
        Ok(())
    }

    fn set_background(&mut self, color: Color) -> io::Result<()> {
        self.background = color;
        Ok(())
    }

    fn reset_colors(&mut self) -> io::Result<()> {
        self.foreground = DEFAULT_FOREGROUND;
        self.background = DEFAULT_BACKGROUND;
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.writer.write_all(s.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// A run of text written while a particular color pair was active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub foreground: Color,
    pub background: Color,
    pub text: String,
}

/// In-memory sink recording styled runs, for assertions in tests.
#[derive(Debug)]
pub struct CaptureConsole {
    runs: Vec<StyledRun>,
    foreground: Color,
    background: Color,
}

impl CaptureConsole {
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            foreground: DEFAULT_FOREGROUND,
            background: DEFAULT_BACKGROUND,
        }
    }

    /// Recorded runs in write order. Consecutive writes under the same color
    /// pair are merged.
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// All written text, colors ignored.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

impl Default for CaptureConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink for CaptureConsole {
    fn foreground(&self) -> Color {
        self.foreground
    }

    fn background(&self) -> Color {
        self.background
    }

    fn set_foreground(&mut self, color: Color) -> io::Result<()> {
        self.foreground = color;
        Ok(())
    }

    fn set_background(&mut self, color: Color) -> io::Result<()> {
        self.background = color;
        Ok(())
    }

    fn reset_colors(&mut self) -> io::Result<()> {
        self.foreground = DEFAULT_FOREGROUND;
        self.background = DEFAULT_BACKGROUND;
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        match self.runs.last_mut() {
            Some(run) if run.foreground == self.foreground && run.background == self.background => {
                run.text.push_str(s);
            }
            _ => self.runs.push(StyledRun {
                foreground: self.foreground,
                background: self.background,
                text: s.to_string(),
            }),
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
