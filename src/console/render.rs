//! Tagged-text rendering with scoped color state.
//!
//! A recognized tag name selects a foreground color directly (`<red>x</red>`),
//! while `fg`/`fore`/`foreground` and `bg`/`back`/`background` read the color
//! from a `color` (or `c`) attribute. Around every element the renderer saves
//! the sink's color pair and restores it after the element's subtree, so color
//! changes never leak past the tag that made them.
//!
//! Unknown tag and color names are ignored without error; malformed markup is
//! a hard [`MarkupError`] raised before anything is written.

use std::io;

use tracing::debug;

use super::color::Color;
use super::markup::{self, Element, MarkupError, Node};
use super::sink::{AnsiConsole, ConsoleSink};

/// Errors from rendering tagged text.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Markup(#[from] MarkupError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Renders tagged `text` to `sink`, substituting `{0}`, `{1}`, ... placeholders
/// from `args` before parsing.
pub fn write(sink: &mut dyn ConsoleSink, text: &str, args: &[&str]) -> Result<(), RenderError> {
    render(sink, text, args)?;
    sink.flush()?;
    Ok(())
}

/// Like [`write`], with a trailing newline.
pub fn write_line(
    sink: &mut dyn ConsoleSink,
    text: &str,
    args: &[&str],
) -> Result<(), RenderError> {
    render(sink, text, args)?;
    sink.write_str("\n")?;
    sink.flush()?;
    Ok(())
}

/// Renders tagged `text` to stdout.
pub fn print(text: &str, args: &[&str]) -> Result<(), RenderError> {
    write(&mut AnsiConsole::stdout(), text, args)
}

/// Renders tagged `text` to stdout, with a trailing newline.
pub fn println(text: &str, args: &[&str]) -> Result<(), RenderError> {
    write_line(&mut AnsiConsole::stdout(), text, args)
}

fn render(sink: &mut dyn ConsoleSink, text: &str, args: &[&str]) -> Result<(), RenderError> {
    let substituted = substitute(text, args);
    // Parse up front: malformed markup must fail before partial output.
    let nodes = markup::parse(&substituted)?;
    render_nodes(sink, &nodes)?;
    Ok(())
}

/// Replaces `{i}` with `args[i]` for every supplied argument.
fn substitute(text: &str, args: &[&str]) -> String {
    let mut result = text.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

fn render_nodes(sink: &mut dyn ConsoleSink, nodes: &[Node]) -> io::Result<()> {
    for node in nodes {
        match node {
            Node::Text(text) => sink.write_str(text)?,
            Node::Element(element) => render_element(sink, element)?,
        }
    }
    Ok(())
}

fn render_element(sink: &mut dyn ConsoleSink, element: &Element) -> io::Result<()> {
    let saved_foreground = sink.foreground();
    let saved_background = sink.background();

    match element.name.to_lowercase().as_str() {
        "fg" | "fore" | "foreground" => {
            if let Some(name) = element.attr("color").or_else(|| element.attr("c")) {
                set_color(sink, name, ColorTarget::Foreground)?;
            }
        }
        "bg" | "back" | "background" => {
            if let Some(name) = element.attr("color").or_else(|| element.attr("c")) {
                set_color(sink, name, ColorTarget::Background)?;
            }
        }
        // Any other tag name is itself a foreground color name.
        other => set_color(sink, other, ColorTarget::Foreground)?,
    }

    render_nodes(sink, &element.children)?;

    // Restore in the reverse of the set order: background, then foreground.
    sink.set_background(saved_background)?;
    sink.set_foreground(saved_foreground)?;
    Ok(())
}

enum ColorTarget {
    Foreground,
    Background,
}

fn set_color(sink: &mut dyn ConsoleSink, name: &str, target: ColorTarget) -> io::Result<()> {
    match Color::parse(name) {
        Some(color) => match target {
            ColorTarget::Foreground => sink.set_foreground(color),
            ColorTarget::Background => sink.set_background(color),
        },
        None => {
            debug!(name, "ignoring unrecognized color name");
            Ok(())
        }
    }
}
