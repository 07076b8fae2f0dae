//! Tag-based console coloring.
//!
//! Text is styled with a small inline markup vocabulary: a recognized color
//! name used as a tag sets the foreground for its contents, and the
//! `fg`/`bg` tag families read a color from a `color`/`c` attribute:
//!
//! ```
//! use tinge::console::{write_line, CaptureConsole};
//!
//! let mut sink = CaptureConsole::new();
//! write_line(
//!     &mut sink,
//!     r#"<green>ok</green> <fg c="dy">{0} warnings</fg>"#,
//!     &["3"],
//! )
//! .unwrap();
//! assert_eq!(sink.text(), "ok 3 warnings\n");
//! ```
//!
//! Colors set by a tag are scoped to that tag: the previous foreground and
//! background are restored when the tag closes, however deep the nesting.

mod color;
mod markup;
mod render;
mod sink;

pub use color::Color;
pub use markup::{parse, Element, MarkupError, Node};
pub use render::{print, println, write, write_line, RenderError};
pub use sink::{
    AnsiConsole, CaptureConsole, ConsoleSink, PlainConsole, StyledRun, DEFAULT_BACKGROUND,
    DEFAULT_FOREGROUND,
};
