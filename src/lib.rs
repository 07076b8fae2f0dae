//! # tinge
//!
//! Tag-based console coloring plus a grab bag of small extension utilities.
//!
//! The core is the [`console`] module: it parses inline markup like
//! `<red>error</red>` or `<bg c="db"><fg c="yellow">note</fg></bg>` and
//! renders the styled text to a [`console::ConsoleSink`], restoring the
//! previous foreground/background colors when each tag closes.
//!
//! ```
//! use tinge::console::{write_line, CaptureConsole};
//!
//! let mut sink = CaptureConsole::new();
//! write_line(&mut sink, "building <c>{0}</c>", &["tinge"]).unwrap();
//! assert_eq!(sink.text(), "building tinge\n");
//! ```
//!
//! The [`ext`] module collects unrelated helpers: slugification, MD5 digests,
//! data URLs, human byte sizes, duplicate detection, serde value maps and
//! directory utilities. [`config`] holds the CLI's TOML configuration.

pub mod cli;
pub mod config;
pub mod console;
pub mod ext;

pub use config::{ColorPreference, Config};
