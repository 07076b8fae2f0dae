//! Error message flattening.

use std::error::Error;
use std::fmt::Write;

/// Joins an error's message with every message in its source chain, one per
/// line, outermost first.
pub fn error_chain(error: &(dyn Error + 'static)) -> String {
    let mut messages = String::new();
    let _ = writeln!(messages, "{}", error);

    let mut source = error.source();
    while let Some(cause) = source {
        let _ = writeln!(messages, "{}", cause);
        source = cause.source();
    }

    messages
}
