//! Small, stateless extension utilities.
//!
//! Each submodule is independent: string transliteration and slugs, data URLs
//! and byte sizes, duplicate detection, serde value maps, directory helpers,
//! and error chain flattening.

pub mod byte;
pub mod error;
pub mod iter;
pub mod map;
pub mod path;
pub mod string;

pub use byte::{ByteSizeExt, ByteSliceExt};
pub use error::error_chain;
pub use iter::IteratorExt;
pub use map::{to_value_map, ValueMapExt};
pub use path::{clear_dir, ensure_subdir};
pub use string::{random_string, StringExt};
