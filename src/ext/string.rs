//! String helpers: transliteration, slugs, hashing, blank fallbacks.

use deunicode::deunicode;
use md5::{Digest, Md5};
use rand::Rng;

/// Characters used by [`random_string`].
const RANDOM_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Extension methods for string slices.
pub trait StringExt {
    /// Transliterates Unicode to plain ASCII (strips accents, maps symbols).
    fn to_ascii(&self) -> String;

    /// Builds a URL-friendly slug: ASCII transliteration, lowercased, with
    /// whitespace and hyphen runs collapsed to single hyphens and everything
    /// that is not alphanumeric dropped.
    fn slugify(&self) -> String;

    /// Lowercase hex MD5 digest of the string's UTF-8 bytes.
    fn md5_hex(&self) -> String;

    /// Returns the string, or `fallback()` when it is empty or whitespace-only.
    fn or_if_blank<F: FnOnce() -> String>(&self, fallback: F) -> String;
}

impl StringExt for str {
    fn to_ascii(&self) -> String {
        deunicode(self)
    }

    fn slugify(&self) -> String {
        let ascii = deunicode(self).to_lowercase();
        let mut slug = String::with_capacity(ascii.len());
        let mut last_was_hyphen = false;

        for c in ascii.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c);
                last_was_hyphen = false;
            } else if c.is_whitespace() || c == '-' {
                if !last_was_hyphen {
                    slug.push('-');
                    last_was_hyphen = true;
                }
            }
            // Everything else is dropped.
        }

        slug.trim_matches('-').to_string()
    }

    fn md5_hex(&self) -> String {
        let mut hasher = Md5::new();
        hasher.update(self.as_bytes());
        hex::encode(hasher.finalize())
    }

    fn or_if_blank<F: FnOnce() -> String>(&self, fallback: F) -> String {
        if self.trim().is_empty() {
            fallback()
        } else {
            self.to_string()
        }
    }
}

/// Generates a random lowercase alphanumeric string of the given length.
pub fn random_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| RANDOM_CHARS[rng.gen_range(0..RANDOM_CHARS.len())] as char)
        .collect()
}
