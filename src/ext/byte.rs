//! Byte helpers: data URLs and human-readable sizes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use humansize::{format_size, format_size_i, WINDOWS};

/// Fallback content type when the caller does not know one.
const OCTET_STREAM: &str = "application/octet-stream";

/// Extension methods for byte slices.
pub trait ByteSliceExt {
    /// Encodes the bytes as a `data:<mime>;base64,...` URL.
    fn to_data_url(&self, mime_type: &str) -> String;

    /// Like [`ByteSliceExt::to_data_url`] with the generic
    /// `application/octet-stream` content type.
    fn to_data_url_unknown(&self) -> String;
}

impl ByteSliceExt for [u8] {
    fn to_data_url(&self, mime_type: &str) -> String {
        format!("data:{};base64,{}", mime_type, STANDARD.encode(self))
    }

    fn to_data_url_unknown(&self) -> String {
        self.to_data_url(OCTET_STREAM)
    }
}

/// Human-readable byte sizes in the classic console style: 1024 math with
/// `KB`/`MB`/`GB` unit names.
pub trait ByteSizeExt {
    fn to_byte_size(&self) -> String;
}

impl ByteSizeExt for u64 {
    fn to_byte_size(&self) -> String {
        format_size(*self, WINDOWS)
    }
}

impl ByteSizeExt for i64 {
    fn to_byte_size(&self) -> String {
        format_size_i(*self, WINDOWS)
    }
}
