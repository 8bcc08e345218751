//! Hashing text straight to its lowercase hex rendering.

use alloc::string::String;
use digest::Digest;

use crate::Md5;

/// How a string is turned into the bytes that get hashed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum TextEncoding {
    /// The UTF-8 bytes of the string.
    #[default]
    Utf8,
    /// One byte per UTF-16 code unit, keeping only its low 8 bits.
    ///
    /// Only the byte mapping differs; the digest is still standard MD5, so
    /// this does not reproduce digests from signers with a non-standard
    /// round schedule. It agrees with [`TextEncoding::Utf8`] on US-ASCII
    /// and is lossy for anything above U+00FF.
    Latin1Truncated,
}

/// Digest `input` (UTF-8) and render it as 32 lowercase hex characters.
pub fn digest_hex(input: &str) -> String {
    digest_hex_with(input, TextEncoding::Utf8)
}

/// Digest `input` using the given text encoding.
pub fn digest_hex_with(input: &str, encoding: TextEncoding) -> String {
    match encoding {
        TextEncoding::Utf8 => digest_bytes_hex(input.as_bytes()),
        TextEncoding::Latin1Truncated => {
            let mut hasher = Md5::new();
            let mut buf = [0u8; 64];
            let mut pos = 0;
            for unit in input.encode_utf16() {
                buf[pos] = unit as u8;
                pos += 1;
                if pos == buf.len() {
                    hasher.update(buf);
                    pos = 0;
                }
            }
            hasher.update(&buf[..pos]);
            hex::encode(hasher.finalize())
        }
    }
}

/// Digest raw bytes and render the result as 32 lowercase hex characters.
pub fn digest_bytes_hex(data: &[u8]) -> String {
    hex::encode(Md5::digest(data))
}
