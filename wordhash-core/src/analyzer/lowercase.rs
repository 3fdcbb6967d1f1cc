//! Lowercasing unit.
//!
//! ASCII tokens are folded through a lookup table. Anything else goes through
//! `str::to_lowercase`, which folds titlecase letters, applies the Greek
//! final-sigma rule and may change the byte length (`"İ"` lowercases to two
//! code points).

use crate::analyzer::TextUnit;

#[rustfmt::skip]
const LOWERCASE_TABLE: [u8; 128] = [
    0x00,0x01,0x02,0x03,0x04,0x05,0x06,0x07,0x08,0x09,0x0a,0x0b,0x0c,0x0d,0x0e,0x0f,
    0x10,0x11,0x12,0x13,0x14,0x15,0x16,0x17,0x18,0x19,0x1a,0x1b,0x1c,0x1d,0x1e,0x1f,
    0x20,0x21,0x22,0x23,0x24,0x25,0x26,0x27,0x28,0x29,0x2a,0x2b,0x2c,0x2d,0x2e,0x2f,
    0x30,0x31,0x32,0x33,0x34,0x35,0x36,0x37,0x38,0x39,0x3a,0x3b,0x3c,0x3d,0x3e,0x3f,
    0x40,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x5b,0x5c,0x5d,0x5e,0x5f,
    0x60,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x7b,0x7c,0x7d,0x7e,0x7f,
];

/// Lowercases `token` into `out`, clearing it first.
///
/// Reuses the buffer's capacity if sufficient.
#[inline]
pub fn lowercase_into(token: &str, out: &mut String) {
    out.clear();
    out.reserve(token.len());

    if token.is_ascii() {
        out.extend(
            token
                .bytes()
                .map(|b| LOWERCASE_TABLE[b as usize] as char),
        );
    } else {
        out.push_str(&token.to_lowercase());
    }
}

/// Returns the lowercase form of `token`.
#[inline]
pub fn lowercase(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    lowercase_into(token, &mut out);
    out
}

/// Folds every token to lowercase.
///
/// Tokens that are already lowercase are passed through without reallocating.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseUnit;

impl TextUnit<Vec<String>> for LowercaseUnit {
    type Output = Vec<String>;

    fn transform(&self, input: Vec<String>) -> Vec<String> {
        input
            .into_iter()
            .map(|token| {
                if token.is_ascii() {
                    if token.bytes().any(|b| b.is_ascii_uppercase()) {
                        lowercase(&token)
                    } else {
                        token
                    }
                } else {
                    let lowered = token.to_lowercase();
                    if lowered == token {
                        token
                    } else {
                        lowered
                    }
                }
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
