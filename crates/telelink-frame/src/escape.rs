//! KISS byte escaping.
//!
//! `DELIM` and `ESC` never appear literally between the delimiters of a
//! frame. Each is replaced by `ESC` followed by a transposed code.

use bytes::{BufMut, BytesMut};

/// Frame delimiter (KISS FEND).
pub const DELIM: u8 = 0xC0;

/// Escape introducer (KISS FESC).
pub const ESC: u8 = 0xDB;

/// Transposed delimiter (KISS TFEND).
pub const T_DELIM: u8 = 0xDC;

/// Transposed escape (KISS TFESC).
pub const T_ESC: u8 = 0xDD;

/// Append the escaped form of `src` to `dst`.
pub fn escape_into(src: &[u8], dst: &mut BytesMut) {
    dst.reserve(src.len());
    for &byte in src {
        match byte {
            DELIM => dst.put_slice(&[ESC, T_DELIM]),
            ESC => dst.put_slice(&[ESC, T_ESC]),
            other => dst.put_u8(other),
        }
    }
}

pub fn escape(src: &[u8]) -> BytesMut {
    let mut dst = BytesMut::with_capacity(src.len());
    escape_into(src, &mut dst);
    dst
}

/// Reverse [`escape`].
///
/// An `ESC` that is not followed by `T_DELIM` or `T_ESC`, including one at
/// the very end of `src`, is copied through unchanged and the byte after it
/// is processed normally.
pub fn unescape(src: &[u8]) -> BytesMut {
    let mut dst = BytesMut::with_capacity(src.len());
    let mut i = 0;
    while i < src.len() {
        let byte = src[i];
        if byte == ESC {
            match src.get(i + 1) {
                Some(&T_DELIM) => {
                    dst.put_u8(DELIM);
                    i += 2;
                    continue;
                }
                Some(&T_ESC) => {
                    dst.put_u8(ESC);
                    i += 2;
                    continue;
                }
                _ => {}
            }
        }
        dst.put_u8(byte);
        i += 1;
    }
    dst
}
