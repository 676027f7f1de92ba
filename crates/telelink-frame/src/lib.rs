//! KISS-style framing for telelink packets.
//!
//! Every packet travels as:
//! - a `0xC0` delimiter and a one-byte link type,
//! - the packed record payload followed by its 16-bit additive checksum,
//!   with `0xC0`/`0xDB` escaped,
//! - a closing `0xC0` delimiter.
//!
//! Decoding takes exactly one delimited frame. Finding frame boundaries in a
//! byte stream belongs to the transport.

pub mod checksum;
pub mod codec;
pub mod error;
pub mod escape;

pub use checksum::{checksum, verify};
pub use codec::{
    decode, decode_packet, decode_with_config, encode, encode_into, encode_packet,
    encode_with_config, peek_kind, FrameConfig, CHECKSUM_SIZE, FRAMING_OVERHEAD, LINK_TYPE,
};
pub use error::{FrameError, Result};
pub use escape::{escape, unescape, DELIM, ESC, T_DELIM, T_ESC};
