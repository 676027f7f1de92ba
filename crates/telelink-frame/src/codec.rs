use bytes::{BufMut, Bytes, BytesMut};
use telelink_packet::{Packet, PacketKind, PacketSchema, Record};
use tracing::{debug, trace};

use crate::checksum::{checksum, verify};
use crate::error::{FrameError, Result};
use crate::escape::{escape_into, unescape, DELIM};

/// KISS link-type byte (data frame, port 0).
pub const LINK_TYPE: u8 = 0x00;

/// Checksum trailer width in bytes.
pub const CHECKSUM_SIZE: usize = 2;

/// Leading delimiter, link type and trailing delimiter.
pub const FRAMING_OVERHEAD: usize = 3;

/// Configuration for the frame codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConfig {
    /// Link-type byte written after the leading delimiter. Default: `0x00`.
    pub link_type: u8,
    /// Reject frames whose link-type byte differs from `link_type`.
    /// Default: false, the byte is ignored on receive.
    pub enforce_link_type: bool,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            link_type: LINK_TYPE,
            enforce_link_type: false,
        }
    }
}

/// Encode a record into a complete frame.
///
/// Wire format:
/// ```text
/// ┌───────┬───────────┬──────────────────────────────────────┬───────┐
/// │ 0xC0  │ link type │ escaped( payload ‖ checksum (2B LE) )│ 0xC0  │
/// └───────┴───────────┴──────────────────────────────────────┴───────┘
/// ```
pub fn encode(record: &Record) -> Bytes {
    let mut dst = BytesMut::new();
    encode_into(record, &mut dst);
    dst.freeze()
}

/// Append the frame for `record` to `dst`.
pub fn encode_into(record: &Record, dst: &mut BytesMut) {
    encode_with_config(record, &FrameConfig::default(), dst);
}

pub fn encode_with_config(record: &Record, config: &FrameConfig, dst: &mut BytesMut) {
    let mut body = BytesMut::with_capacity(record.byte_width() + CHECKSUM_SIZE);
    record.pack(&mut body);
    let sum = checksum(&body);
    body.put_u16_le(sum);

    dst.reserve(body.len() + FRAMING_OVERHEAD);
    dst.put_u8(DELIM);
    dst.put_u8(config.link_type);
    escape_into(&body, dst);
    dst.put_u8(DELIM);
}

/// Decode one delimited candidate frame against `schema`.
///
/// The buffer must hold exactly one frame, delimiters included. No scanning
/// or buffering happens here; on error the caller drops the frame.
pub fn decode(schema: PacketSchema, frame: &[u8]) -> Result<Record> {
    decode_with_config(schema, frame, &FrameConfig::default())
}

pub fn decode_with_config(
    schema: PacketSchema,
    frame: &[u8],
    config: &FrameConfig,
) -> Result<Record> {
    if frame.len() < FRAMING_OVERHEAD || frame[0] != DELIM || frame[frame.len() - 1] != DELIM {
        debug!(len = frame.len(), "rejecting frame without delimiters");
        return Err(FrameError::BadFraming);
    }

    let link_type = frame[1];
    if config.enforce_link_type && link_type != config.link_type {
        debug!(
            link_type,
            expected = config.link_type,
            "rejecting frame with unexpected link type"
        );
        return Err(FrameError::BadFraming);
    }

    let body = unescape(&frame[2..frame.len() - 1]);
    let width = schema.byte_width();
    let expected = width + CHECKSUM_SIZE;
    if body.len() != expected {
        debug!(
            schema = schema.name(),
            expected,
            actual = body.len(),
            "rejecting frame with wrong length"
        );
        return Err(FrameError::LengthMismatch {
            expected,
            actual: body.len(),
        });
    }

    let (payload, trailer) = body.split_at(width);
    let mut src = payload;
    let record = Record::unpack(schema, &mut src).ok_or(FrameError::LengthMismatch {
        expected,
        actual: body.len(),
    })?;

    let carried = u16::from_le_bytes([trailer[0], trailer[1]]);
    if !verify(payload, carried) {
        let computed = checksum(payload);
        debug!(
            schema = schema.name(),
            carried, computed, "rejecting frame with bad checksum"
        );
        return Err(FrameError::ChecksumMismatch {
            expected: carried,
            actual: computed,
        });
    }

    trace!(schema = schema.name(), kind = %record.kind(), "decoded frame");
    Ok(record)
}

/// Encode a concrete packet into a complete frame.
pub fn encode_packet<P: Packet>(packet: &P) -> Bytes {
    encode(packet.record())
}

/// Decode a frame as packet type `P`.
pub fn decode_packet<P: Packet>(frame: &[u8]) -> Result<P> {
    let record = decode(P::schema(), frame)?;
    Ok(P::from_record(record)?)
}

/// Read the discriminator of a candidate frame without decoding it.
///
/// Receivers use this to pick the schema to decode with. Anything that does
/// not look like the start of a frame reads as `Unknown`.
pub fn peek_kind(frame: &[u8]) -> PacketKind {
    match frame {
        [DELIM, _, first, ..] if *first != DELIM => PacketKind::from_byte(*first),
        _ => PacketKind::Unknown,
    }
}
