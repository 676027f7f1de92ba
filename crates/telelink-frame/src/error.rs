use telelink_packet::RecordError;

/// Errors that can occur while decoding a candidate frame.
///
/// All of them mean "drop this frame and keep listening".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// The buffer is too short or is not bounded by delimiter bytes.
    #[error("bad framing (frame must be at least 3 bytes and start and end with 0xC0)")]
    BadFraming,

    /// The unescaped body does not match the schema width plus checksum.
    #[error("length mismatch (expected {expected} bytes, got {actual})")]
    LengthMismatch { expected: usize, actual: usize },

    /// The checksum carried in the frame does not match the payload.
    #[error("checksum mismatch (frame carries {expected:#06x}, payload gives {actual:#06x})")]
    ChecksumMismatch { expected: u16, actual: u16 },

    /// The decoded record cannot be viewed as the requested packet type.
    #[error("record error: {0}")]
    Record(#[from] RecordError),
}

pub type Result<T> = std::result::Result<T, FrameError>;
