use std::fmt;
use std::io;

use telelink_frame::FrameError;
use telelink_packet::CommandError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Local I/O failures, such as a closed stdout pipe.
pub fn io_error(context: &str, err: io::Error) -> CliError {
    CliError::new(FAILURE, format!("{context}: {err}"))
}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    match err {
        FrameError::BadFraming
        | FrameError::LengthMismatch { .. }
        | FrameError::ChecksumMismatch { .. } => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        FrameError::Record(_) => CliError::new(INTERNAL, format!("{context}: {err}")),
    }
}

pub fn command_error(context: &str, err: CommandError) -> CliError {
    CliError::new(USAGE, format!("{context}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use telelink_packet::RecordError;

    #[test]
    fn corrupt_frames_are_invalid_data() {
        let err = frame_error("decode failed", FrameError::BadFraming);
        assert_eq!(err.code, DATA_INVALID);
        assert!(err.message.starts_with("decode failed: "));

        let err = frame_error(
            "decode failed",
            FrameError::ChecksumMismatch {
                expected: 1,
                actual: 2,
            },
        );
        assert_eq!(err.code, DATA_INVALID);
    }

    #[test]
    fn record_errors_are_internal() {
        let err = frame_error(
            "decode failed",
            FrameError::Record(RecordError::SchemaMismatch {
                expected: "command",
                actual: "telemetry",
            }),
        );
        assert_eq!(err.code, INTERNAL);
    }

    #[test]
    fn io_errors_are_failures() {
        let err = io_error(
            "write failed",
            io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        );
        assert_eq!(err.code, FAILURE);
        assert_eq!(err.message, "write failed: pipe closed");
    }

    #[test]
    fn command_errors_are_usage() {
        let err = command_error("invalid command", CommandError::Empty);
        assert_eq!(err.code, USAGE);
    }
}
