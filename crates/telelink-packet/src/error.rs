use crate::field::FieldType;

/// Errors raised when a record is built or mutated against its schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The field index is past the end of the schema.
    #[error("field index {index} out of range (schema {schema} has {len} fields)")]
    IndexOutOfRange {
        schema: &'static str,
        index: usize,
        len: usize,
    },

    /// The value's type does not match the field's declared type.
    #[error("field {index} expects {expected:?}, got {actual:?}")]
    TypeMismatch {
        index: usize,
        expected: FieldType,
        actual: FieldType,
    },

    /// A value sequence does not have one entry per schema field.
    #[error("schema {schema} has {expected} fields, got {actual} values")]
    ArityMismatch {
        schema: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The record was built for a different packet schema.
    #[error("record uses schema {actual}, expected {expected}")]
    SchemaMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

/// Errors raised while resolving an operator command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The command name is not in the command table.
    #[error("unrecognized command: {0}")]
    UnknownCommand(String),

    /// The command requires an argument that was not given.
    #[error("{command} requires {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    /// The command argument is not a valid unsigned integer.
    #[error("invalid {what} for {command}: {value}")]
    InvalidArgument {
        command: &'static str,
        what: &'static str,
        value: String,
    },

    /// The command line was empty.
    #[error("empty command line")]
    Empty,
}

pub type Result<T> = std::result::Result<T, RecordError>;
