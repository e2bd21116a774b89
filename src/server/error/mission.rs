use thiserror::Error;

/// A waypoint file could not be turned into a mission.
///
/// `MalformedLine` and `InvalidField` are only raised in strict parse mode; the lenient
/// parser skips such lines instead. Line numbers are 1-based positions in the payload.
#[derive(Error, Debug, PartialEq)]
pub enum MissionFormatError {
    #[error("Empty file")]
    EmptyInput,

    #[error("Invalid QGC waypoint format: header must start with 'QGC WPL' and a version")]
    BadHeader,

    #[error("Line {line} has {fields} fields, expected at least 12")]
    MalformedLine { line: usize, fields: usize },

    #[error("Line {line} has an invalid {field} value '{value}'")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },
}
