use thiserror::Error;

/// Reasons an untrusted request body is rejected
///
/// The endpoint answers every variant with the same fixed message; the
/// variant is only logged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent or null
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// Prompt is empty after trimming
    #[error("prompt is empty")]
    EmptyPrompt,

    /// Enum field holds a value outside its option set
    #[error("`{value}` is not a valid {field}")]
    UnknownOption { field: &'static str, value: String },

    /// Palette color is not `#RGB` or `#RRGGBB`
    #[error("palette.{field} `{value}` is not a hex color")]
    InvalidColor { field: &'static str, value: String },

    /// Body is JSON but not an object of the expected field types
    #[error("malformed request: {0}")]
    Malformed(String),
}
