use super::Error;

/// Error when a serializer's field selection does not fit the model.
///
/// This occurs when:
/// - Both `include_fields` and `exclude_fields` are given
/// - A field is named in both selectors
/// - A selector names a field the model's table does not have
///
/// Raised by `Serializer::validate_fields`, never by `Serializer::build`.
#[derive(Debug)]
pub(super) struct ConfigurationError {
    message: Box<str>,
}

impl std::error::Error for ConfigurationError {}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid serializer configuration: {}", self.message)
    }
}

impl Error {
    /// Creates a serializer configuration error.
    pub fn configuration(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Configuration(ConfigurationError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a serializer configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Configuration(_))
    }
}
