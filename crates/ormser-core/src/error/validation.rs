use super::Error;

/// Error when input does not satisfy a derived serializer.
#[derive(Debug)]
pub(super) struct ValidationError {
    schema: Box<str>,
    failures: Vec<FieldFailure>,
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    /// Name of the failing field
    pub field: String,

    /// Why it failed
    pub reason: String,
}

impl FieldFailure {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "field required")
    }

    pub fn null(field: impl Into<String>) -> Self {
        Self::new(field, "value is not nullable")
    }
}

impl core::fmt::Display for FieldFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "`{}`: {}", self.field, self.reason)
    }
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "validation failed for {}", self.schema)?;

        for (i, failure) in self.failures.iter().enumerate() {
            f.write_str(if i == 0 { ": " } else { "; " })?;
            core::fmt::Display::fmt(failure, f)?;
        }

        Ok(())
    }
}

impl Error {
    /// Creates a validation error listing every failing field.
    pub fn validation(schema: impl Into<String>, failures: Vec<FieldFailure>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            schema: schema.into().into(),
            failures,
        }))
    }

    /// Returns `true` if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Validation(_))
    }

    /// Returns the failing fields if this is a validation error.
    pub fn validation_failures(&self) -> Option<&[FieldFailure]> {
        match self.kind() {
            super::ErrorKind::Validation(err) => Some(&err.failures),
            _ => None,
        }
    }
}
