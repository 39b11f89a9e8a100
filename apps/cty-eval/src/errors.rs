use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Library-level error type.
/// The binary wraps these with `anyhow::Context` naming the input file.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The packager's own error, kept intact as the source.
    #[error("Packaging error: {0}")]
    Package(#[source] Box<dyn StdError + Send + Sync + 'static>),

    #[error("Invalid evaluation input: {0}")]
    Input(#[from] serde_json::Error),
}

/// The eight fields every evaluation must carry, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    FirstName,
    LastName,
    Date,
    Course,
    Instructor,
    Site,
    TeachingAssistant,
    Completion,
}

impl RequiredField {
    /// Scan order used when validating a new evaluation.
    pub const ORDER: [RequiredField; 8] = [
        RequiredField::FirstName,
        RequiredField::LastName,
        RequiredField::Date,
        RequiredField::Course,
        RequiredField::Instructor,
        RequiredField::Site,
        RequiredField::TeachingAssistant,
        RequiredField::Completion,
    ];

    /// 1-based position of this field in [`RequiredField::ORDER`].
    pub fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|f| *f == self)
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RequiredField::FirstName => "first_name",
            RequiredField::LastName => "last_name",
            RequiredField::Date => "date",
            RequiredField::Course => "course",
            RequiredField::Instructor => "instructor",
            RequiredField::Site => "site",
            RequiredField::TeachingAssistant => "teaching_assistant",
            RequiredField::Completion => "completion",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised at construction for the first absent (or blank) required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Required argument #{position} ({field}) was missing")]
pub struct MissingFieldError {
    pub field: RequiredField,
    pub position: usize,
}

impl MissingFieldError {
    pub fn new(field: RequiredField) -> Self {
        Self {
            field,
            position: field.position(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_follow_scan_order() {
        for (i, field) in RequiredField::ORDER.iter().enumerate() {
            assert_eq!(field.position(), i + 1);
        }
    }

    #[test]
    fn test_missing_field_message_names_field_and_position() {
        let err = MissingFieldError::new(RequiredField::TeachingAssistant);
        assert_eq!(err.position, 7);
        assert_eq!(
            err.to_string(),
            "Required argument #7 (teaching_assistant) was missing"
        );
    }

    #[test]
    fn test_package_error_keeps_original_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::WriteZero, "disk full");
        let err = EvaluationError::Package(Box::new(inner));

        assert_eq!(err.to_string(), "Packaging error: disk full");
        let source = err.source().expect("package error should expose its source");
        let original = source
            .downcast_ref::<std::io::Error>()
            .expect("source should be the original error type");
        assert_eq!(original.kind(), std::io::ErrorKind::WriteZero);
    }

    #[test]
    fn test_evaluation_error_is_transparent_for_missing_field() {
        let err: EvaluationError = MissingFieldError::new(RequiredField::Site).into();
        assert_eq!(err.to_string(), "Required argument #6 (site) was missing");
    }
}
