//! Error type returned by the scheduling engines.

use std::error::Error;
use std::fmt;

use crate::validation::{ValidationError, ValidationErrorKind};

/// Failure of a scheduling run.
///
/// Zero jobs is never an error; every engine returns an empty schedule.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The jobs or the policy parameters were rejected before simulating.
    InvalidParameter(Vec<ValidationError>),
}

impl ScheduleError {
    /// Validation problems behind this error.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidParameter(errors) => errors,
        }
    }

    /// Whether any of the problems is of the given kind.
    pub fn has_kind(&self, kind: ValidationErrorKind) -> bool {
        self.errors().iter().any(|e| e.kind == kind)
    }
}

impl From<ValidationError> for ScheduleError {
    fn from(error: ValidationError) -> Self {
        Self::InvalidParameter(vec![error])
    }
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidParameter(errors)
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(errors) => {
                f.write_str("invalid parameter: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
        }
    }
}

impl Error for ScheduleError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_jobs, validate_quantum};
    use crate::models::Job;

    #[test]
    fn test_display_joins_messages() {
        let errors = validate_jobs(&[Job::new("A", 0), Job::new("B", -1)]).unwrap_err();
        let err = ScheduleError::from(errors);
        let text = err.to_string();
        assert!(text.starts_with("invalid parameter: "));
        assert!(text.contains("'A'"));
        assert!(text.contains("; "));
    }

    #[test]
    fn test_from_single_error() {
        let err: ScheduleError = validate_quantum(0).unwrap_err().into();
        assert_eq!(err.errors().len(), 1);
        assert!(err.has_kind(ValidationErrorKind::NonPositiveQuantum));
        assert!(!err.has_kind(ValidationErrorKind::NonPositiveBurst));
    }
}
