use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Record not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid semester code")]
    InvalidSemesterCode,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// HTTP status a transport layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            CoreError::NotFound => 404,
            CoreError::Conflict(_) => 409,
            CoreError::InvalidSemesterCode | CoreError::Invalid(_) => 400,
            CoreError::InternalServerError => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(CoreError::NotFound.status_code(), 404);
        assert_eq!(CoreError::Conflict("gone".into()).status_code(), 409);
        assert_eq!(CoreError::InvalidSemesterCode.status_code(), 400);
        assert_eq!(CoreError::InternalServerError.status_code(), 500);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            CoreError::Conflict("admin already deleted".into()).to_string(),
            "Conflict: admin already deleted"
        );
    }
}
