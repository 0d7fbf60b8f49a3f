use crate::domain::common::entities::app_errors::CoreError;

/// Semester titles and the code each one must carry.
pub const SEMESTER_TITLE_CODES: [(&str, &str); 3] =
    [("Autumn", "01"), ("Summer", "02"), ("Fall", "03")];

pub fn code_for_title(title: &str) -> Option<&'static str> {
    SEMESTER_TITLE_CODES
        .iter()
        .find(|(known, _)| *known == title)
        .map(|(_, code)| *code)
}

pub fn ensure_code_matches_title(title: &str, code: &str) -> Result<(), CoreError> {
    match code_for_title(title) {
        Some(expected) if expected == code => Ok(()),
        _ => Err(CoreError::InvalidSemesterCode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_for_title() {
        assert_eq!(code_for_title("Autumn"), Some("01"));
        assert_eq!(code_for_title("Summer"), Some("02"));
        assert_eq!(code_for_title("Fall"), Some("03"));
        assert_eq!(code_for_title("Winter"), None);
        assert_eq!(code_for_title("autumn"), None);
    }

    #[test]
    fn test_ensure_code_matches_title() {
        assert!(ensure_code_matches_title("Fall", "03").is_ok());
        assert_eq!(
            ensure_code_matches_title("Fall", "01"),
            Err(CoreError::InvalidSemesterCode)
        );
        assert_eq!(
            ensure_code_matches_title("Winter", "04"),
            Err(CoreError::InvalidSemesterCode)
        );
    }
}
