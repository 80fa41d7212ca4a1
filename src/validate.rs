use crate::errors::AppError;

/// Validate a required text field: anything but whitespace.
pub fn validate_required(value: &str, field_name: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{field_name} is required"));
    }
    None
}

/// Collect the failed checks into one `Validation` error, or `Ok` when every
/// check passed.
pub fn ensure(checks: impl IntoIterator<Item = Option<String>>) -> Result<(), AppError> {
    let errors: Vec<String> = checks.into_iter().flatten().collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_rejected() {
        assert_eq!(validate_required("  ", "Title").as_deref(), Some("Title is required"));
        assert!(validate_required("Demo", "Title").is_none());
    }

    #[test]
    fn ensure_reports_every_failure() {
        let err = ensure([
            validate_required("", "Email"),
            validate_required("x", "Name"),
            validate_required("", "Password"),
        ])
        .unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert_eq!(errors, vec!["Email is required", "Password is required"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
