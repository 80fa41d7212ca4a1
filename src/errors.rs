use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Template(askama::Error),
    Validation(Vec<String>),
    DuplicateEmail,
    AccountNotFound,
    WrongPassword,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "Storage error: {e}"),
            AppError::Json(e) => write!(f, "Serialization error: {e}"),
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Validation(errors) => write!(f, "{}", errors.join("; ")),
            AppError::DuplicateEmail => write!(f, "Email already registered"),
            AppError::AccountNotFound => write!(f, "No user with that role and email"),
            AppError::WrongPassword => write!(f, "Incorrect password"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Template(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}
