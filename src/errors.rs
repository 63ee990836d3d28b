use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingField,
    DuplicatePhone,
    DuplicateEmail,
    InvalidEmailFormat,
}

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Regex(regex::Error),
    Logger(flexi_logger::FlexiLoggerError),
    NotFound(String),
    ParseCommand(String),
    PersistenceUnavailable(String),
    Validation(ValidationError),
}

impl AppError {
    /// Returns the failed validation rule, if this is a validation error.
    pub fn validation(&self) -> Option<ValidationError> {
        match self {
            AppError::Validation(rule) => Some(*rule),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl From<flexi_logger::FlexiLoggerError> for AppError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        AppError::Logger(err)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField => write!(f, "name, phone and email are required"),
            ValidationError::DuplicatePhone => write!(f, "phone number already exists"),
            ValidationError::DuplicateEmail => write!(f, "email already exists"),
            ValidationError::InvalidEmailFormat => write!(f, "email address is not valid"),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Invalid contact data: {}", e)
            }
            AppError::Regex(e) => {
                write!(f, "Invalid validation pattern: {}", e)
            }
            AppError::Logger(e) => {
                write!(f, "Logger setup failed: {}", e)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized value: '{}'", cmd)
            }
            AppError::PersistenceUnavailable(msg) => {
                write!(f, "Storage unavailable: {}", msg)
            }
            AppError::Validation(rule) => {
                write!(f, "Validation failed: {}", rule)
            }
        }
    }
}

impl std::error::Error for AppError {}
