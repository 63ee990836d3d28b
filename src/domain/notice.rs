use super::*;
use std::time::Duration;

/// How long a notice stays on screen before it is dismissed.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Short-lived message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub ttl: Duration,
}

impl Notice {
    pub fn success(message: &str) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.to_string(),
            ttl: NOTICE_TTL,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.to_string(),
            ttl: NOTICE_TTL,
        }
    }

    pub fn added() -> Self {
        Self::success("Contact added successfully!")
    }

    pub fn updated() -> Self {
        Self::success("Contact updated successfully!")
    }

    pub fn deleted() -> Self {
        Self::success("Contact deleted successfully!")
    }

    pub fn from_error(err: &AppError) -> Self {
        match err {
            AppError::Validation(ValidationError::MissingField) => {
                Self::error("Please fill all required fields!")
            }
            AppError::Validation(ValidationError::DuplicatePhone) => {
                Self::error("Phone number already exists!")
            }
            AppError::Validation(ValidationError::DuplicateEmail) => {
                Self::error("Email already exists!")
            }
            AppError::Validation(ValidationError::InvalidEmailFormat) => {
                Self::error("Please enter a valid email address!")
            }
            AppError::NotFound(_) => Self::error("Contact not found!"),
            other => Self::error(&other.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_user_messages() {
        let notice = Notice::from_error(&ValidationError::DuplicateEmail.into());
        assert!(notice.is_error());
        assert_eq!(notice.message, "Email already exists!");
        assert_eq!(notice.ttl, NOTICE_TTL);

        let notice = Notice::from_error(&AppError::NotFound("Contact".to_string()));
        assert_eq!(notice.message, "Contact not found!");
    }

    #[test]
    fn success_notices_are_not_errors() {
        assert!(!Notice::added().is_error());
        assert_eq!(Notice::deleted().message, "Contact deleted successfully!");
    }
}
