use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Form field names as they appear in the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    ProjectType,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::ProjectType, Field::Message];

    pub fn form_name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::ProjectType => "project-type",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_name())
    }
}

/// Validation failures. The display strings are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingField(Field),

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::ProjectType => &self.project_type,
            Field::Message => &self.message,
        }
    }

    /// All fields must be non-empty, then the email must look like `local@domain.tld`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(field) = Field::ALL.into_iter().find(|f| self.value(*f).is_empty()) {
            return Err(ValidationError::MissingField(field));
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    pub fn thank_you_message(&self) -> String {
        format!(
            "Thank you {}! I'll get back to you soon about your {} project.",
            self.name, self.project_type
        )
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            project_type: "DeFi".to_string(),
            message: "Let's build".to_string(),
        }
    }

    #[test]
    fn test_valid_submission() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_missing_field_reports_first_empty() {
        let mut s = filled();
        s.project_type.clear();
        s.message.clear();
        assert_eq!(
            s.validate(),
            Err(ValidationError::MissingField(Field::ProjectType))
        );
    }

    #[test]
    fn test_missing_fields_take_precedence_over_email() {
        let s = ContactSubmission {
            email: "not-an-email".to_string(),
            ..Default::default()
        };
        assert_eq!(s.validate(), Err(ValidationError::MissingField(Field::Name)));
    }

    #[test]
    fn test_invalid_email() {
        let s = ContactSubmission {
            email: "not-an-email".to_string(),
            ..filled()
        };
        assert_eq!(s.validate(), Err(ValidationError::InvalidEmail));
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@c.d"));
        assert!(!is_valid_email("a@@c.d"));
    }

    #[test]
    fn test_thank_you_message() {
        assert_eq!(
            filled().thank_you_message(),
            "Thank you Ada! I'll get back to you soon about your DeFi project."
        );
    }
}
