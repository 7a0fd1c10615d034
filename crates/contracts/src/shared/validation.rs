use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Storefront contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Message of one invalid field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: ContactField,
    pub message: String,
}

pub const REQUIRED: &str = "Required";
pub const INVALID_EMAIL: &str = "Invalid email";

pub fn is_valid_email(email: &str) -> bool {
    email.trim().validate_email()
}

impl ContactForm {
    /// Every invalid field, in form order; empty when the form can be sent
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let mut push = |field, message: &str| {
            errors.push(FieldError {
                field,
                message: message.to_string(),
            })
        };
        if self.name.trim().is_empty() {
            push(ContactField::Name, REQUIRED);
        }
        if self.email.trim().is_empty() {
            push(ContactField::Email, REQUIRED);
        } else if !is_valid_email(&self.email) {
            push(ContactField::Email, INVALID_EMAIL);
        }
        if self.message.trim().is_empty() {
            push(ContactField::Message, REQUIRED);
        }
        errors
    }
}

/// Admin sign-in form check; nothing is sent when it fails
pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Email and password are required".into());
    }
    if !is_valid_email(email) {
        return Err("Please enter a valid email address".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ContactForm::default().validate();
        let fields: Vec<ContactField> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
        assert!(errors.iter().all(|e| e.message == REQUIRED));
    }

    #[test]
    fn test_invalid_email() {
        let form = ContactForm {
            name: "Rana".into(),
            email: "rana@".into(),
            message: "Hello".into(),
        };
        assert_eq!(
            form.validate(),
            vec![FieldError {
                field: ContactField::Email,
                message: INVALID_EMAIL.into()
            }]
        );
    }

    #[test]
    fn test_valid_form() {
        let form = ContactForm {
            name: "Rana".into(),
            email: " rana@example.com ".into(),
            message: "Do you ship bulk orders?".into(),
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_login_validation() {
        assert!(validate_login("", "x").is_err());
        assert!(validate_login("admin", "x").is_err());
        assert!(validate_login("admin@karamlibnan.com", "secret").is_ok());
    }
}
