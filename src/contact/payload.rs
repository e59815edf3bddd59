use serde::Serialize;

use super::error::ValidationError;

/// Origin tag sent with every submission.
pub const SOURCE: &str = "portfolio";

/// JSON body posted to the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    pub source: String,
}

impl ContactPayload {
    /// Trim and validate raw form input.
    pub fn from_form(name: &str, email: &str, message: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        for (field, value) in [("Name", name), ("Email", email), ("Message", message)] {
            if value.is_empty() {
                return Err(ValidationError::MissingField { field });
            }
        }

        if !looks_like_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            source: SOURCE.to_string(),
        })
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(' ')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_fields() {
        let payload = ContactPayload::from_form("  Ada ", " ada@example.com", "hi\n").unwrap();
        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.message, "hi");
        assert_eq!(payload.source, "portfolio");
    }

    #[test]
    fn rejects_blank_fields() {
        assert_eq!(
            ContactPayload::from_form(" ", "a@b.c", "hi"),
            Err(ValidationError::MissingField { field: "Name" })
        );
        assert_eq!(
            ContactPayload::from_form("Ada", "a@b.c", "   "),
            Err(ValidationError::MissingField { field: "Message" })
        );
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["ada", "@example.com", "ada@", "a@b@c", "a da@b.c"] {
            assert_eq!(
                ContactPayload::from_form("Ada", email, "hi"),
                Err(ValidationError::InvalidEmail),
                "{email}"
            );
        }
    }

    #[test]
    fn serializes_with_source() {
        let payload = ContactPayload::from_form("Ada", "ada@example.com", "hi").unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "hi",
                "source": "portfolio"
            })
        );
    }
}
