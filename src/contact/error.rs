use thiserror::Error;

/// Why a form could not be turned into a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("email address looks invalid")]
    InvalidEmail,
}

/// Delivery failures.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Contact endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("Contact endpoint unreachable: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Failed to launch mail client: {0}")]
    MailClient(#[source] std::io::Error),
}

impl ContactError {
    /// Short text for the form status line.
    pub fn user_message(&self) -> &'static str {
        match self {
            ContactError::Client(_) | ContactError::Status { .. } | ContactError::Network(_) => {
                "Network error occurred. Opening mail client as fallback..."
            }
            ContactError::MailClient(_) => "Could not open a mail client.",
        }
    }
}
