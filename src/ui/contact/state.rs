use crate::contact::Delivery;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Message,
    Send,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Message,
        FormField::Send,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
            FormField::Send => "Send Message",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Send,
            FormField::Send => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Send,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
            FormField::Send => FormField::Message,
        }
    }

    pub fn is_text(self) -> bool {
        !matches!(self, FormField::Send)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent(Delivery),
    /// Transient notice shown while falling back to the mail client.
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: FormField,
    pub status: SubmitStatus,
    /// Validation hint from the last rejected submit.
    pub hint: Option<String>,
}

impl UiState for ContactFormState {}

impl ContactFormState {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
            FormField::Send => "",
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.status, SubmitStatus::Sending | SubmitStatus::Error(_))
    }

    pub(super) fn focused_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Message => Some(&mut self.message),
            FormField::Send => None,
        }
    }
}
