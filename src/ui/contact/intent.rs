use crate::contact::Delivery;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ContactIntent {
    /// Printable character typed into the focused field.
    Input(char),
    /// Enter inside the message field.
    Newline,
    Backspace,
    FocusNext,
    FocusPrev,
    /// Payload validated and handed to the delivery task.
    Submitting,
    /// Form input did not validate.
    Rejected { reason: String },
    /// Endpoint failed; the mail client handoff follows.
    Fallback { notice: String },
    /// Mail client opened with the message. Clears the fields; the status
    /// stays until `Delivered`.
    HandedOff,
    /// Message left the app. Clears the fields.
    Delivered { delivery: Delivery },
}

impl Intent for ContactIntent {}
