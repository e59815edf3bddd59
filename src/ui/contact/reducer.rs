use crate::ui::mvi::Reducer;

use super::intent::ContactIntent;
use super::state::{ContactFormState, FormField, SubmitStatus};

pub struct ContactReducer;

impl Reducer for ContactReducer {
    type State = ContactFormState;
    type Intent = ContactIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ContactIntent::Input(ch) => {
                if !state.is_sending() {
                    if let Some(value) = state.focused_mut() {
                        value.push(ch);
                        state.hint = None;
                    }
                }
                state
            }
            ContactIntent::Newline => {
                if !state.is_sending() && state.focus == FormField::Message {
                    state.message.push('\n');
                }
                state
            }
            ContactIntent::Backspace => {
                if !state.is_sending() {
                    if let Some(value) = state.focused_mut() {
                        value.pop();
                    }
                }
                state
            }
            ContactIntent::FocusNext => {
                state.focus = state.focus.next();
                state
            }
            ContactIntent::FocusPrev => {
                state.focus = state.focus.prev();
                state
            }
            ContactIntent::Submitting => {
                state.status = SubmitStatus::Sending;
                state.hint = None;
                state
            }
            ContactIntent::Rejected { reason } => {
                state.hint = Some(reason);
                state
            }
            ContactIntent::Fallback { notice } => match state.status {
                SubmitStatus::Sending => {
                    state.status = SubmitStatus::Error(notice);
                    state
                }
                _ => state,
            },
            ContactIntent::HandedOff => ContactFormState {
                status: state.status,
                focus: FormField::Name,
                ..ContactFormState::default()
            },
            ContactIntent::Delivered { delivery } => ContactFormState {
                status: SubmitStatus::Sent(delivery),
                focus: FormField::Name,
                ..ContactFormState::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Delivery;

    fn reduce_all(state: ContactFormState, intents: Vec<ContactIntent>) -> ContactFormState {
        intents.into_iter().fold(state, ContactReducer::reduce)
    }

    #[test]
    fn input_goes_to_focused_field() {
        let state = reduce_all(
            ContactFormState::default(),
            vec![
                ContactIntent::Input('A'),
                ContactIntent::FocusNext,
                ContactIntent::Input('a'),
                ContactIntent::Input('@'),
            ],
        );
        assert_eq!(state.name, "A");
        assert_eq!(state.email, "a@");
        assert_eq!(state.focus, FormField::Email);
    }

    #[test]
    fn send_button_ignores_input() {
        let state = ContactFormState {
            focus: FormField::Send,
            ..Default::default()
        };
        let state = reduce_all(state, vec![ContactIntent::Input('x'), ContactIntent::Backspace]);
        assert_eq!(state, ContactFormState { focus: FormField::Send, ..Default::default() });
    }

    #[test]
    fn newline_only_in_message() {
        let state = reduce_all(ContactFormState::default(), vec![ContactIntent::Newline]);
        assert_eq!(state.name, "");

        let state = ContactFormState {
            focus: FormField::Message,
            message: "hi".into(),
            ..Default::default()
        };
        let state = ContactReducer::reduce(state, ContactIntent::Newline);
        assert_eq!(state.message, "hi\n");
    }

    #[test]
    fn focus_wraps_both_ways() {
        let state = ContactReducer::reduce(ContactFormState::default(), ContactIntent::FocusPrev);
        assert_eq!(state.focus, FormField::Send);
        let state = ContactReducer::reduce(state, ContactIntent::FocusNext);
        assert_eq!(state.focus, FormField::Name);
    }

    #[test]
    fn editing_is_locked_while_sending() {
        let state = ContactFormState {
            name: "Ada".into(),
            ..Default::default()
        };
        let state = reduce_all(
            state,
            vec![
                ContactIntent::Submitting,
                ContactIntent::Input('x'),
                ContactIntent::Backspace,
            ],
        );
        assert_eq!(state.name, "Ada");
        assert_eq!(state.status, SubmitStatus::Sending);
    }

    #[test]
    fn rejected_sets_hint_until_next_edit() {
        let state = ContactReducer::reduce(
            ContactFormState::default(),
            ContactIntent::Rejected {
                reason: "Name is required".into(),
            },
        );
        assert_eq!(state.hint.as_deref(), Some("Name is required"));
        let state = ContactReducer::reduce(state, ContactIntent::Input('A'));
        assert_eq!(state.hint, None);
    }

    #[test]
    fn fallback_then_delivered_clears_form() {
        let state = ContactFormState {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "hi".into(),
            focus: FormField::Send,
            ..Default::default()
        };
        let state = reduce_all(
            state,
            vec![
                ContactIntent::Submitting,
                ContactIntent::Fallback {
                    notice: "Network error".into(),
                },
            ],
        );
        assert_eq!(state.status, SubmitStatus::Error("Network error".into()));

        let delivery = Delivery::MailClient {
            url: "mailto:x".into(),
            opened: true,
        };
        let state = ContactReducer::reduce(
            state,
            ContactIntent::Delivered {
                delivery: delivery.clone(),
            },
        );
        assert_eq!(state.status, SubmitStatus::Sent(delivery));
        assert_eq!(state.name, "");
        assert_eq!(state.message, "");
        assert_eq!(state.focus, FormField::Name);
    }

    #[test]
    fn handoff_clears_fields_but_keeps_status() {
        let state = ContactFormState {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hi".into(),
            focus: FormField::Send,
            ..Default::default()
        };
        let state = reduce_all(
            state,
            vec![
                ContactIntent::Submitting,
                ContactIntent::Fallback {
                    notice: "Network error".into(),
                },
                ContactIntent::HandedOff,
            ],
        );
        assert_eq!(state.status, SubmitStatus::Error("Network error".into()));
        assert!(state.name.is_empty() && state.email.is_empty() && state.message.is_empty());
        assert_eq!(state.focus, FormField::Name);
        assert!(state.is_sending());
    }

    #[test]
    fn fallback_outside_sending_is_ignored() {
        let state = ContactReducer::reduce(
            ContactFormState::default(),
            ContactIntent::Fallback {
                notice: "late".into(),
            },
        );
        assert_eq!(state.status, SubmitStatus::Idle);
    }
}
