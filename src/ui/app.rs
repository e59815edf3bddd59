use std::cell::Cell;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::contact::{ContactClient, ContactPayload, Delivery};
use crate::content::Content;
use crate::ui::contact::{ContactFormState, ContactIntent, ContactReducer};
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;
use crate::ui::rotator::TitleFrame;
use crate::ui::sections::Section;
use crate::ui::theme::ThemeMode;
use crate::ui::title::SharedTitle;

/// Pause between the mail client handoff and reporting the message as sent.
pub const MAIL_HANDOFF_SETTLE: Duration = Duration::from_millis(400);

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Runs contact submissions on the tokio runtime and reports back through
/// the UI event channel.
pub struct ContactDispatcher {
    client: Arc<ContactClient>,
    runtime: Handle,
    events: Sender<AppEvent>,
    task: Option<JoinHandle<()>>,
}

impl ContactDispatcher {
    pub fn new(client: Arc<ContactClient>, runtime: Handle, events: Sender<AppEvent>) -> Self {
        Self {
            client,
            runtime,
            events,
            task: None,
        }
    }

    fn spawn(&mut self, payload: ContactPayload) {
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        self.task = Some(self.runtime.spawn(async move {
            let submission = client.submit(&payload).await;
            if let Some(err) = &submission.fallback {
                let _ = events.send(AppEvent::ContactFallback(err.user_message().to_string()));
            }
            if matches!(submission.delivery, Delivery::MailClient { .. }) {
                let _ = events.send(AppEvent::ContactHandedOff);
                tokio::time::sleep(MAIL_HANDOFF_SETTLE).await;
            }
            let _ = events.send(AppEvent::ContactDelivered(submission.delivery));
        }));
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

pub struct App {
    should_quit: bool,
    section: Section,
    scroll: u16,
    /// Largest useful scroll offset, recorded by the renderer.
    scroll_limit: Cell<u16>,
    theme: ThemeMode,
    content: Arc<Content>,
    title: SharedTitle,
    blink_on: bool,
    size: Option<(u16, u16)>,
    /// State of the contact form (MVI pattern).
    contact_form: ContactFormState,
    /// Delivery resources, managed outside MVI.
    contact: Option<ContactDispatcher>,
}

impl App {
    pub fn new(content: Arc<Content>, theme: ThemeMode, title: SharedTitle) -> Self {
        Self {
            should_quit: false,
            section: Section::About,
            scroll: 0,
            scroll_limit: Cell::new(u16::MAX),
            theme,
            content,
            title,
            blink_on: true,
            size: None,
            contact_form: ContactFormState::default(),
            contact: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn select_section(&mut self, section: Section) {
        if self.section != section {
            self.section = section;
            self.scroll = 0;
            self.scroll_limit.set(u16::MAX);
        }
    }

    pub fn next_section(&mut self) {
        self.select_section(self.section.next());
    }

    pub fn prev_section(&mut self) {
        self.select_section(self.section.prev());
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.scroll_limit.get());
    }

    pub(crate) fn set_scroll_limit(&self, limit: u16) {
        self.scroll_limit.set(limit);
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = ?self.theme, "Theme toggled");
    }

    pub fn title_frame(&self) -> TitleFrame {
        self.title.frame()
    }

    /// Caret is drawn when the rotator wants it and the blink is in its on phase.
    pub fn caret_shown(&self, frame: &TitleFrame) -> bool {
        frame.caret_visible && self.blink_on
    }

    pub fn on_tick(&mut self) {
        self.blink_on = !self.blink_on;
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.scroll_limit.set(u16::MAX);
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn contact_form(&self) -> &ContactFormState {
        &self.contact_form
    }

    pub fn attach_contact(&mut self, dispatcher: ContactDispatcher) {
        self.contact = Some(dispatcher);
    }

    /// Endpoint used for submissions, `None` when the mail client is used.
    pub fn contact_endpoint(&self) -> Option<&str> {
        self.contact
            .as_ref()
            .and_then(|dispatcher| dispatcher.client.endpoint())
    }

    pub fn dispatch_contact(&mut self, intent: ContactIntent) {
        dispatch_mvi!(self, contact_form, ContactReducer, intent);
    }

    /// Validate the form and start delivery.
    pub fn submit_contact(&mut self) {
        if self.contact_form.is_sending() {
            return;
        }

        let form = &self.contact_form;
        let payload = match ContactPayload::from_form(&form.name, &form.email, &form.message) {
            Ok(payload) => payload,
            Err(err) => {
                self.dispatch_contact(ContactIntent::Rejected {
                    reason: err.to_string(),
                });
                return;
            }
        };

        if self.contact.is_none() {
            self.dispatch_contact(ContactIntent::Rejected {
                reason: "Contact delivery is unavailable".to_string(),
            });
            return;
        }

        self.dispatch_contact(ContactIntent::Submitting);
        if let Some(dispatcher) = self.contact.as_mut() {
            dispatcher.spawn(payload);
        }
    }

    pub fn on_contact_fallback(&mut self, notice: String) {
        self.dispatch_contact(ContactIntent::Fallback { notice });
    }

    pub fn on_contact_handed_off(&mut self) {
        self.dispatch_contact(ContactIntent::HandedOff);
    }

    pub fn on_contact_delivered(&mut self, delivery: Delivery) {
        self.dispatch_contact(ContactIntent::Delivered { delivery });
    }

    /// Abort in-flight background work.
    pub fn cancel_tasks(&mut self) {
        if let Some(dispatcher) = self.contact.as_mut() {
            dispatcher.cancel();
        }
    }
}
