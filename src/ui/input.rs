use crate::ui::app::App;
use crate::ui::contact::{ContactIntent, FormField};
use crate::ui::sections::Section;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Lines moved by PageUp/PageDown.
const PAGE: u16 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Left => return app.prev_section(),
        KeyCode::Right => return app.next_section(),
        KeyCode::Up => return app.scroll_up(1),
        KeyCode::Down => return app.scroll_down(1),
        KeyCode::PageUp => return app.scroll_up(PAGE),
        KeyCode::PageDown => return app.scroll_down(PAGE),
        _ => {}
    }

    if app.section() == Section::Contact {
        handle_form_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Tab => app.next_section(),
        KeyCode::BackTab => app.prev_section(),
        KeyCode::Char(ch) => {
            if let Some(section) = Section::from_digit(ch) {
                app.select_section(section);
            }
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.submit_contact();
        return;
    }

    match key.code {
        KeyCode::Esc => app.select_section(Section::About),
        KeyCode::Tab => app.dispatch_contact(ContactIntent::FocusNext),
        KeyCode::BackTab => app.dispatch_contact(ContactIntent::FocusPrev),
        KeyCode::Enter => match app.contact_form().focus {
            FormField::Send => app.submit_contact(),
            FormField::Message => app.dispatch_contact(ContactIntent::Newline),
            FormField::Name | FormField::Email => app.dispatch_contact(ContactIntent::FocusNext),
        },
        KeyCode::Backspace => app.dispatch_contact(ContactIntent::Backspace),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.dispatch_contact(ContactIntent::Input(ch))
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
