//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_endpoint;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio::contact::{ContactError, MailClient};
use folio::content::Content;
use folio::ui::app::App;
use folio::ui::rotator::{TitleFrame, TitleSurface};
use folio::ui::theme::ThemeMode;
use folio::ui::title::SharedTitle;
use parking_lot::Mutex;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Surface that keeps every frame it receives.
#[derive(Default)]
pub struct RecordingSurface {
    frames: Mutex<Vec<TitleFrame>>,
}

impl RecordingSurface {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn frames(&self) -> Vec<TitleFrame> {
        self.frames.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.frames.lock().len()
    }

    pub fn last(&self) -> Option<TitleFrame> {
        self.frames.lock().last().cloned()
    }
}

impl TitleSurface for RecordingSurface {
    fn present(&self, frame: TitleFrame) {
        self.frames.lock().push(frame);
    }
}

/// Mail client that records URLs instead of launching anything.
pub struct FakeMailClient {
    opened: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeMailClient {
    pub fn working() -> Arc<Self> {
        Arc::new(Self {
            opened: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    pub fn broken() -> Arc<Self> {
        Arc::new(Self {
            opened: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().clone()
    }
}

impl MailClient for FakeMailClient {
    fn open(&self, url: &str) -> Result<(), ContactError> {
        self.opened.lock().push(url.to_string());
        if self.fail {
            return Err(ContactError::MailClient(io::Error::new(
                io::ErrorKind::NotFound,
                "no mail client",
            )));
        }
        Ok(())
    }
}

/// Write `contents` to a file named `name` inside a fresh temp dir.
pub fn temp_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write file");
    (temp_dir, path)
}

/// Small content document used across tests.
pub const SAMPLE_CONTENT: &str = r#"
[profile]
name = "Ada Example"
role = "Engineer"
location = "Remote"
email = "ada@example.com"
summary = "Builds things."
tags = ["Rust"]
titles = ["Engineer", "Writer"]

[[skills]]
title = "Languages"
items = ["Rust", "Python", "ML basics (TensorFlow, PyTorch)"]

[[projects]]
title = "Folio"
description = "Terminal portfolio"
tech = ["Rust"]
links = { code = "https://example.com/folio" }

[[experience]]
timeframe = "2019"
role = "Intern"
org = "First Co"
summary = "Started out."

[[experience]]
timeframe = "2022"
role = "Engineer"
org = "Second Co"
summary = "Shipped things."

[contact]
headline = "Say hi"
email = "ada@example.com"
"#;

pub fn sample_content() -> Content {
    toml::from_str(SAMPLE_CONTENT).expect("sample content parses")
}

pub fn make_app() -> App {
    App::new(
        Arc::new(sample_content()),
        ThemeMode::Dark,
        SharedTitle::new(),
    )
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}
