//! State for the title rotator.

use std::sync::Arc;

use thiserror::Error;

use crate::ui::mvi::UiState;

/// Errors raised when building a rotation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotationError {
    #[error("at least one title is required")]
    NoTitles,

    #[error("title at position {index} is empty")]
    EmptyTitle { index: usize },
}

/// Animation phase. Each phase has its own delay before the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Appending one character per tick.
    #[default]
    Typing,
    /// Full title shown, waiting before deletion starts.
    PausingAfterType,
    /// Removing one character per tick.
    Deleting,
    /// Buffer empty, waiting before the next title starts.
    PausingAfterDelete,
}

/// Rotation through a fixed list of titles.
///
/// `displayed` is always a prefix of the current title, counted in chars.
/// The default value holds no titles and ignores every tick; real rotations
/// come from [`RotationState::new`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RotationState {
    pub(super) titles: Arc<[String]>,
    pub(super) current_index: usize,
    pub(super) displayed: String,
    pub(super) phase: Phase,
    pub(super) reduced_motion: bool,
}

impl UiState for RotationState {}

impl RotationState {
    /// Start a rotation at the first title with an empty buffer.
    pub fn new<I, S>(titles: I) -> Result<Self, RotationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();
        if titles.is_empty() {
            return Err(RotationError::NoTitles);
        }
        if let Some(index) = titles.iter().position(|title| title.is_empty()) {
            return Err(RotationError::EmptyTitle { index });
        }

        Ok(Self {
            titles: titles.into(),
            current_index: 0,
            displayed: String::new(),
            phase: Phase::Typing,
            reduced_motion: false,
        })
    }

    /// Start at another title (wrapped into range).
    pub fn starting_at(mut self, index: usize) -> Self {
        if !self.titles.is_empty() {
            self.current_index = index % self.titles.len();
        }
        self
    }

    /// Pin the buffer to the full current title and stop reacting to ticks.
    pub fn pinned(mut self) -> Self {
        self.displayed = self.current_title().to_string();
        self.reduced_motion = true;
        self
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_title(&self) -> &str {
        self.titles
            .get(self.current_index)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Number of chars currently shown.
    pub fn typed_len(&self) -> usize {
        self.displayed.chars().count()
    }
}
