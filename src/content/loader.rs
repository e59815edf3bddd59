use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::content::types::Content;

const BUILTIN: &str = include_str!("../../assets/portfolio.toml");

/// Errors that can occur when loading content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read content file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse content from {origin}: {source}")]
    ParseError {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Content validation failed: {message}")]
    ValidationError { message: String },
}

impl Content {
    /// The content shipped with the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::parse(BUILTIN, "built-in content")
    }

    /// Loads `path` if given, the built-in content otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ContentError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::builtin(),
        }
    }

    /// Loads and validates a content file.
    pub fn load_from(path: &Path) -> Result<Self, ContentError> {
        let text = fs::read_to_string(path).map_err(|e| ContentError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&text, &format!("'{}'", path.display()))
    }

    fn parse(text: &str, origin: &str) -> Result<Self, ContentError> {
        let content: Content = toml::from_str(text).map_err(|e| ContentError::ParseError {
            origin: origin.to_string(),
            source: e,
        })?;
        content.validate()?;
        Ok(content)
    }

    /// Validates the content.
    ///
    /// Checks:
    /// - The profile has a name
    /// - At least one rotating title is configured
    /// - No title is empty
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::ValidationError {
                message: "profile.name must not be empty".to_string(),
            });
        }

        if self.profile.titles.is_empty() {
            return Err(ContentError::ValidationError {
                message: "profile.titles needs at least one title".to_string(),
            });
        }

        if let Some(idx) = self.profile.titles.iter().position(|t| t.is_empty()) {
            return Err(ContentError::ValidationError {
                message: format!("profile.titles[{}] is empty", idx),
            });
        }

        Ok(())
    }
}
