//! Input manager for loading profile files

use crate::error::{CareerGuideError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PlainTextExtractor, TextExtractor};
use crate::profile::ProfileRequest;
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// A loaded profile file, before it reaches the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    /// Free text for the best-effort extractor
    Text(String),
    /// Structured request, validated by the caller
    Structured(ProfileRequest),
}

pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn load_profile(&mut self, path: &Path) -> Result<RawInput> {
        let file_type = self.detect_file_type(path)?;
        let content = self.extract_text(path).await?;

        match file_type {
            FileType::Json => {
                let request = serde_json::from_str(&content).map_err(|e| {
                    CareerGuideError::InvalidInput(format!("Invalid JSON profile '{}': {}", path.display(), e))
                })?;
                Ok(RawInput::Structured(request))
            }
            FileType::Toml => {
                let request = toml::from_str(&content).map_err(|e| {
                    CareerGuideError::InvalidInput(format!("Invalid TOML profile '{}': {}", path.display(), e))
                })?;
                Ok(RawInput::Structured(request))
            }
            _ => Ok(RawInput::Text(content)),
        }
    }

    /// File contents as text; Markdown is reduced to plain text.
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(path) {
                debug!("Using cached contents for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !fs::try_exists(path).await.unwrap_or(false) {
            return Err(CareerGuideError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;

        let text = match file_type {
            FileType::Json | FileType::Toml | FileType::Text => {
                info!("Reading profile file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown profile: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(CareerGuideError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path.to_path_buf(), text.clone());
        }

        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| CareerGuideError::InvalidInput(format!("File has no extension: {}", path.display())))?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
