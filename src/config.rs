//! Configuration management for the career guide

use crate::error::{CareerGuideError, Result};
use crate::processing::planner::PlanningSettings;
use crate::processing::scorer::ScoringSettings;
use crate::processing::EngineSettings;
use crate::profile::TierMatching;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub planning: PlanningConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// TOML knowledge base replacing the built-in tables
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub max_bonus: i64,
    pub max_recommendations: usize,
    pub top_skills: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    pub base_timeline_months: f64,
    pub priority_gap_count: usize,
    pub max_projects: usize,
    pub max_certifications: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Match education/experience keywords on whole words only
    pub word_boundary_tiers: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let defaults = ScoringSettings::default();
        Self {
            max_bonus: defaults.max_bonus,
            max_recommendations: defaults.max_recommendations,
            top_skills: defaults.top_skills,
        }
    }
}

impl Default for PlanningConfig {
    fn default() -> Self {
        let defaults = PlanningSettings::default();
        Self {
            base_timeline_months: defaults.base_timeline_months,
            priority_gap_count: defaults.priority_gap_count,
            max_projects: defaults.max_projects,
            max_certifications: defaults.max_certifications,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Config {
    /// Load the user config, writing defaults on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| CareerGuideError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CareerGuideError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("career-guide")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if self.scoring.max_recommendations == 0 {
            return Err(CareerGuideError::Configuration(
                "scoring.max_recommendations must be at least 1".to_string(),
            ));
        }
        let base = self.planning.base_timeline_months;
        if base.is_nan() || base <= 0.0 {
            return Err(CareerGuideError::Configuration(
                "planning.base_timeline_months must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            scoring: ScoringSettings {
                max_bonus: self.scoring.max_bonus,
                max_recommendations: self.scoring.max_recommendations,
                top_skills: self.scoring.top_skills,
            },
            planning: PlanningSettings {
                base_timeline_months: self.planning.base_timeline_months,
                priority_gap_count: self.planning.priority_gap_count,
                max_projects: self.planning.max_projects,
                max_certifications: self.planning.max_certifications,
            },
            tier_matching: if self.extraction.word_boundary_tiers {
                TierMatching::WordBoundary
            } else {
                TierMatching::Substring
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_engine_defaults() {
        let config = Config::default();
        assert_eq!(config.engine_settings(), EngineSettings::default());
        assert_eq!(config.output.format, OutputFormat::Console);
        assert!(config.knowledge.path.is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.scoring.max_recommendations = 3;
        config.extraction.word_boundary_tiers = true;
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.engine_settings().tier_matching, TierMatching::WordBoundary);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\nmax_bonus = 5\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.scoring.max_bonus, 5);
        assert_eq!(loaded.scoring.top_skills, 5);
        assert_eq!(loaded.planning, PlanningConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\nmax_recommendations = 0\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(CareerGuideError::Configuration(_))));

        std::fs::write(&path, "[planning\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(CareerGuideError::Configuration(_))));
    }
}
