//! CLI interface for the career guide

use crate::config::OutputFormat;
use crate::error::{CareerGuideError, Result};
use crate::profile::ProfileRequest;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "career-guide")]
#[command(about = "Career track matching, skill-gap analysis and learning roadmaps")]
#[command(long_about = "Match a profile against a knowledge base of career tracks, then build a skill-gap analysis, a phased learning roadmap and resume suggestions for the best match")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate full career guidance for a profile
    Guide {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file (a directory gets a generated file name)
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include resources, resume boosters and clarifications
        #[arg(short, long)]
        detailed: bool,
    },

    /// List the career tracks in the knowledge base
    Tracks,

    /// List every skill spelling the normalizer recognizes
    Skills,

    /// Skill gap and roadmap for a specific track
    Plan {
        /// Career track name, e.g. "DevOps Engineer"
        #[arg(short, long)]
        track: String,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Roadmap title and to-do checklist for the top match
    Checklist {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

/// Where the profile comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Profile file (JSON, TOML, TXT, MD)
    #[arg(short, long, conflicts_with = "text")]
    pub profile: Option<PathBuf>,

    /// Free-text profile description
    #[arg(long)]
    pub text: Option<String>,

    /// Name
    #[arg(long, conflicts_with_all = ["profile", "text"])]
    pub name: Option<String>,

    /// Education, e.g. "Master's"
    #[arg(long, conflicts_with_all = ["profile", "text"])]
    pub education: Option<String>,

    /// Experience, e.g. "junior"
    #[arg(long, conflicts_with_all = ["profile", "text"])]
    pub experience: Option<String>,

    /// Comma-separated skills
    #[arg(long, conflicts_with_all = ["profile", "text"])]
    pub skills: Option<String>,

    /// Comma-separated interests
    #[arg(long, conflicts_with_all = ["profile", "text"])]
    pub interests: Option<String>,

    /// Skip the name / skills checks on structured input
    #[arg(long)]
    pub no_validate: bool,
}

impl ProfileArgs {
    pub fn has_inline_fields(&self) -> bool {
        self.name.is_some()
            || self.education.is_some()
            || self.experience.is_some()
            || self.skills.is_some()
            || self.interests.is_some()
    }

    /// Build a structured request from the inline flags.
    pub fn to_request(&self) -> ProfileRequest {
        ProfileRequest {
            name: self.name.clone().unwrap_or_default(),
            education: self.education.clone().unwrap_or_default(),
            experience: self.experience.clone().unwrap_or_default(),
            skills: self.skills.as_deref().map(ProfileRequest::split_list).unwrap_or_default(),
            interests: self.interests.as_deref().map(ProfileRequest::split_list).unwrap_or_default(),
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(CareerGuideError::InvalidInput(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        ))),
    }
}
