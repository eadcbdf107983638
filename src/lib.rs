//! Career guide library: track matching, skill-gap analysis and learning roadmaps

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod knowledge;
pub mod output;
pub mod processing;
pub mod profile;

pub use config::Config;
pub use error::{CareerGuideError, Result};
pub use knowledge::KnowledgeBase;
pub use output::GuidanceResult;
pub use processing::GuidanceEngine;
pub use profile::{Profile, ProfileRequest};
