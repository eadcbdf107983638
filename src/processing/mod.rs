//! Guidance processing stages

pub mod booster;
pub mod checklist;
pub mod engine;
pub mod normalizer;
pub mod planner;
pub mod scorer;

pub use engine::{EngineSettings, GuidanceEngine};
