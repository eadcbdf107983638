//! Guidance result and its renderers

pub mod formatter;
pub mod report;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::{GuidanceMeta, GuidanceResult, TrackGuidance};
