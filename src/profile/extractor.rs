//! Best-effort profile extraction from loosely structured free text
//!
//! This is the legacy input path. It scans "Field: value" lines with
//! regular expressions and looks for every known skill surface form as a
//! plain substring, so results can contain false positives ("ai" inside
//! "email"). Structured input through [`ProfileRequest`](super::ProfileRequest)
//! is the preferred path.

use crate::error::{CareerGuideError, Result};
use crate::knowledge::KnowledgeBase;
use crate::profile::{EducationLevel, ExperienceLevel, Profile, TierMatching};
use aho_corasick::{AhoCorasick, MatchKind};
use log::debug;
use regex::Regex;
use std::collections::BTreeSet;

pub struct ProfileExtractor {
    name_regex: Regex,
    skill_regexes: Vec<Regex>,
    interest_regexes: Vec<Regex>,
    variant_matcher: AhoCorasick,
    variants: Vec<String>,
    tier_matching: TierMatching,
}

impl ProfileExtractor {
    pub fn new(kb: &KnowledgeBase) -> Result<Self> {
        let variants: Vec<String> = kb
            .synonyms()
            .surface_forms()
            .map(|s| s.to_lowercase())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        // Standard match kind is required for overlapping search
        let variant_matcher = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&variants)
            .map_err(|e| CareerGuideError::Processing(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self {
            name_regex: compile(r"(?i)name[:\s]+([^\n,]+)")?,
            skill_regexes: vec![
                compile(r"(?i)skills?[:\s]+([^.\n]+)")?,
                compile(r"(?i)know[:\s]+([^.\n]+)")?,
                compile(r"(?i)experience[:\s]+([^.\n]+)")?,
            ],
            interest_regexes: vec![
                compile(r"(?i)interests?[:\s]+([^.\n]+)")?,
                compile(r"(?i)like[:\s]+([^.\n]+)")?,
                compile(r"(?i)passions?[:\s]+([^.\n]+)")?,
            ],
            variant_matcher,
            variants,
            tier_matching: TierMatching::Substring,
        })
    }

    pub fn with_tier_matching(mut self, tier_matching: TierMatching) -> Self {
        self.tier_matching = tier_matching;
        self
    }

    /// Extract a profile from free text. Never fails: missing fields stay unset.
    pub fn extract(&self, text: &str) -> Profile {
        let name = self
            .name_regex
            .captures(text)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|n| !n.is_empty());

        let education_level = EducationLevel::detect(text, self.tier_matching);
        let experience_level = ExperienceLevel::detect(text, self.tier_matching);

        let mut skills = self.scan_known_skills(text);
        skills.extend(Self::labelled_tokens(&self.skill_regexes, text));

        let interests = Self::labelled_tokens(&self.interest_regexes, text);

        debug!(
            "Extracted profile: name={:?}, education={:?}, experience={:?}, {} skills, {} interests",
            name,
            education_level,
            experience_level,
            skills.len(),
            interests.len()
        );

        Profile {
            name,
            education_level,
            experience_level,
            skills,
            interests,
        }
    }

    /// Every dictionary surface form that occurs anywhere in the text.
    fn scan_known_skills(&self, text: &str) -> BTreeSet<String> {
        let lowered = text.to_lowercase();
        self.variant_matcher
            .find_overlapping_iter(&lowered)
            .map(|mat| self.variants[mat.pattern().as_usize()].clone())
            .collect()
    }

    /// Comma-separated values following any of the given labels.
    fn labelled_tokens(patterns: &[Regex], text: &str) -> BTreeSet<String> {
        patterns
            .iter()
            .flat_map(|pattern| pattern.captures_iter(text))
            .filter_map(|cap| cap.get(1))
            .flat_map(|m| m.as_str().split(','))
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .collect()
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| CareerGuideError::Processing(format!("Invalid pattern '{}': {}", pattern, e)))
}
