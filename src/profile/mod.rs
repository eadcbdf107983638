//! Profile data model, caller-side validation and best-effort text extraction

pub mod extractor;
pub mod validation;

pub use extractor::ProfileExtractor;
pub use validation::ProfileRequest;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "High School")]
    HighSchool,
    #[serde(rename = "Bachelor's")]
    Bachelors,
    #[serde(rename = "Master's")]
    Masters,
    #[serde(rename = "PhD")]
    Phd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Student,
    Fresher,
    Junior,
    Mid,
    Senior,
}

/// Ordered keyword table; the first keyword found decides the tier.
const EDUCATION_KEYWORDS: &[(&str, EducationLevel)] = &[
    ("high school", EducationLevel::HighSchool),
    ("bachelor", EducationLevel::Bachelors),
    ("master", EducationLevel::Masters),
    ("phd", EducationLevel::Phd),
    ("doctorate", EducationLevel::Phd),
];

const EXPERIENCE_KEYWORDS: &[(&str, ExperienceLevel)] = &[
    ("student", ExperienceLevel::Student),
    ("fresher", ExperienceLevel::Fresher),
    ("junior", ExperienceLevel::Junior),
    ("mid", ExperienceLevel::Mid),
    ("senior", ExperienceLevel::Senior),
];

/// How tier keywords are located in free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TierMatching {
    /// Plain substring search: "mastered" counts as "master".
    #[default]
    Substring,
    /// Keyword must line up with whole words. A possessive or plural
    /// ending is ignored, so "Bachelor's" and "Masters" still match.
    WordBoundary,
}

/// Drop a trailing `'s`, `’s` or `s` from a lowercased word.
fn strip_word_suffix(word: &str) -> &str {
    word.strip_suffix("'s")
        .or_else(|| word.strip_suffix("’s"))
        .or_else(|| word.strip_suffix('s'))
        .unwrap_or(word)
}

impl TierMatching {
    fn find<T: Copy>(&self, text: &str, table: &[(&str, T)]) -> Option<T> {
        let haystack = match self {
            TierMatching::Substring => text.to_lowercase(),
            TierMatching::WordBoundary => {
                let words: Vec<String> = text
                    .unicode_words()
                    .map(|w| strip_word_suffix(&w.to_lowercase()).to_string())
                    .collect();
                format!(" {} ", words.join(" "))
            }
        };

        table
            .iter()
            .find(|(keyword, _)| match self {
                TierMatching::Substring => haystack.contains(keyword),
                TierMatching::WordBoundary => haystack.contains(&format!(" {} ", keyword)),
            })
            .map(|(_, tier)| *tier)
    }
}

impl EducationLevel {
    pub fn detect(text: &str, matching: TierMatching) -> Option<Self> {
        matching.find(text, EDUCATION_KEYWORDS)
    }

    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Bachelors => "Bachelor's",
            EducationLevel::Masters => "Master's",
            EducationLevel::Phd => "PhD",
        }
    }
}

impl ExperienceLevel {
    pub fn detect(text: &str, matching: TierMatching) -> Option<Self> {
        matching.find(text, EXPERIENCE_KEYWORDS)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Student => "student",
            ExperienceLevel::Fresher => "fresher",
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A person's background as seen by the engine.
///
/// Every field may be empty; an empty profile still yields a well-formed
/// (if sparse) guidance result. Sets keep output order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: Option<String>,
    pub education_level: Option<EducationLevel>,
    pub experience_level: Option<ExperienceLevel>,
    pub skills: BTreeSet<String>,
    pub interests: BTreeSet<String>,
}

impl Profile {
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder::default()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.education_level.is_none()
            && self.experience_level.is_none()
            && self.skills.is_empty()
            && self.interests.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct ProfileBuilder {
    profile: Profile,
}

impl ProfileBuilder {
    pub fn name(mut self, name: &str) -> Self {
        self.profile.name = Some(name.to_string());
        self
    }

    pub fn education(mut self, level: EducationLevel) -> Self {
        self.profile.education_level = Some(level);
        self
    }

    pub fn experience(mut self, level: ExperienceLevel) -> Self {
        self.profile.experience_level = Some(level);
        self
    }

    pub fn skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.profile.skills.extend(skills.into_iter().map(Into::into));
        self
    }

    pub fn interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.profile.interests.extend(interests.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Profile {
        self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_education_keyword_wins() {
        let text = "Bachelor's in CS, currently doing a Master's";
        assert_eq!(EducationLevel::detect(text, TierMatching::Substring), Some(EducationLevel::Bachelors));
        assert_eq!(EducationLevel::detect("Doctorate in physics", TierMatching::Substring), Some(EducationLevel::Phd));
        assert_eq!(EducationLevel::detect("self taught", TierMatching::Substring), None);
    }

    #[test]
    fn test_substring_matching_false_positive_is_preserved() {
        // "mastered" contains "master"
        let text = "Name: Ann\nI mastered SQL";
        assert_eq!(EducationLevel::detect(text, TierMatching::Substring), Some(EducationLevel::Masters));
        assert_eq!(EducationLevel::detect(text, TierMatching::WordBoundary), None);
    }

    #[test]
    fn test_word_boundary_matches_multi_word_keyword() {
        let text = "Education: High School diploma";
        assert_eq!(
            EducationLevel::detect(text, TierMatching::WordBoundary),
            Some(EducationLevel::HighSchool)
        );
        assert_eq!(
            ExperienceLevel::detect("Mid level engineer", TierMatching::WordBoundary),
            Some(ExperienceLevel::Mid)
        );
        assert_eq!(ExperienceLevel::detect("middleware", TierMatching::WordBoundary), None);
        assert_eq!(ExperienceLevel::detect("middleware", TierMatching::Substring), Some(ExperienceLevel::Mid));
    }

    #[test]
    fn test_word_boundary_accepts_possessive_and_plural_degrees() {
        let matching = TierMatching::WordBoundary;
        assert_eq!(
            EducationLevel::detect("Education: Bachelor's degree in CS", matching),
            Some(EducationLevel::Bachelors)
        );
        assert_eq!(
            EducationLevel::detect("Master's in Statistics", matching),
            Some(EducationLevel::Masters)
        );
        assert_eq!(EducationLevel::detect("Masters, 2019", matching), Some(EducationLevel::Masters));
        assert_eq!(EducationLevel::detect("Bachelor’s in Design", matching), Some(EducationLevel::Bachelors));
        assert_eq!(EducationLevel::detect("High Schools diploma", matching), Some(EducationLevel::HighSchool));
        assert_eq!(ExperienceLevel::detect("worked with seniors", matching), Some(ExperienceLevel::Senior));
        // still whole words only
        assert_eq!(EducationLevel::detect("I mastered SQL", matching), None);
    }

    #[test]
    fn test_experience_table_order() {
        // "student" precedes "senior" in the table
        assert_eq!(
            ExperienceLevel::detect("senior student mentor", TierMatching::Substring),
            Some(ExperienceLevel::Student)
        );
    }

    #[test]
    fn test_tier_serialization_labels() {
        assert_eq!(serde_json::to_string(&EducationLevel::Bachelors).unwrap(), "\"Bachelor's\"");
        assert_eq!(serde_json::to_string(&ExperienceLevel::Senior).unwrap(), "\"senior\"");
    }

    #[test]
    fn test_builder_and_empty() {
        assert!(Profile::default().is_empty());
        let profile = Profile::builder().name("Sarah").skills(["python", "sql"]).build();
        assert!(!profile.is_empty());
        assert_eq!(profile.skills.len(), 2);
    }
}
