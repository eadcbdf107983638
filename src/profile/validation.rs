//! Structured profile requests and the caller-side validation contract
//!
//! The engine tolerates empty fields silently. Callers that accept user
//! input run [`ProfileRequest::validate`] first so that a missing name or an
//! empty skill list is reported as a validation failure instead of producing
//! a meaningless guidance result.

use crate::error::{CareerGuideError, Result};
use crate::profile::{EducationLevel, ExperienceLevel, Profile, TierMatching};
use serde::{Deserialize, Deserializer, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub name: String,

    /// Free-form education description, e.g. "Master's in Statistics"
    #[serde(default)]
    pub education: String,

    /// Free-form experience description, e.g. "Senior level"
    #[serde(default)]
    pub experience: String,

    /// Accepts either a list or a single comma-separated string
    #[serde(default, deserialize_with = "list_or_csv")]
    pub skills: Vec<String>,

    #[serde(default, deserialize_with = "list_or_csv")]
    pub interests: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrCsv {
    List(Vec<String>),
    Csv(String),
}

fn list_or_csv<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<ListOrCsv>::deserialize(deserializer)? {
        Some(ListOrCsv::List(items)) => items,
        Some(ListOrCsv::Csv(text)) => text.split(',').map(|s| s.to_string()).collect(),
        None => Vec::new(),
    };
    Ok(clean_list(raw))
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl ProfileRequest {
    pub fn new(name: &str, skills: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Parse a comma-separated list the same way deserialization does.
    pub fn split_list(text: &str) -> Vec<String> {
        clean_list(text.split(',').map(|s| s.to_string()).collect())
    }

    /// Enforce the caller contract: non-empty name, at least one skill.
    pub fn validate(&self) -> Result<Profile> {
        self.validate_with(TierMatching::Substring)
    }

    /// [`validate`](Self::validate) with an explicit tier keyword mode.
    pub fn validate_with(&self, matching: TierMatching) -> Result<Profile> {
        if self.name.trim().is_empty() {
            return Err(CareerGuideError::InvalidInput("Name is required".to_string()));
        }

        if clean_list(self.skills.clone()).is_empty() {
            return Err(CareerGuideError::InvalidInput(
                "At least one skill is required".to_string(),
            ));
        }

        Ok(self.to_profile_with(matching))
    }

    /// Convert without validation. Blank fields become unset or empty.
    pub fn to_profile(&self) -> Profile {
        self.to_profile_with(TierMatching::Substring)
    }

    pub fn to_profile_with(&self, matching: TierMatching) -> Profile {
        let name = Some(self.name.trim().to_string()).filter(|n| !n.is_empty());

        Profile {
            name,
            education_level: EducationLevel::detect(&self.education, matching),
            experience_level: ExperienceLevel::detect(&self.experience, matching),
            skills: clean_list(self.skills.clone()).into_iter().collect(),
            interests: clean_list(self.interests.clone()).into_iter().collect(),
        }
    }

    /// Content hash used by callers that cache guidance per request.
    ///
    /// The hash covers the request as JSON with keys in sorted order.
    pub fn cache_key(&self) -> Result<String> {
        // a `Value` object keeps its keys sorted
        let canonical = serde_json::to_string(&serde_json::to_value(self)?)?;
        let digest = Sha256::digest(canonical.as_bytes());
        Ok(format!("ai:guidance:{}", hex::encode(digest)))
    }
}
