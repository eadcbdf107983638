//! Static knowledge base: career tracks, skill synonyms and learning resources
//!
//! The knowledge base is an immutable value handed to the engine. The
//! built-in tables can be replaced wholesale by a TOML file.

pub mod resources;
pub mod synonyms;
pub mod tracks;

pub use resources::{LearningResource, ResourceCatalog};
pub use synonyms::{SynonymDictionary, SynonymEntry};
pub use tracks::{CareerTrack, Phase, PhaseTemplate, RoadmapTemplates};

use crate::error::{CareerGuideError, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use strsim::jaro_winkler;

const SUGGESTION_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    tracks: Vec<CareerTrack>,
    #[serde(default)]
    synonyms: SynonymDictionary,
    #[serde(default)]
    resources: ResourceCatalog,
}

impl KnowledgeBase {
    /// Build a knowledge base, rejecting duplicate track or canonical skill names.
    pub fn new(
        tracks: Vec<CareerTrack>,
        synonyms: SynonymDictionary,
        resources: ResourceCatalog,
    ) -> Result<Self> {
        let kb = Self { tracks, synonyms, resources };
        kb.validate()?;
        Ok(kb)
    }

    /// The tables shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            tracks: tracks::builtin_tracks(),
            synonyms: synonyms::builtin_synonyms(),
            resources: resources::builtin_resources(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let kb: KnowledgeBase = toml::from_str(content)
            .map_err(|e| CareerGuideError::KnowledgeBase(format!("Failed to parse knowledge base: {}", e)))?;
        kb.validate()?;
        Ok(kb)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        info!("Loading knowledge base from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CareerGuideError::KnowledgeBase(format!("Failed to serialize knowledge base: {}", e)))
    }

    fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for track in &self.tracks {
            if !names.insert(track.name.as_str()) {
                return Err(CareerGuideError::KnowledgeBase(format!(
                    "Duplicate career track: {}",
                    track.name
                )));
            }
            if track.core_skills.is_empty() {
                debug!("Track '{}' declares no core skills", track.name);
            }
        }

        let mut canonicals = HashSet::new();
        for entry in self.synonyms.entries() {
            if !canonicals.insert(entry.canonical.as_str()) {
                return Err(CareerGuideError::KnowledgeBase(format!(
                    "Duplicate canonical skill: {}",
                    entry.canonical
                )));
            }
        }

        Ok(())
    }

    pub fn tracks(&self) -> &[CareerTrack] {
        &self.tracks
    }

    pub fn synonyms(&self) -> &SynonymDictionary {
        &self.synonyms
    }

    pub fn resources(&self) -> &ResourceCatalog {
        &self.resources
    }

    pub fn track(&self, name: &str) -> Option<&CareerTrack> {
        self.tracks.iter().find(|t| t.name == name)
    }

    /// Look up a track by exact name, failing with a closest-name suggestion.
    pub fn require_track(&self, name: &str) -> Result<&CareerTrack> {
        self.track(name).ok_or_else(|| CareerGuideError::UnknownTrack {
            name: name.to_string(),
            suggestion: self.suggest_track(name).map(|s| s.to_string()),
        })
    }

    /// Closest track name by Jaro-Winkler similarity, if any is close enough.
    pub fn suggest_track(&self, name: &str) -> Option<&str> {
        let needle = name.to_lowercase();
        self.tracks
            .iter()
            .map(|t| (t.name.as_str(), jaro_winkler(&needle, &t.name.to_lowercase())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .fold(None, |best: Option<(&str, f64)>, candidate| match best {
                Some(b) if b.1 >= candidate.1 => Some(b),
                _ => Some(candidate),
            })
            .map(|(track_name, _)| track_name)
    }

    /// Sorted, deduplicated list of every skill surface form the dictionary knows.
    pub fn known_skill_variants(&self) -> Vec<String> {
        self.synonyms
            .surface_forms()
            .map(|s| s.to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let kb = KnowledgeBase::builtin();
        let track = kb.track("Cloud Architect").unwrap();
        assert_eq!(track.market_demand_score, 90);
        assert_eq!(track.core_skills[0], "cloud platforms");
        assert!(kb.track("cloud architect").is_none());
    }

    #[test]
    fn test_require_track_suggests_close_name() {
        let kb = KnowledgeBase::builtin();
        match kb.require_track("Data Scientst") {
            Err(CareerGuideError::UnknownTrack { suggestion, .. }) => {
                assert_eq!(suggestion.as_deref(), Some("Data Scientist"));
            }
            other => panic!("expected UnknownTrack, got {:?}", other.map(|t| &t.name)),
        }

        match kb.require_track("Underwater Basket Weaver") {
            Err(CareerGuideError::UnknownTrack { suggestion, .. }) => assert!(suggestion.is_none()),
            other => panic!("expected UnknownTrack, got {:?}", other.map(|t| &t.name)),
        }
    }

    #[test]
    fn test_duplicate_track_rejected() {
        let track = CareerTrack::new("Twin", &["a"], &[], 1, 1, 1.0);
        let result = KnowledgeBase::new(
            vec![track.clone(), track],
            SynonymDictionary::default(),
            ResourceCatalog::default(),
        );
        assert!(matches!(result, Err(CareerGuideError::KnowledgeBase(_))));
    }

    #[test]
    fn test_toml_round_trip_preserves_order() {
        let kb = KnowledgeBase::builtin();
        let text = kb.to_toml_string().unwrap();
        let loaded = KnowledgeBase::from_toml_str(&text).unwrap();
        assert_eq!(loaded, kb);
    }

    #[test]
    fn test_minimal_toml_knowledge_base() {
        let text = r#"
            [[tracks]]
            name = "Empty Track"
            core_skills = []
            emerging_skills = ["quantum"]
            market_demand_score = 10
            future_demand_score = 20
            growth_rate_percent = 5.0
        "#;
        let kb = KnowledgeBase::from_toml_str(text).unwrap();
        assert_eq!(kb.tracks().len(), 1);
        assert!(kb.synonyms().is_empty());
        assert!(kb.resources().courses.is_empty());
        assert!(kb.track("Empty Track").unwrap().roadmap.foundation.projects.is_empty());
    }

    #[test]
    fn test_known_skill_variants_sorted_and_unique() {
        let kb = KnowledgeBase::builtin();
        let variants = kb.known_skill_variants();
        assert!(variants.contains(&"node.js".to_string()));
        assert!(variants.windows(2).all(|w| w[0] < w[1]));
    }
}
