//! The guidance result: the single structured artifact every renderer reads from

use crate::error::Result;
use crate::processing::booster::ResumeBooster;
use crate::processing::planner::{LearningPlan, SkillGap};
use crate::processing::scorer::Recommendation;
use crate::profile::Profile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Version of the structured record shape.
pub const SCHEMA_VERSION: &str = "1.0";

/// Complete guidance for one profile.
///
/// Gap analysis, learning plan and resume booster are computed for the
/// top-ranked track only; they are `None` when the knowledge base has no
/// tracks at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidanceResult {
    pub profile: Profile,
    pub normalized_skills: BTreeSet<String>,
    pub recommendations: Vec<Recommendation>,
    pub skill_gap: Option<SkillGap>,
    pub learning_plan: Option<LearningPlan>,
    pub resume_booster: Option<ResumeBooster>,
    pub clarifications_needed: Vec<String>,
    pub meta: GuidanceMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidanceMeta {
    pub version: String,
    pub model_notes: String,
    pub confidence_notes: String,
}

impl Default for GuidanceMeta {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            model_notes: "Rule-based career matching against a static knowledge base of career tracks"
                .to_string(),
            confidence_notes: "Recommendations based on current market trends and projected growth rates"
                .to_string(),
        }
    }
}

/// Gap analysis, plan and resume suggestions for a single track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackGuidance {
    pub skill_gap: SkillGap,
    pub learning_plan: LearningPlan,
    pub resume_booster: ResumeBooster,
}

impl GuidanceResult {
    pub fn assemble(
        profile: Profile,
        normalized_skills: BTreeSet<String>,
        recommendations: Vec<Recommendation>,
        top_track: Option<TrackGuidance>,
    ) -> Self {
        let clarifications_needed = clarifications_for(&profile);
        let (skill_gap, learning_plan, resume_booster) = match top_track {
            Some(t) => (Some(t.skill_gap), Some(t.learning_plan), Some(t.resume_booster)),
            None => (None, None, None),
        };

        Self {
            profile,
            normalized_skills,
            recommendations,
            skill_gap,
            learning_plan,
            resume_booster,
            clarifications_needed,
            meta: GuidanceMeta::default(),
        }
    }

    pub fn top_recommendation(&self) -> Option<&Recommendation> {
        self.recommendations.first()
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        if pretty {
            Ok(serde_json::to_string_pretty(self)?)
        } else {
            Ok(serde_json::to_string(self)?)
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Hints about missing profile details that would sharpen the guidance.
fn clarifications_for(profile: &Profile) -> Vec<String> {
    let mut notes = Vec::new();
    if profile.name.is_none() {
        notes.push("Name not provided".to_string());
    }
    if profile.education_level.is_none() {
        notes.push("Education level not recognized; timeline assumes a bachelor's degree".to_string());
    }
    if profile.experience_level.is_none() {
        notes.push("Experience level not recognized; timeline assumes junior level".to_string());
    }
    if profile.skills.is_empty() {
        notes.push("No skills identified; match scores will be low".to_string());
    }
    if profile.interests.is_empty() {
        notes.push("No interests provided".to_string());
    }
    notes
}
