//! Guidance pipeline: normalize, score, plan and assemble

use crate::error::Result;
use crate::knowledge::{CareerTrack, KnowledgeBase};
use crate::output::report::{GuidanceResult, TrackGuidance};
use crate::processing::booster::ResumeBooster;
use crate::processing::normalizer::SkillNormalizer;
use crate::processing::planner::{PlanningSettings, RoadmapPlanner};
use crate::processing::scorer::{Recommendation, RecommendationScorer, ScoringSettings};
use crate::profile::{Profile, ProfileExtractor, TierMatching};
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Tunable parameters of the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EngineSettings {
    pub scoring: ScoringSettings,
    pub planning: PlanningSettings,
    pub tier_matching: TierMatching,
}

/// Turns profiles into guidance against a shared, read-only knowledge base.
///
/// The engine holds no mutable state: identical input always yields an
/// identical result, and one engine can serve any number of callers.
pub struct GuidanceEngine {
    kb: Arc<KnowledgeBase>,
    settings: EngineSettings,
    extractor: ProfileExtractor,
}

impl GuidanceEngine {
    pub fn new(kb: KnowledgeBase) -> Result<Self> {
        Self::from_shared(Arc::new(kb))
    }

    pub fn from_shared(kb: Arc<KnowledgeBase>) -> Result<Self> {
        let extractor = ProfileExtractor::new(&kb)?;
        Ok(Self {
            kb,
            settings: EngineSettings::default(),
            extractor,
        })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(KnowledgeBase::builtin())
    }

    pub fn with_settings(mut self, settings: EngineSettings) -> Self {
        self.extractor = self.extractor.with_tier_matching(settings.tier_matching);
        self.settings = settings;
        self
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Best-effort extraction from free text.
    pub fn extract_profile(&self, text: &str) -> Profile {
        self.extractor.extract(text)
    }

    pub fn normalize<I, S>(&self, skills: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        SkillNormalizer::new(self.kb.synonyms()).normalize(skills)
    }

    /// Ranked recommendations for a profile, best first.
    pub fn recommend(&self, profile: &Profile) -> Vec<Recommendation> {
        let skills = self.normalize(&profile.skills);
        self.scorer()
            .rank(&skills)
            .into_iter()
            .map(|ranked| ranked.recommendation)
            .collect()
    }

    pub fn guide(&self, profile: &Profile) -> GuidanceResult {
        info!("Generating guidance for {}", profile.name.as_deref().unwrap_or("anonymous profile"));
        if profile.is_empty() {
            warn!("Profile is empty; guidance will be generic");
        }

        let skills = self.normalize(&profile.skills);
        debug!("Normalized skills: {:?}", skills);

        let ranked = self.scorer().rank(&skills);
        let top_track = ranked
            .first()
            .map(|top| self.track_guidance(profile, &skills, top.track));

        match ranked.first() {
            Some(top) => info!(
                "Top match: {} ({}%)",
                top.recommendation.track, top.recommendation.match_score
            ),
            None => warn!("Knowledge base has no tracks; no recommendations produced"),
        }

        let recommendations = ranked.into_iter().map(|r| r.recommendation).collect();
        GuidanceResult::assemble(profile.clone(), skills, recommendations, top_track)
    }

    /// Run the full pipeline on free text.
    pub fn guide_text(&self, text: &str) -> GuidanceResult {
        let profile = self.extract_profile(text);
        self.guide(&profile)
    }

    /// Gap, plan and resume suggestions for a track chosen by name.
    pub fn plan_for_track(&self, profile: &Profile, track_name: &str) -> Result<TrackGuidance> {
        let track = self.kb.require_track(track_name)?;
        let skills = self.normalize(&profile.skills);
        Ok(self.track_guidance(profile, &skills, track))
    }

    fn track_guidance(&self, profile: &Profile, skills: &BTreeSet<String>, track: &CareerTrack) -> TrackGuidance {
        let planner = RoadmapPlanner::new(&self.kb, self.settings.planning);
        TrackGuidance {
            skill_gap: planner.analyze_gap(skills, track),
            learning_plan: planner.plan(profile, skills, track),
            resume_booster: ResumeBooster::for_track(track),
        }
    }

    fn scorer(&self) -> RecommendationScorer<'_> {
        RecommendationScorer::new(&self.kb, self.settings.scoring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CareerGuideError;
    use crate::knowledge::{ResourceCatalog, SynonymDictionary};
    use crate::profile::{EducationLevel, ExperienceLevel};

    fn sarah() -> Profile {
        Profile::builder()
            .name("Sarah")
            .skills(["python", "sql", "machine learning", "statistics", "data analysis"])
            .build()
    }

    #[test]
    fn test_sarah_matches_data_scientist() {
        let engine = GuidanceEngine::builtin().unwrap();
        let result = engine.guide(&sarah());

        let top = result.top_recommendation().unwrap();
        assert_eq!(top.track, "Data Scientist");
        assert_eq!(top.match_score, 100);
        assert!(result.recommendations.len() <= 5);

        let gap = result.skill_gap.as_ref().unwrap();
        assert!(gap.need_skills.is_empty());
        assert_eq!(gap.have_skills.len(), 5);
        assert_eq!(result.learning_plan.as_ref().unwrap().phases.len(), 3);
        assert_eq!(result.resume_booster.as_ref().unwrap().track, "Data Scientist");
    }

    #[test]
    fn test_empty_profile_is_well_formed() {
        let engine = GuidanceEngine::builtin().unwrap();
        let result = engine.guide(&Profile::default());

        assert!(result.recommendations.iter().all(|r| r.match_score == 0));
        assert!(result.skill_gap.as_ref().unwrap().have_skills.is_empty());
        assert_eq!(result.learning_plan.as_ref().unwrap().timeline_months, 12);

        for track in engine.knowledge_base().tracks() {
            let guidance = engine.plan_for_track(&Profile::default(), &track.name).unwrap();
            assert!(guidance.skill_gap.have_skills.is_empty());
        }
    }

    #[test]
    fn test_guidance_is_deterministic() {
        let engine = GuidanceEngine::builtin().unwrap();
        let profile = Profile::builder()
            .name("Lee")
            .education(EducationLevel::Masters)
            .experience(ExperienceLevel::Junior)
            .skills(["Py", "docker", "K8s", "AWS", "figma"])
            .interests(["automation"])
            .build();

        let first = engine.guide(&profile).to_json(false).unwrap();
        let second = engine.guide(&profile).to_json(false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_synonyms_resolved_before_scoring() {
        let engine = GuidanceEngine::builtin().unwrap();
        let profile = Profile::builder().skills(["Py", "MySQL", "ML"]).build();
        let result = engine.guide(&profile);

        assert!(result.normalized_skills.contains("python"));
        assert!(result.normalized_skills.contains("sql"));
        assert!(result.normalized_skills.contains("machine learning"));
        // raw spelling survives on the profile
        assert!(result.profile.skills.contains("Py"));
    }

    #[test]
    fn test_phd_senior_timeline() {
        let engine = GuidanceEngine::builtin().unwrap();
        let profile = Profile::builder()
            .education(EducationLevel::Phd)
            .experience(ExperienceLevel::Senior)
            .skills(["python"])
            .build();
        assert_eq!(engine.guide(&profile).learning_plan.unwrap().timeline_months, 5);
    }

    #[test]
    fn test_plan_for_unknown_track_suggests_name() {
        let engine = GuidanceEngine::builtin().unwrap();
        let err = engine.plan_for_track(&sarah(), "Data Scientst").unwrap_err();
        match err {
            CareerGuideError::UnknownTrack { name, suggestion } => {
                assert_eq!(name, "Data Scientst");
                assert_eq!(suggestion.as_deref(), Some("Data Scientist"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_custom_settings_limit_recommendations() {
        let settings = EngineSettings {
            scoring: ScoringSettings { max_recommendations: 2, ..ScoringSettings::default() },
            ..EngineSettings::default()
        };
        let engine = GuidanceEngine::builtin().unwrap().with_settings(settings);
        assert_eq!(engine.recommend(&sarah()).len(), 2);
    }

    #[test]
    fn test_substituted_knowledge_base() {
        let hollow = CareerTrack::new("Hollow", &[], &["x"], 10, 10, 1.0);
        let kb = KnowledgeBase::new(vec![hollow], SynonymDictionary::default(), ResourceCatalog::default()).unwrap();
        let engine = GuidanceEngine::new(kb).unwrap();

        let result = engine.guide(&sarah());
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].match_score, 0);
        let plan = result.learning_plan.unwrap();
        assert!(plan.phases[0].focus_skills.is_empty());
        assert_eq!(plan.phases[0].duration_weeks, 4);
    }

    #[test]
    fn test_guide_text_legacy_path() {
        let engine = GuidanceEngine::builtin().unwrap();
        let result = engine.guide_text("Name: Priya\nI am a senior engineer.\nSkills: Docker, Kubernetes, Linux");

        assert_eq!(result.profile.name.as_deref(), Some("Priya"));
        assert_eq!(result.profile.experience_level, Some(ExperienceLevel::Senior));
        assert_eq!(result.top_recommendation().unwrap().track, "DevOps Engineer");
    }
}
