//! Skill-gap analysis and phased learning roadmap synthesis

use crate::knowledge::{CareerTrack, KnowledgeBase, LearningResource, Phase};
use crate::profile::{EducationLevel, ExperienceLevel, Profile};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanningSettings {
    pub base_timeline_months: f64,
    pub priority_gap_count: usize,
    pub max_projects: usize,
    pub max_certifications: usize,
}

impl Default for PlanningSettings {
    fn default() -> Self {
        Self {
            base_timeline_months: 12.0,
            priority_gap_count: 3,
            max_projects: 4,
            max_certifications: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub track: String,
    /// Core skills the profile already covers, in track order
    pub have_skills: Vec<String>,
    /// Core skills still missing, in track order
    pub need_skills: Vec<String>,
    pub priority_gaps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPhase {
    pub phase: Phase,
    pub duration_weeks: u32,
    pub focus_skills: Vec<String>,
    pub projects: Vec<String>,
    pub certifications: Vec<String>,
    pub resources: Vec<LearningResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPlan {
    pub track: String,
    pub timeline_months: u32,
    /// Always Foundation, Advanced, Specialization in that order
    pub phases: Vec<LearningPhase>,
}

pub fn experience_multiplier(level: Option<ExperienceLevel>) -> f64 {
    match level {
        Some(ExperienceLevel::Student) => 1.5,
        Some(ExperienceLevel::Fresher) => 1.2,
        Some(ExperienceLevel::Junior) => 1.0,
        Some(ExperienceLevel::Mid) => 0.8,
        Some(ExperienceLevel::Senior) => 0.6,
        None => 1.0,
    }
}

pub fn education_multiplier(level: Option<EducationLevel>) -> f64 {
    match level {
        Some(EducationLevel::HighSchool) => 1.3,
        Some(EducationLevel::Bachelors) => 1.0,
        Some(EducationLevel::Masters) => 0.8,
        Some(EducationLevel::Phd) => 0.7,
        None => 1.0,
    }
}

fn scaled_weeks(count: usize, weeks_per_skill: f64, min: u32, max: u32) -> u32 {
    ((count as f64 * weeks_per_skill).round() as u32).clamp(min, max)
}

pub struct RoadmapPlanner<'a> {
    kb: &'a KnowledgeBase,
    settings: PlanningSettings,
}

impl<'a> RoadmapPlanner<'a> {
    pub fn new(kb: &'a KnowledgeBase, settings: PlanningSettings) -> Self {
        Self { kb, settings }
    }

    pub fn analyze_gap(&self, skills: &BTreeSet<String>, track: &CareerTrack) -> SkillGap {
        let (have_skills, need_skills): (Vec<String>, Vec<String>) = track
            .core_skills
            .iter()
            .cloned()
            .partition(|skill| skills.contains(skill));

        let priority_gaps = need_skills.iter().take(self.settings.priority_gap_count).cloned().collect();

        SkillGap {
            track: track.name.clone(),
            have_skills,
            need_skills,
            priority_gaps,
        }
    }

    /// `round(base * experience_multiplier * education_multiplier)`, at least one month.
    pub fn timeline_months(&self, profile: &Profile) -> u32 {
        let months = self.settings.base_timeline_months
            * experience_multiplier(profile.experience_level)
            * education_multiplier(profile.education_level);
        (months.round() as u32).max(1)
    }

    pub fn plan(&self, profile: &Profile, skills: &BTreeSet<String>, track: &CareerTrack) -> LearningPlan {
        let foundation_skills: Vec<String> = track
            .core_skills
            .iter()
            .take(3)
            .filter(|skill| !skills.contains(*skill))
            .cloned()
            .collect();

        let advanced_skills: Vec<String> = track
            .core_skills
            .iter()
            .skip(3)
            .chain(track.emerging_skills.iter().take(2))
            .cloned()
            .collect();

        let specialization_skills = track.emerging_skills.clone();

        let phases = vec![
            self.build_phase(
                Phase::Foundation,
                scaled_weeks(foundation_skills.len(), 2.0, 4, 8),
                foundation_skills,
                profile,
                track,
            ),
            self.build_phase(
                Phase::Advanced,
                scaled_weeks(advanced_skills.len(), 1.5, 6, 12),
                advanced_skills,
                profile,
                track,
            ),
            self.build_phase(
                Phase::Specialization,
                scaled_weeks(specialization_skills.len(), 1.2, 4, 10),
                specialization_skills,
                profile,
                track,
            ),
        ];

        let timeline_months = self.timeline_months(profile);
        debug!("Planned {} months for '{}'", timeline_months, track.name);

        LearningPlan {
            track: track.name.clone(),
            timeline_months,
            phases,
        }
    }

    fn build_phase(
        &self,
        phase: Phase,
        duration_weeks: u32,
        focus_skills: Vec<String>,
        profile: &Profile,
        track: &CareerTrack,
    ) -> LearningPhase {
        LearningPhase {
            phase,
            duration_weeks,
            focus_skills,
            projects: self.projects(phase, profile, track),
            certifications: self.certifications(phase, profile, track),
            resources: self.resources(phase, profile),
        }
    }

    fn projects(&self, phase: Phase, profile: &Profile, track: &CareerTrack) -> Vec<String> {
        let mut projects = track.roadmap.for_phase(phase).projects.clone();

        let by_experience: &[&str] = match profile.experience_level {
            Some(ExperienceLevel::Student) => &[
                "Create a portfolio website showcasing your projects",
                "Participate in hackathons and coding competitions",
            ],
            Some(ExperienceLevel::Fresher) => &[
                "Build projects that demonstrate your technical skills",
                "Contribute to open-source projects in your field",
            ],
            Some(ExperienceLevel::Junior) | Some(ExperienceLevel::Mid) => &[
                "Build production-ready applications with best practices",
                "Create tools that improve team productivity",
            ],
            Some(ExperienceLevel::Senior) => &[
                "Architect and lead development of complex systems",
                "Mentor junior developers and create learning resources",
            ],
            None => &[],
        };
        projects.extend(by_experience.iter().map(|s| s.to_string()));

        match profile.education_level {
            Some(EducationLevel::Phd) => {
                projects.push("Publish research papers or technical blog posts".to_string())
            }
            Some(EducationLevel::Masters) => {
                projects.push("Work on advanced research or thesis projects".to_string())
            }
            _ => {}
        }

        projects.truncate(self.settings.max_projects);
        projects
    }

    fn certifications(&self, phase: Phase, profile: &Profile, track: &CareerTrack) -> Vec<String> {
        let mut certifications = track.roadmap.for_phase(phase).certifications.clone();

        let by_experience = match profile.experience_level {
            Some(ExperienceLevel::Student) => Some("Student-focused certifications and courses"),
            Some(ExperienceLevel::Junior) | Some(ExperienceLevel::Mid) => {
                Some("Industry-recognized professional certifications")
            }
            Some(ExperienceLevel::Senior) => Some("Advanced and leadership certifications"),
            Some(ExperienceLevel::Fresher) | None => None,
        };
        certifications.extend(by_experience.map(|s| s.to_string()));

        certifications.truncate(self.settings.max_certifications);
        certifications
    }

    fn resources(&self, phase: Phase, profile: &Profile) -> Vec<LearningResource> {
        let catalog = self.kb.resources();
        let mut resources: Vec<LearningResource> = match phase {
            Phase::Foundation => catalog
                .courses
                .iter()
                .take(2)
                .chain(catalog.practice.iter().take(1))
                .cloned()
                .collect(),
            Phase::Advanced => catalog
                .courses
                .iter()
                .skip(2)
                .chain(catalog.books.iter())
                .cloned()
                .collect(),
            Phase::Specialization => catalog
                .practice
                .iter()
                .skip(2)
                .chain(catalog.courses.iter().take(1))
                .cloned()
                .collect(),
        };

        match profile.experience_level {
            Some(ExperienceLevel::Student) => resources.push(LearningResource::new(
                "Free Student Resources",
                "Various",
                "github.com/student-resources",
            )),
            Some(ExperienceLevel::Senior) => resources.push(LearningResource::new(
                "Advanced Technical Papers",
                "arXiv",
                "arxiv.org",
            )),
            _ => {}
        }

        resources
    }
}
