//! Roadmap checklist and title derived from a guidance result

use crate::output::report::GuidanceResult;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistCategory {
    SkillGap,
    Learning,
    Project,
    Certification,
    Resume,
}

impl fmt::Display for ChecklistCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChecklistCategory::SkillGap => "skill_gap",
            ChecklistCategory::Learning => "learning",
            ChecklistCategory::Project => "project",
            ChecklistCategory::Certification => "certification",
            ChecklistCategory::Resume => "resume",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub title: String,
    pub category: ChecklistCategory,
    pub phase: Option<String>,
    pub sort_order: usize,
}

#[derive(Default)]
struct ChecklistBuilder {
    items: Vec<ChecklistItem>,
}

impl ChecklistBuilder {
    fn push(&mut self, title: String, category: ChecklistCategory, phase: Option<&str>) {
        let sort_order = self.items.len();
        self.items.push(ChecklistItem {
            title,
            category,
            phase: phase.map(str::to_string),
            sort_order,
        });
    }
}

/// Flatten the gap, plan and resume suggestions into an ordered to-do list.
pub fn build_checklist(result: &GuidanceResult) -> Vec<ChecklistItem> {
    let mut builder = ChecklistBuilder::default();

    if let Some(gap) = &result.skill_gap {
        for skill in &gap.need_skills {
            builder.push(format!("Learn skill: {}", skill), ChecklistCategory::SkillGap, None);
        }
    }

    if let Some(plan) = &result.learning_plan {
        for phase in &plan.phases {
            let name = phase.phase.name();
            for skill in &phase.focus_skills {
                builder.push(
                    format!("[{}] Focus skill: {}", name, skill),
                    ChecklistCategory::Learning,
                    Some(name),
                );
            }
            for project in &phase.projects {
                builder.push(
                    format!("[{}] Build project: {}", name, project),
                    ChecklistCategory::Project,
                    Some(name),
                );
            }
            for cert in &phase.certifications {
                builder.push(
                    format!("[{}] Earn certification: {}", name, cert),
                    ChecklistCategory::Certification,
                    Some(name),
                );
            }
        }
    }

    if let Some(booster) = &result.resume_booster {
        for idea in &booster.project_ideas {
            builder.push(format!("Resume project: {}", idea), ChecklistCategory::Resume, None);
        }
    }

    builder.items
}

pub fn roadmap_title(result: &GuidanceResult) -> String {
    match result.top_recommendation() {
        Some(rec) => format!("{} Roadmap", rec.track),
        None => "Career Roadmap".to_string(),
    }
}
