//! Resume-enhancement suggestions for a career track

use crate::knowledge::CareerTrack;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeBooster {
    pub track: String,
    pub project_ideas: Vec<String>,
    pub resume_bullets: Vec<String>,
}

impl ResumeBooster {
    pub fn for_track(track: &CareerTrack) -> Self {
        let field = track.name.to_lowercase();
        let top_core = track.core_skills.iter().take(3).cloned().collect::<Vec<_>>().join(", ");
        let top_emerging = track.emerging_skills.iter().take(2).cloned().collect::<Vec<_>>().join(", ");

        let project_ideas = vec![
            format!("Developed a {} solution using modern technologies", field),
            format!("Built an automated system for {} tasks", field),
            format!("Created a data-driven {} application", field),
            format!("Implemented best practices in {} development", field),
        ];

        let resume_bullets = vec![
            format!("Led {} initiatives resulting in 25% efficiency improvement", field),
            format!("Developed scalable solutions using {}", top_core),
            "Collaborated with cross-functional teams to deliver high-impact projects".to_string(),
            format!("Stayed current with emerging technologies including {}", top_emerging),
        ];

        Self {
            track: track.name.clone(),
            project_ideas,
            resume_bullets,
        }
    }
}
