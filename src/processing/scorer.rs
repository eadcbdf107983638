//! Career track match scoring and ranking

use crate::knowledge::{CareerTrack, KnowledgeBase};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringSettings {
    /// Upper bound for the breadth bonus added to the match percentage
    pub max_bonus: i64,
    pub max_recommendations: usize,
    /// How many core skills a recommendation lists
    pub top_skills: usize,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            max_bonus: 10,
            max_recommendations: 5,
            top_skills: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub track: String,
    /// 0-100
    pub match_score: u8,
    pub market_demand_score: u8,
    pub future_demand_score: u8,
    pub rationale: String,
    pub top_skills: Vec<String>,
    pub emerging_skills: Vec<String>,
}

/// Intermediate values of one match computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchBreakdown {
    pub matched: usize,
    pub match_percentage: f64,
    pub bonus: i64,
    pub score: u8,
}

/// Score a normalized skill set against one track.
///
/// `bonus = min(max_bonus, |skills| - |core|)` can be negative, which pulls
/// sparse profiles below their raw match percentage.
pub fn match_breakdown(skills: &BTreeSet<String>, track: &CareerTrack, max_bonus: i64) -> MatchBreakdown {
    let core: HashSet<&str> = track.core_skills.iter().map(|s| s.as_str()).collect();
    if core.is_empty() {
        return MatchBreakdown {
            matched: 0,
            match_percentage: 0.0,
            bonus: 0,
            score: 0,
        };
    }

    let matched = skills.iter().filter(|s| core.contains(s.as_str())).count();
    let match_percentage = matched as f64 / core.len() as f64 * 100.0;
    let bonus = max_bonus.min(skills.len() as i64 - core.len() as i64);
    let score = (match_percentage + bonus as f64).round().clamp(0.0, 100.0) as u8;

    MatchBreakdown {
        matched,
        match_percentage,
        bonus,
        score,
    }
}

/// A recommendation paired with the track it was computed from.
#[derive(Debug, Clone)]
pub struct RankedTrack<'a> {
    pub track: &'a CareerTrack,
    pub recommendation: Recommendation,
}

pub struct RecommendationScorer<'a> {
    kb: &'a KnowledgeBase,
    settings: ScoringSettings,
}

impl<'a> RecommendationScorer<'a> {
    pub fn new(kb: &'a KnowledgeBase, settings: ScoringSettings) -> Self {
        Self { kb, settings }
    }

    pub fn recommend_for(&self, skills: &BTreeSet<String>, track: &CareerTrack) -> Recommendation {
        let breakdown = match_breakdown(skills, track, self.settings.max_bonus);
        debug!(
            "Track '{}': {} matched, {:.1}% + bonus {} => {}",
            track.name, breakdown.matched, breakdown.match_percentage, breakdown.bonus, breakdown.score
        );

        let rationale = format!(
            "Strong match with {} core skills. High {} with {}% growth rate.",
            breakdown.matched,
            track.demand_label(),
            track.growth_rate_percent
        );

        Recommendation {
            track: track.name.clone(),
            match_score: breakdown.score,
            market_demand_score: track.market_demand_score,
            future_demand_score: track.future_demand_score,
            rationale,
            top_skills: track.core_skills.iter().take(self.settings.top_skills).cloned().collect(),
            emerging_skills: track.emerging_skills.clone(),
        }
    }

    /// Rank every track by match score, best first, truncated to the configured count.
    ///
    /// The sort is stable, so equal scores keep knowledge-base order.
    pub fn rank(&self, skills: &BTreeSet<String>) -> Vec<RankedTrack<'a>> {
        let mut ranked: Vec<RankedTrack<'a>> = self
            .kb
            .tracks()
            .iter()
            .map(|track| {
                if track.core_skills.is_empty() {
                    warn!("Track '{}' has no core skills; scoring it 0", track.name);
                }
                RankedTrack {
                    track,
                    recommendation: self.recommend_for(skills, track),
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.recommendation.match_score.cmp(&a.recommendation.match_score));
        ranked.truncate(self.settings.max_recommendations);
        ranked
    }
}
