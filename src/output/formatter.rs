//! Output formatters: JSON record, Markdown narrative, colored console and HTML

use crate::config::OutputFormat;
use crate::error::{CareerGuideError, Result};
use crate::output::report::GuidanceResult;
use crate::processing::planner::LearningPhase;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering a guidance result
pub trait OutputFormatter {
    fn format_report(&self, result: &GuidanceResult) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

const EMERGING_TRENDS: &[(&str, &str)] = &[
    ("GenAI & LLMs", "Transformative impact across all tech roles"),
    ("MLOps & AI Engineering", "Growing demand for AI infrastructure"),
    ("Cloud Native & Kubernetes", "Standard for modern applications"),
    ("Cybersecurity", "Increasing importance with digital transformation"),
    ("DevOps & Platform Engineering", "Streamlining development workflows"),
];

const NEXT_STEPS: &[(&str, &str)] = &[
    ("Start with the Foundation Phase", "of your chosen career path"),
    ("Build a portfolio", "with the recommended projects"),
    ("Earn relevant certifications", "to validate your skills"),
    ("Network with professionals", "in your target field"),
    ("Stay updated", "with emerging technologies and trends"),
];

const MARKET_INSIGHTS: &[&str] = &[
    "Tech roles are experiencing 20-50% growth rates",
    "Remote work is expanding opportunities globally",
    "Continuous learning is essential for career advancement",
    "Specialized skills command premium salaries",
];

const NOT_SPECIFIED: &str = "Not specified";
const NONE_SPECIFIED: &str = "None specified";
const NONE_IDENTIFIED: &str = "None identified";
const ALL_COVERED: &str = "All core skills covered";
const NO_GAPS: &str = "No immediate gaps identified";

fn join_or<I, S>(items: I, default: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        default.to_string()
    } else {
        joined
    }
}

/// Profile summary values shared by every renderer.
struct ProfileSummary {
    name: String,
    education: String,
    experience: String,
    skills: String,
    interests: String,
}

impl ProfileSummary {
    fn from_result(result: &GuidanceResult) -> Self {
        let profile = &result.profile;
        Self {
            name: profile.name.clone().unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            education: profile
                .education_level
                .map(|e| e.to_string())
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            experience: profile
                .experience_level
                .map(|e| e.to_string())
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            skills: join_or(&profile.skills, NONE_SPECIFIED),
            interests: join_or(&profile.interests, NONE_SPECIFIED),
        }
    }
}

/// Console formatter with colors and score badges
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
    generated_at: Option<String>,
}

/// JSON formatter for the structured record
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown narrative built from fixed section templates
pub struct MarkdownFormatter {
    generated_at: Option<String>,
}

/// HTML formatter backed by an askama template
pub struct HtmlFormatter {
    include_styles: bool,
    generated_at: Option<String>,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    {% if include_styles %}
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #333; max-width: 900px; margin: 0 auto; padding: 20px; background: #f8f9fa; }
        .container { background: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; border-bottom: 3px solid #007bff; padding-bottom: 20px; margin-bottom: 30px; }
        .section { margin-bottom: 30px; }
        .card { background: #f8f9fa; padding: 15px; border-radius: 8px; border-left: 4px solid #007bff; margin-bottom: 15px; }
        .score-badge { display: inline-block; padding: 4px 12px; border-radius: 20px; font-weight: bold; font-size: 0.9em; }
        .score-high { background: #d4edda; color: #155724; }
        .score-medium { background: #fff3cd; color: #856404; }
        .score-low { background: #f8d7da; color: #721c24; }
        .metadata { background: #e9ecef; padding: 15px; border-radius: 8px; font-size: 0.9em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{{ title }}</h1>
            {% if has_generated_at %}<p>Generated: {{ generated_at }}</p>{% endif %}
        </div>

        <div class="section">
            <h2>Your Profile Summary</h2>
            <ul>
                <li><strong>Name:</strong> {{ summary_name }}</li>
                <li><strong>Education Level:</strong> {{ summary_education }}</li>
                <li><strong>Experience Level:</strong> {{ summary_experience }}</li>
                <li><strong>Skills Identified:</strong> {{ summary_skills }}</li>
                <li><strong>Interests:</strong> {{ summary_interests }}</li>
            </ul>
        </div>

        <div class="section">
            <h2>Best Career Matches</h2>
            {% for rec in recommendations %}
            <div class="card">
                <h3>{{ rec.rank }}. {{ rec.track }} <span class="score-badge {{ rec.badge_class }}">{{ rec.match_score }}/100</span></h3>
                <p><strong>Current Market Demand:</strong> {{ rec.market_demand_score }}/100 | <strong>Future Demand Projection:</strong> {{ rec.future_demand_score }}/100</p>
                <p><strong>Why Recommended:</strong> {{ rec.rationale }}</p>
            </div>
            {% endfor %}
        </div>

        {% if has_gap %}
        <div class="section">
            <h2>Skills You Have</h2>
            <p>{{ have_skills }}</p>
            <h2>Skills to Learn</h2>
            <p>{{ need_skills }}</p>
            <h2>Priority Skills to Focus On</h2>
            <p>{{ priority_gaps }}</p>
        </div>
        {% endif %}

        {% if has_plan %}
        <div class="section">
            <h2>Learning Roadmap for {{ plan_track }}</h2>
            <p><strong>Timeline:</strong> {{ timeline_months }} months</p>
            {% for phase in phases %}
            <div class="card">
                <h3>{{ phase.name }} Phase ({{ phase.duration_weeks }} weeks)</h3>
                <p><strong>Focus Skills:</strong> {{ phase.focus_skills }}</p>
                <p><strong>Projects:</strong> {{ phase.projects }}</p>
                <p><strong>Certifications:</strong> {{ phase.certifications }}</p>
            </div>
            {% endfor %}
        </div>
        {% endif %}

        <div class="section">
            <h2>Emerging Trends to Watch</h2>
            <ul>
            {% for trend in trends %}
                <li><strong>{{ trend.name }}:</strong> {{ trend.description }}</li>
            {% endfor %}
            </ul>
        </div>

        <div class="section">
            <h2>Actionable Next Steps</h2>
            <ol>
            {% for step in next_steps %}
                <li><strong>{{ step.name }}</strong> {{ step.description }}</li>
            {% endfor %}
            </ol>
        </div>

        <div class="section">
            <h2>Market Insights</h2>
            <ul>
            {% for insight in insights %}
                <li>{{ insight }}</li>
            {% endfor %}
            </ul>
        </div>

        <div class="metadata">
            <p><strong>Generated by Career Guide</strong> (schema v{{ version }})</p>
            <p>{{ model_notes }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    title: String,
    generated_at: String,
    has_generated_at: bool,
    summary_name: String,
    summary_education: String,
    summary_experience: String,
    summary_skills: String,
    summary_interests: String,
    recommendations: Vec<HtmlRecommendation>,
    has_gap: bool,
    have_skills: String,
    need_skills: String,
    priority_gaps: String,
    has_plan: bool,
    plan_track: String,
    timeline_months: u32,
    phases: Vec<HtmlPhase>,
    trends: Vec<HtmlListEntry>,
    next_steps: Vec<HtmlListEntry>,
    insights: Vec<String>,
    version: String,
    model_notes: String,
}

struct HtmlRecommendation {
    rank: usize,
    track: String,
    match_score: u8,
    market_demand_score: u8,
    future_demand_score: u8,
    rationale: String,
    badge_class: &'static str,
}

struct HtmlPhase {
    name: String,
    duration_weeks: u32,
    focus_skills: String,
    projects: String,
    certifications: String,
}

struct HtmlListEntry {
    name: String,
    description: String,
}

impl HtmlListEntry {
    fn from_pairs(pairs: &[(&str, &str)]) -> Vec<Self> {
        pairs
            .iter()
            .map(|(name, description)| Self {
                name: name.to_string(),
                description: description.to_string(),
            })
            .collect()
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
            generated_at: None,
        }
    }

    pub fn with_generated_at(mut self, generated_at: Option<String>) -> Self {
        self.generated_at = generated_at;
        self
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            80..=100 => ("STRONG", Color::Green),
            60..=79 => ("GOOD", Color::Yellow),
            40..=59 => ("PARTIAL", Color::BrightYellow),
            _ => ("WEAK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_phase(&self, phase: &LearningPhase) -> String {
        let mut output = self.format_header(
            &format!("{} Phase ({} weeks)", phase.phase, phase.duration_weeks),
            3,
        );
        output.push_str(&format!("Focus Skills: {}\n", join_or(&phase.focus_skills, NONE_SPECIFIED)));
        output.push_str(&format!("Projects: {}\n", join_or(&phase.projects, NONE_SPECIFIED)));
        output.push_str(&format!(
            "Certifications: {}\n",
            join_or(&phase.certifications, NONE_SPECIFIED)
        ));

        if self.detailed && !phase.resources.is_empty() {
            output.push_str("Resources:\n");
            for resource in &phase.resources {
                output.push_str(&format!(
                    "  • {} ({}, {})\n",
                    resource.title, resource.provider, resource.reference
                ));
            }
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, result: &GuidanceResult) -> Result<String> {
        let mut output = String::new();
        let summary = ProfileSummary::from_result(result);

        output.push_str(&self.format_header("🚀 CAREER GUIDANCE", 1));
        if let Some(generated_at) = &self.generated_at {
            output.push_str(&format!("Generated: {}\n", generated_at));
        }

        output.push_str(&self.format_header("Your Profile Summary", 2));
        output.push_str(&format!("Name: {}\n", summary.name));
        output.push_str(&format!("Education Level: {}\n", summary.education));
        output.push_str(&format!("Experience Level: {}\n", summary.experience));
        output.push_str(&format!("Skills Identified: {}\n", summary.skills));
        output.push_str(&format!("Interests: {}\n", summary.interests));

        output.push_str(&self.format_header("Best Career Matches", 2));
        for (i, rec) in result.recommendations.iter().enumerate() {
            output.push_str(&format!(
                "{}. {} - {}/100 {}\n",
                i + 1,
                self.colorize(&rec.track, Color::Cyan),
                rec.match_score,
                self.format_score_badge(rec.match_score)
            ));
            output.push_str(&format!(
                "   Market demand: {}/100 | Future demand: {}/100\n",
                rec.market_demand_score, rec.future_demand_score
            ));
            output.push_str(&format!("   {}\n", rec.rationale));
            if self.detailed {
                output.push_str(&format!("   Top skills: {}\n", join_or(&rec.top_skills, NONE_SPECIFIED)));
            }
        }

        if let Some(gap) = &result.skill_gap {
            output.push_str(&self.format_header("Skill Gap", 2));
            output.push_str(&format!(
                "✅ Skills You Have: {}\n",
                self.colorize(&join_or(&gap.have_skills, NONE_IDENTIFIED), Color::Green)
            ));
            output.push_str(&format!(
                "📚 Skills to Learn: {}\n",
                self.colorize(&join_or(&gap.need_skills, ALL_COVERED), Color::Yellow)
            ));
            output.push_str(&format!(
                "🎯 Priority Skills: {}\n",
                self.colorize(&join_or(&gap.priority_gaps, NO_GAPS), Color::Red)
            ));
        }

        if let Some(plan) = &result.learning_plan {
            output.push_str(&self.format_header(&format!("Learning Roadmap for {}", plan.track), 2));
            output.push_str(&format!("Timeline: {} months\n", plan.timeline_months));
            for phase in &plan.phases {
                output.push_str(&self.format_phase(phase));
            }
        }

        if self.detailed {
            if let Some(booster) = &result.resume_booster {
                output.push_str(&self.format_header("Resume Boosters", 2));
                for idea in &booster.project_ideas {
                    output.push_str(&format!("💡 {}\n", idea));
                }
                for bullet in &booster.resume_bullets {
                    output.push_str(&format!("• {}\n", bullet));
                }
            }

            if !result.clarifications_needed.is_empty() {
                output.push_str(&self.format_header("Clarifications Needed", 3));
                for note in &result.clarifications_needed {
                    output.push_str(&format!("? {}\n", self.colorize(note, Color::BrightBlack)));
                }
            }
        }

        output.push_str(&self.format_header("Emerging Trends to Watch", 2));
        for (name, description) in EMERGING_TRENDS {
            output.push_str(&format!("🔮 {}: {}\n", self.colorize(name, Color::Magenta), description));
        }

        output.push_str(&self.format_header("Actionable Next Steps", 2));
        for (i, (step, detail)) in NEXT_STEPS.iter().enumerate() {
            output.push_str(&format!("{}. {} {}\n", i + 1, step, detail));
        }

        output.push_str(&self.format_header("Market Insights", 2));
        for insight in MARKET_INSIGHTS {
            output.push_str(&format!("📈 {}\n", insight));
        }

        output.push_str(&format!(
            "\n{}\n",
            self.colorize(
                &format!("ℹ️  {} (schema v{})", result.meta.model_notes, result.meta.version),
                Color::BrightBlack
            )
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, result: &GuidanceResult) -> Result<String> {
        result.to_json(self.pretty)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(generated_at: Option<String>) -> Self {
        Self { generated_at }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, result: &GuidanceResult) -> Result<String> {
        let mut output = String::new();
        let summary = ProfileSummary::from_result(result);

        output.push_str("# 🚀 Career Guide - Your Personalized Career Roadmap\n\n");
        if let Some(generated_at) = &self.generated_at {
            output.push_str(&format!("**Generated:** {}\n\n", generated_at));
        }

        output.push_str("## 👤 Your Profile Summary\n\n");
        output.push_str(&format!("- **Name:** {}\n", summary.name));
        output.push_str(&format!("- **Education Level:** {}\n", summary.education));
        output.push_str(&format!("- **Experience Level:** {}\n", summary.experience));
        output.push_str(&format!("- **Skills Identified:** {}\n", summary.skills));
        output.push_str(&format!("- **Interests:** {}\n\n", summary.interests));

        output.push_str("## 🎯 Best Career Matches\n\n");
        for (i, rec) in result.recommendations.iter().enumerate() {
            output.push_str(&format!("### {}. {}\n\n", i + 1, rec.track));
            output.push_str(&format!("- **Match Score:** {}/100\n", rec.match_score));
            output.push_str(&format!("- **Current Market Demand:** {}/100\n", rec.market_demand_score));
            output.push_str(&format!("- **Future Demand Projection:** {}/100\n", rec.future_demand_score));
            output.push_str(&format!("- **Why Recommended:** {}\n\n", rec.rationale));
        }

        if let Some(gap) = &result.skill_gap {
            output.push_str("## 💪 Skills You Have\n\n");
            output.push_str(&format!("{}\n\n", join_or(&gap.have_skills, NONE_IDENTIFIED)));
            output.push_str("## 📚 Skills to Learn\n\n");
            output.push_str(&format!("{}\n\n", join_or(&gap.need_skills, ALL_COVERED)));
            output.push_str("## 🎯 Priority Skills to Focus On\n\n");
            output.push_str(&format!("{}\n\n", join_or(&gap.priority_gaps, NO_GAPS)));
        }

        if let Some(plan) = &result.learning_plan {
            output.push_str(&format!("## 🛣️ Learning Roadmap for {}\n\n", plan.track));
            output.push_str(&format!("**Timeline:** {} months\n\n", plan.timeline_months));
            for phase in &plan.phases {
                output.push_str(&format!("### {} Phase ({} weeks)\n\n", phase.phase, phase.duration_weeks));
                output.push_str(&format!(
                    "- **Focus Skills:** {}\n",
                    join_or(&phase.focus_skills, NONE_SPECIFIED)
                ));
                output.push_str(&format!("- **Projects:** {}\n", join_or(&phase.projects, NONE_SPECIFIED)));
                output.push_str(&format!(
                    "- **Certifications:** {}\n\n",
                    join_or(&phase.certifications, NONE_SPECIFIED)
                ));
            }
        }

        output.push_str("## 🔮 Emerging Trends to Watch\n\n");
        for (name, description) in EMERGING_TRENDS {
            output.push_str(&format!("- **{}:** {}\n", name, description));
        }
        output.push('\n');

        output.push_str("## 💡 Actionable Next Steps\n\n");
        for (i, (step, detail)) in NEXT_STEPS.iter().enumerate() {
            output.push_str(&format!("{}. **{}** {}\n", i + 1, step, detail));
        }
        output.push('\n');

        output.push_str("## 📈 Market Insights\n\n");
        for insight in MARKET_INSIGHTS {
            output.push_str(&format!("- {}\n", insight));
        }

        output.push_str("\n---\n*Generated by Career Guide - your career roadmap assistant*\n");
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self {
            include_styles,
            generated_at: None,
        }
    }

    pub fn with_generated_at(mut self, generated_at: Option<String>) -> Self {
        self.generated_at = generated_at;
        self
    }

    fn create_template_data(&self, result: &GuidanceResult) -> HtmlTemplate {
        let summary = ProfileSummary::from_result(result);

        let recommendations = result
            .recommendations
            .iter()
            .enumerate()
            .map(|(i, rec)| HtmlRecommendation {
                rank: i + 1,
                track: rec.track.clone(),
                match_score: rec.match_score,
                market_demand_score: rec.market_demand_score,
                future_demand_score: rec.future_demand_score,
                rationale: rec.rationale.clone(),
                badge_class: match rec.match_score {
                    70..=100 => "score-high",
                    40..=69 => "score-medium",
                    _ => "score-low",
                },
            })
            .collect();

        let (has_gap, have_skills, need_skills, priority_gaps) = match &result.skill_gap {
            Some(gap) => (
                true,
                join_or(&gap.have_skills, NONE_IDENTIFIED),
                join_or(&gap.need_skills, ALL_COVERED),
                join_or(&gap.priority_gaps, NO_GAPS),
            ),
            None => (false, String::new(), String::new(), String::new()),
        };

        let (has_plan, plan_track, timeline_months, phases) = match &result.learning_plan {
            Some(plan) => (
                true,
                plan.track.clone(),
                plan.timeline_months,
                plan.phases
                    .iter()
                    .map(|phase| HtmlPhase {
                        name: phase.phase.to_string(),
                        duration_weeks: phase.duration_weeks,
                        focus_skills: join_or(&phase.focus_skills, NONE_SPECIFIED),
                        projects: join_or(&phase.projects, NONE_SPECIFIED),
                        certifications: join_or(&phase.certifications, NONE_SPECIFIED),
                    })
                    .collect(),
            ),
            None => (false, String::new(), 0, Vec::new()),
        };

        HtmlTemplate {
            include_styles: self.include_styles,
            title: "Your Personalized Career Roadmap".to_string(),
            generated_at: self.generated_at.clone().unwrap_or_default(),
            has_generated_at: self.generated_at.is_some(),
            summary_name: summary.name,
            summary_education: summary.education,
            summary_experience: summary.experience,
            summary_skills: summary.skills,
            summary_interests: summary.interests,
            recommendations,
            has_gap,
            have_skills,
            need_skills,
            priority_gaps,
            has_plan,
            plan_track,
            timeline_months,
            phases,
            trends: HtmlListEntry::from_pairs(EMERGING_TRENDS),
            next_steps: HtmlListEntry::from_pairs(NEXT_STEPS),
            insights: MARKET_INSIGHTS.iter().map(|s| s.to_string()).collect(),
            version: result.meta.version.clone(),
            model_notes: result.meta.model_notes.clone(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, result: &GuidanceResult) -> Result<String> {
        self.create_template_data(result)
            .render()
            .map_err(|e| CareerGuideError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true, None)
    }

    /// `generated_at` is supplied by the caller; renderers never read the clock.
    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_html_styles: bool,
        generated_at: Option<String>,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed).with_generated_at(generated_at.clone()),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(generated_at.clone()),
            html_formatter: HtmlFormatter::new(include_html_styles).with_generated_at(generated_at),
        }
    }

    pub fn generate_report(&self, result: &GuidanceResult, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(result),
            OutputFormat::Json => self.json_formatter.format_report(result),
            OutputFormat::Markdown => self.markdown_formatter.format_report(result),
            OutputFormat::Html => self.html_formatter.format_report(result),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, profile_name: &str, timestamp: Option<&str>) -> String {
    let base_name: String = profile_name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    let base_name = if base_name.is_empty() { "profile".to_string() } else { base_name };

    let timestamp_suffix = timestamp.map(|ts| format!("_{}", ts)).unwrap_or_default();

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };
    format!("{}_guidance{}.{}", base_name, timestamp_suffix, extension)
}
