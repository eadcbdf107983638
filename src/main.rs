//! Career guide: match a profile to career tracks and plan the way there

use career_guide::cli::{self, Cli, Commands, ConfigAction, ProfileArgs};
use career_guide::config::Config;
use career_guide::input::{InputManager, RawInput};
use career_guide::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use career_guide::processing::checklist::{build_checklist, roadmap_title};
use career_guide::processing::planner::LearningPhase;
use career_guide::profile::{Profile, ProfileRequest};
use career_guide::{CareerGuideError, GuidanceEngine, KnowledgeBase, Result};
use clap::Parser;
use colored::Colorize;
use log::{debug, error, info};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if !config.output.color_output {
        colored::control::set_override(false);
    }

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Guide {
            profile,
            output,
            save,
            detailed,
        } => {
            let engine = build_engine(&config)?;
            let profile = resolve_profile(&engine, &profile).await?;

            let format = match output {
                Some(format) => cli::parse_output_format(&format)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;

            let result = engine.guide(&profile);

            let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, detailed, true, true, Some(generated_at));
            let report = generator.generate_report(&result, &format)?;

            match save {
                Some(path) => {
                    let path = if path.is_dir() {
                        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
                        let name = result.profile.name.as_deref().unwrap_or("profile");
                        path.join(suggest_filename(&format, name, Some(&timestamp)))
                    } else {
                        path
                    };
                    save_report_to_file(&report, &path)?;
                    println!("✅ Guidance saved to {}", path.display());
                }
                None => println!("{}", report),
            }
        }

        Commands::Tracks => {
            let kb = load_knowledge_base(&config)?;
            println!("{}\n", "📋 Career Tracks".bold());
            for track in kb.tracks() {
                println!(
                    "{}  market {}/100 | future {}/100 | growth {}% ({})",
                    track.name.cyan().bold(),
                    track.market_demand_score,
                    track.future_demand_score,
                    track.growth_rate_percent,
                    track.demand_label()
                );
                println!("  Core: {}", track.core_skills.join(", "));
                println!("  Emerging: {}\n", track.emerging_skills.join(", "));
            }
        }

        Commands::Skills => {
            let kb = load_knowledge_base(&config)?;
            let variants = kb.known_skill_variants();
            println!("{} ({})\n", "🧠 Recognized skills".bold(), variants.len());
            for variant in variants {
                println!("  • {}", variant);
            }
        }

        Commands::Plan { track, profile, json } => {
            let engine = build_engine(&config)?;
            let profile = resolve_profile(&engine, &profile).await?;
            let guidance = engine.plan_for_track(&profile, &track)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&guidance)?);
                return Ok(());
            }

            let gap = &guidance.skill_gap;
            let plan = &guidance.learning_plan;
            println!("{}\n", format!("🛣️  Learning Roadmap for {}", plan.track).bold());
            println!("Have: {}", or_default(&gap.have_skills, "None identified"));
            println!("Need: {}", or_default(&gap.need_skills, "All core skills covered"));
            println!("Priority: {}", or_default(&gap.priority_gaps, "No immediate gaps identified"));
            println!("Timeline: {} months\n", plan.timeline_months);
            for phase in &plan.phases {
                print_phase(phase);
            }
        }

        Commands::Checklist { profile } => {
            let engine = build_engine(&config)?;
            let profile = resolve_profile(&engine, &profile).await?;
            let result = engine.guide(&profile);

            println!("{}\n", roadmap_title(&result).bold());
            for item in build_checklist(&result) {
                println!("[ ] {:>3}. {} ({})", item.sort_order + 1, item.title, item.category);
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                match &config.knowledge.path {
                    Some(path) => println!("Knowledge Base: {}", path.display()),
                    None => println!("Knowledge Base: built-in"),
                }
                println!("\nScoring:");
                println!("  Max bonus: {}", config.scoring.max_bonus);
                println!("  Recommendations: {}", config.scoring.max_recommendations);
                println!("  Top skills listed: {}", config.scoring.top_skills);
                println!("\nPlanning:");
                println!("  Base timeline: {} months", config.planning.base_timeline_months);
                println!("  Priority gaps: {}", config.planning.priority_gap_count);
                println!("  Projects per phase: {}", config.planning.max_projects);
                println!("  Certifications per phase: {}", config.planning.max_certifications);
                println!("\nExtraction:");
                println!("  Word-boundary tiers: {}", config.extraction.word_boundary_tiers);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save()?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }
        },
    }

    Ok(())
}

fn load_knowledge_base(config: &Config) -> Result<KnowledgeBase> {
    match &config.knowledge.path {
        Some(path) => KnowledgeBase::from_file(path),
        None => Ok(KnowledgeBase::builtin()),
    }
}

fn build_engine(config: &Config) -> Result<GuidanceEngine> {
    let kb = load_knowledge_base(config)?;
    Ok(GuidanceEngine::new(kb)?.with_settings(config.engine_settings()))
}

/// Turn whichever profile source was given into a profile.
async fn resolve_profile(engine: &GuidanceEngine, args: &ProfileArgs) -> Result<Profile> {
    if let Some(path) = &args.profile {
        let mut input_manager = InputManager::new();
        return match input_manager.load_profile(path).await? {
            RawInput::Text(text) => Ok(engine.extract_profile(&text)),
            RawInput::Structured(request) => structured_profile(engine, &request, args.no_validate),
        };
    }

    if let Some(text) = &args.text {
        return Ok(engine.extract_profile(text));
    }

    if args.has_inline_fields() {
        return structured_profile(engine, &args.to_request(), args.no_validate);
    }

    Err(CareerGuideError::InvalidInput(
        "No profile given: use --profile FILE, --text TEXT or --name/--skills".to_string(),
    ))
}

fn structured_profile(engine: &GuidanceEngine, request: &ProfileRequest, no_validate: bool) -> Result<Profile> {
    debug!("Profile request key: {}", request.cache_key()?);
    let matching = engine.settings().tier_matching;
    if no_validate {
        info!("Skipping profile validation");
        Ok(request.to_profile_with(matching))
    } else {
        request.validate_with(matching)
    }
}

fn print_phase(phase: &LearningPhase) {
    println!("{}", format!("{} Phase ({} weeks)", phase.phase, phase.duration_weeks).green().bold());
    println!("  Focus: {}", or_default(&phase.focus_skills, "None specified"));
    println!("  Projects: {}", or_default(&phase.projects, "None specified"));
    println!("  Certifications: {}", or_default(&phase.certifications, "None specified"));
    for resource in &phase.resources {
        println!("  📚 {} ({}, {})", resource.title, resource.provider, resource.reference);
    }
    println!();
}

fn or_default(items: &[String], default: &str) -> String {
    if items.is_empty() {
        default.to_string()
    } else {
        items.join(", ")
    }
}
