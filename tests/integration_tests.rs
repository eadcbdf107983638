//! Integration tests for the career guide

use career_guide::config::{Config, OutputFormat};
use career_guide::input::{InputManager, RawInput};
use career_guide::output::formatter::{save_report_to_file, ReportGenerator};
use career_guide::processing::checklist::{build_checklist, roadmap_title, ChecklistCategory};
use career_guide::profile::{EducationLevel, ExperienceLevel, ProfileRequest};
use career_guide::{CareerGuideError, GuidanceEngine, GuidanceResult, KnowledgeBase, Profile};
use std::path::Path;
use tempfile::TempDir;

#[tokio::test]
async fn test_text_profile_end_to_end() {
    let mut manager = InputManager::new();
    let raw = manager
        .load_profile(Path::new("tests/fixtures/sample_profile.txt"))
        .await
        .unwrap();

    let text = match raw {
        RawInput::Text(text) => text,
        other => panic!("expected free text, got {:?}", other),
    };

    let engine = GuidanceEngine::builtin().unwrap();
    let profile = engine.extract_profile(&text);
    assert_eq!(profile.name.as_deref(), Some("Sarah Chen"));
    assert_eq!(profile.education_level, Some(EducationLevel::Masters));
    assert_eq!(profile.experience_level, Some(ExperienceLevel::Mid));
    assert!(profile.interests.contains("research"));

    let result = engine.guide(&profile);
    let top = result.top_recommendation().unwrap();
    assert_eq!(top.track, "Data Scientist");
    assert_eq!(top.match_score, 100);
    // 12 * 0.8 * 0.8
    assert_eq!(result.learning_plan.unwrap().timeline_months, 8);
}

#[tokio::test]
async fn test_markdown_profile_is_flattened() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_profile.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(!text.contains("**"));
    assert!(!text.contains('#'));
    assert!(text.contains("Name: Priya Nair"));

    let engine = GuidanceEngine::builtin().unwrap();
    let result = engine.guide_text(&text);
    assert_eq!(result.profile.name.as_deref(), Some("Priya Nair"));
    assert_eq!(result.profile.experience_level, Some(ExperienceLevel::Senior));
    assert_eq!(result.profile.education_level, Some(EducationLevel::Bachelors));
    assert_eq!(result.top_recommendation().unwrap().track, "DevOps Engineer");
}

#[tokio::test]
async fn test_structured_json_profile() {
    let mut manager = InputManager::new();
    let raw = manager
        .load_profile(Path::new("tests/fixtures/sample_profile.json"))
        .await
        .unwrap();

    let request = match raw {
        RawInput::Structured(request) => request,
        other => panic!("expected structured input, got {:?}", other),
    };
    let profile = request.validate().unwrap();
    assert_eq!(profile.experience_level, Some(ExperienceLevel::Mid));

    let key = request.cache_key().unwrap();
    assert!(key.starts_with("ai:guidance:"));
    assert_eq!(key.len(), "ai:guidance:".len() + 64);

    let engine = GuidanceEngine::builtin().unwrap();
    let result = engine.guide(&profile);
    assert_eq!(result.top_recommendation().unwrap().track, "Data Scientist");
    assert_eq!(result.top_recommendation().unwrap().match_score, 100);
}

#[tokio::test]
async fn test_structured_toml_profile_with_csv_lists() {
    let mut manager = InputManager::new();
    let raw = manager
        .load_profile(Path::new("tests/fixtures/sample_profile.toml"))
        .await
        .unwrap();

    let RawInput::Structured(request) = raw else {
        panic!("expected structured input");
    };
    assert_eq!(request.skills, vec!["javascript", "html", "css"]);

    let profile = request.validate().unwrap();
    assert_eq!(profile.education_level, Some(EducationLevel::HighSchool));
    assert_eq!(profile.experience_level, Some(ExperienceLevel::Student));

    let engine = GuidanceEngine::builtin().unwrap();
    let plan = engine.guide(&profile).learning_plan.unwrap();
    // 12 * 1.5 * 1.3 = 23.4
    assert_eq!(plan.timeline_months, 23);
}

#[tokio::test]
async fn test_invalid_structured_profile_is_rejected() {
    let mut manager = InputManager::new();
    let raw = manager
        .load_profile(Path::new("tests/fixtures/invalid_profile.json"))
        .await
        .unwrap();

    let RawInput::Structured(request) = raw else {
        panic!("expected structured input");
    };
    assert!(matches!(request.validate(), Err(CareerGuideError::InvalidInput(_))));

    // without validation the engine still produces a sparse result
    let engine = GuidanceEngine::builtin().unwrap();
    let result = engine.guide(&request.to_profile());
    assert!(result.recommendations.iter().all(|r| r.match_score == 0));
    assert!(!result.clarifications_needed.is_empty());
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_profile.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(CareerGuideError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.load_profile(path).await;
    assert!(matches!(result, Err(CareerGuideError::InvalidInput(_))));
}

#[test]
fn test_custom_knowledge_base_file() {
    let kb = KnowledgeBase::from_file(Path::new("tests/fixtures/custom_knowledge.toml")).unwrap();
    assert_eq!(kb.tracks().len(), 2);
    assert_eq!(kb.known_skill_variants(), vec!["py", "pyspark", "python", "spark"]);

    let engine = GuidanceEngine::new(kb).unwrap();
    let profile = Profile::builder().name("Dana").skills(["py", "PySpark", "sql", "airflow"]).build();
    let result = engine.guide(&profile);

    let top = result.top_recommendation().unwrap();
    assert_eq!(top.track, "Data Engineer");
    assert_eq!(top.match_score, 100);
    let hollow = result.recommendations.iter().find(|r| r.track == "Hollow Track").unwrap();
    assert_eq!(hollow.match_score, 0);

    let plan = result.learning_plan.unwrap();
    assert_eq!(plan.phases[0].projects, vec!["Build a batch ETL pipeline"]);
    assert_eq!(plan.phases[0].resources.len(), 1);
    assert!(plan.phases[1].projects.is_empty());
}

#[test]
fn test_duplicate_tracks_rejected() {
    let content = r#"
[[tracks]]
name = "Twin"
core_skills = ["a"]
emerging_skills = []
market_demand_score = 1
future_demand_score = 1
growth_rate_percent = 1.0

[[tracks]]
name = "Twin"
core_skills = ["b"]
emerging_skills = []
market_demand_score = 1
future_demand_score = 1
growth_rate_percent = 1.0
"#;
    assert!(matches!(
        KnowledgeBase::from_toml_str(content),
        Err(CareerGuideError::KnowledgeBase(_))
    ));
}

#[test]
fn test_structured_output_round_trip_and_determinism() {
    let engine = GuidanceEngine::builtin().unwrap();
    let profile = Profile::builder()
        .name("Jordan")
        .experience(ExperienceLevel::Fresher)
        .skills(["React", "node.js", "programming", "testing"])
        .build();

    let first = engine.guide(&profile);
    let second = engine.guide(&profile);
    let json = first.to_json(true).unwrap();
    assert_eq!(json, second.to_json(true).unwrap());

    let parsed = GuidanceResult::from_json(&json).unwrap();
    assert_eq!(parsed, first);
}

#[test]
fn test_checklist_from_full_pipeline() {
    let engine = GuidanceEngine::builtin().unwrap();
    let result = engine.guide_text("Name: Omar\nSkills: network security, compliance\nI am a junior analyst");

    assert_eq!(roadmap_title(&result), "Cybersecurity Analyst Roadmap");
    let items = build_checklist(&result);
    let categories: Vec<ChecklistCategory> = items.iter().map(|i| i.category).collect();

    let first_resume = categories.iter().position(|c| *c == ChecklistCategory::Resume).unwrap();
    assert!(categories[first_resume..].iter().all(|c| *c == ChecklistCategory::Resume));
    assert_eq!(categories[0], ChecklistCategory::SkillGap);
}

#[test]
fn test_every_format_renders_and_saves() {
    let engine = GuidanceEngine::builtin().unwrap();
    let result = engine.guide(&Profile::builder().name("Sam").skills(["figma", "user research"]).build());
    let generator = ReportGenerator::with_options(false, true, true, true, None);
    let dir = TempDir::new().unwrap();

    for (format, file) in [
        (OutputFormat::Console, "out.txt"),
        (OutputFormat::Json, "out.json"),
        (OutputFormat::Markdown, "out.md"),
        (OutputFormat::Html, "out.html"),
    ] {
        let report = generator.generate_report(&result, &format).unwrap();
        assert!(report.contains("UX/UI Designer") || format == OutputFormat::Html);
        let path = dir.path().join("reports").join(file);
        save_report_to_file(&report, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), report);
    }
}

#[test]
fn test_config_drives_engine_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[scoring]\nmax_recommendations = 3\n\n[planning]\nbase_timeline_months = 6.0\n\n[extraction]\nword_boundary_tiers = true\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    let engine = GuidanceEngine::builtin().unwrap().with_settings(config.engine_settings());

    // "mastered" no longer reads as a master's degree
    let result = engine.guide_text("Name: Kim\nI mastered python and sql");
    assert_eq!(result.profile.education_level, None);
    assert_eq!(result.recommendations.len(), 3);
    assert_eq!(result.learning_plan.unwrap().timeline_months, 6);
}

#[test]
fn test_word_boundary_setting_reaches_structured_requests() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[extraction]\nword_boundary_tiers = true\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    let engine = GuidanceEngine::builtin().unwrap().with_settings(config.engine_settings());
    let matching = engine.settings().tier_matching;

    let mut request = ProfileRequest::new("Lee", &["python", "sql"]);
    request.education = "Master's in Statistics".to_string();
    request.experience = "Senior".to_string();
    let profile = request.validate_with(matching).unwrap();
    assert_eq!(profile.education_level, Some(EducationLevel::Masters));

    request.education = "Webmaster certificate".to_string();
    assert_eq!(request.validate_with(matching).unwrap().education_level, None);
    assert_eq!(request.validate().unwrap().education_level, Some(EducationLevel::Masters));
}
