//! Behaviour tests for the architecture guardrails.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use architecture_lint::{ArchitectureLintError, LintSource, Violation};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

#[derive(Debug, Default)]
struct LintWorld {
    sources: Vec<LintSource>,
    result: Option<Result<(), ArchitectureLintError>>,
}

#[fixture]
fn world() -> Mutex<LintWorld> {
    Mutex::new(LintWorld::default())
}

fn add_source(world: &Mutex<LintWorld>, file: &str, contents: &str) {
    let mut world = world.lock().expect("world lock");
    world.sources.push(LintSource {
        file: PathBuf::from(file),
        contents: contents.to_owned(),
    })
}

#[given("a domain module that imports an in-memory store")]
fn domain_imports_outbound(world: &Mutex<LintWorld>) {
    add_source(
        world,
        "domain/check_in_service.rs",
        "use vibecheck::outbound::memory::InMemoryCheckInRepository; fn build() { let _ = InMemoryCheckInRepository::new(); }",
    );
}

#[given("an outbound module that reads configuration directly")]
fn outbound_imports_ortho_config(world: &Mutex<LintWorld>) {
    add_source(
        world,
        "outbound/openai/http_source.rs",
        "use ortho_config::OrthoConfig; fn build() {}",
    );
}

#[given("a domain module that imports reqwest")]
fn domain_imports_reqwest(world: &Mutex<LintWorld>) {
    add_source(
        world,
        "domain/mood_classifier.rs",
        "use reqwest::Client; fn classify() { let _ = Client::new(); }",
    );
}

#[given("an outbound module that imports the settings module")]
fn outbound_imports_settings(world: &Mutex<LintWorld>) {
    add_source(
        world,
        "outbound/memory/bad_cross_boundary.rs",
        "use crate::settings::VibeSettings; fn build() { let _ = 1; }",
    );
}

#[given("valid domain and outbound modules")]
fn valid_modules(world: &Mutex<LintWorld>) {
    add_valid_modules(world);
}

#[given("valid modules mixed with multiple boundary violations")]
fn valid_modules_with_multiple_violations(world: &Mutex<LintWorld>) {
    add_valid_modules(world);
    add_source(
        world,
        "domain/bad_cross_boundary.rs",
        "use crate::outbound::openai::OpenAiMoodSource; fn build() { let _ = 1; }",
    );
    add_source(
        world,
        "domain/bad.rs",
        "use reqwest::Client; fn classify() { let _ = Client::new(); }",
    );
}

fn add_valid_modules(world: &Mutex<LintWorld>) {
    add_source(
        world,
        "domain/streak.rs",
        "use chrono::NaiveDate; pub struct StreakState { pub last_check_date: NaiveDate }",
    );
    add_source(
        world,
        "domain/ports/streak_repository.rs",
        "use crate::domain::streak::StreakState; pub trait StreakRepository { fn save(&self, state: &StreakState); }",
    );
    add_source(
        world,
        "outbound/memory/streak_repository.rs",
        "use crate::domain::ports::streak_repository::StreakRepository; use crate::domain::streak::StreakState; pub struct Repo; impl StreakRepository for Repo { fn save(&self, _state: &StreakState) {} }",
    );
}

#[when("the architecture lint runs")]
fn run_architecture_lint(world: &Mutex<LintWorld>) {
    let sources = {
        let world = world.lock().expect("world lock");
        world.sources.clone()
    };

    let temp_dir = TempDir::new().expect("tempdir");
    let backend_dir = temp_dir.path().join("backend");
    let src_dir = backend_dir.join("src");
    for source in &sources {
        let path = src_dir.join(&source.file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directories");
        }
        fs::write(&path, &source.contents).expect("write source file");
    }

    let result = architecture_lint::lint_backend_sources(&backend_dir);
    let mut world = world.lock().expect("world lock");
    world.result = Some(result);
}

#[then("the lint succeeds")]
fn lint_succeeds(world: &Mutex<LintWorld>) {
    let world = world.lock().expect("world lock");
    let outcome = world.result.as_ref().expect("lint must have run");
    assert!(outcome.is_ok(), "expected success, got: {outcome:?}");
}

fn assert_violation_in_file_contains(
    world: &Mutex<LintWorld>,
    expected_file: &str,
    expected_substring: &str,
) {
    let expected_file = PathBuf::from(expected_file);
    let violations = violations(world);
    assert!(
        violations.iter().any(|violation| {
            violation.file == expected_file && violation.message.contains(expected_substring)
        }),
        "expected violation in '{expected_file:?}' containing '{expected_substring}', got: {violations:?}"
    );
}

fn violations(world: &Mutex<LintWorld>) -> Vec<Violation> {
    let world = world.lock().expect("world lock");
    let outcome = world.result.as_ref().expect("lint must have run");
    extract_violations(outcome).expect("expected violations")
}

#[then("the lint fails due to outbound access from the domain")]
fn lint_fails_due_to_outbound_access(world: &Mutex<LintWorld>) {
    assert_violation_in_file_contains(world, "domain/check_in_service.rs", "crate::outbound");
}

#[then("the lint fails due to settings access from outbound")]
fn lint_fails_due_to_settings_access(world: &Mutex<LintWorld>) {
    assert_violation_in_file_contains(
        world,
        "outbound/memory/bad_cross_boundary.rs",
        "crate::settings",
    );
}

#[then("the lint fails due to configuration crate usage in an adapter")]
fn lint_fails_due_to_configuration_crate(world: &Mutex<LintWorld>) {
    assert_violation_in_file_contains(
        world,
        "outbound/openai/http_source.rs",
        "external crate `ortho_config`",
    );
}

#[then("the lint fails due to HTTP client usage in the domain")]
fn lint_fails_due_to_http_client_crate(world: &Mutex<LintWorld>) {
    assert_violation_in_file_contains(
        world,
        "domain/mood_classifier.rs",
        "external crate `reqwest`",
    );
}

#[then("the lint fails")]
fn lint_fails(world: &Mutex<LintWorld>) {
    let world = world.lock().expect("world lock");
    let outcome = world.result.as_ref().expect("lint must have run");
    assert!(outcome.is_err(), "expected failure, got: {outcome:?}");
}

#[then("all boundary violations are reported")]
fn all_boundary_violations_are_reported(world: &Mutex<LintWorld>) {
    let violations = violations(world);
    assert!(
        violations.len() >= 2,
        "expected at least 2 violations, got: {violations:?}"
    );
    assert_violation_in_file_contains(world, "domain/bad_cross_boundary.rs", "crate::outbound");
    assert_violation_in_file_contains(world, "domain/bad.rs", "external crate `reqwest`");
}

fn extract_violations(outcome: &Result<(), ArchitectureLintError>) -> Option<Vec<Violation>> {
    match outcome {
        Ok(()) => None,
        Err(ArchitectureLintError::Violations(violations)) => Some(violations.clone()),
        Err(other) => panic!("expected violations error, got: {other:?}"),
    }
}

#[scenario(
    path = "tests/features/architecture_guardrails.feature",
    name = "Clean layering passes"
)]
fn clean_layering_passes(world: Mutex<LintWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/architecture_guardrails.feature",
    name = "The domain must not reach into adapters"
)]
fn domain_must_not_reach_into_adapters(world: Mutex<LintWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/architecture_guardrails.feature",
    name = "Adapters must not read configuration"
)]
fn adapters_must_not_read_configuration(world: Mutex<LintWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/architecture_guardrails.feature",
    name = "The domain must not use an HTTP client"
)]
fn domain_must_not_use_an_http_client(world: Mutex<LintWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/architecture_guardrails.feature",
    name = "Outbound adapters must not read settings"
)]
fn outbound_must_not_read_settings(world: Mutex<LintWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/architecture_guardrails.feature",
    name = "Every violation is reported"
)]
fn every_violation_is_reported(world: Mutex<LintWorld>) {
    let _ = world;
}
