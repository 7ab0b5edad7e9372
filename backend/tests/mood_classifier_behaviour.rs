//! Behavioural tests for external mood analysis flowing through check-ins.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};
use vibecheck::domain::ports::{
    CheckInCommand, CheckInOutcome, CheckInRequest, MoodAnalysis, MoodAnalysisSource,
    MoodAnalysisSourceError,
};
use vibecheck::domain::{
    AestheticKey, CheckInService, CheckInSubject, ClassificationSource, MoodClassifier, UserId,
};
use vibecheck::outbound::memory::{InMemoryCheckInRepository, InMemoryStreakRepository};
use vibecheck::test_support::MutableClock;

struct ScriptedAnalysisSource {
    scripted: Mutex<VecDeque<Result<MoodAnalysis, MoodAnalysisSourceError>>>,
    calls: AtomicUsize,
}

impl ScriptedAnalysisSource {
    fn new(scripted: Vec<Result<MoodAnalysis, MoodAnalysisSourceError>>) -> Self {
        Self {
            scripted: Mutex::new(scripted.into()),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MoodAnalysisSource for ScriptedAnalysisSource {
    async fn analyse(&self, _mood_text: &str) -> Result<MoodAnalysis, MoodAnalysisSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.scripted
            .lock()
            .expect("source script mutex")
            .pop_front()
            .unwrap_or_else(|| Err(MoodAnalysisSourceError::empty_response()))
    }
}

fn analysis(key: &str, score: i64) -> MoodAnalysis {
    MoodAnalysis {
        aesthetic_key: key.to_owned(),
        vibe_score: score,
        insight: "You carry a quiet confidence today.".to_owned(),
    }
}

#[fixture]
fn clock() -> Arc<MutableClock> {
    Arc::new(MutableClock::new(
        Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0)
            .single()
            .expect("valid fixed time"),
    ))
}

fn service(
    source: Arc<ScriptedAnalysisSource>,
    clock: Arc<MutableClock>,
) -> CheckInService<InMemoryCheckInRepository, InMemoryStreakRepository> {
    let source: Arc<dyn MoodAnalysisSource> = source;
    CheckInService::new(
        Arc::new(InMemoryCheckInRepository::new()),
        Arc::new(InMemoryStreakRepository::new()),
        MoodClassifier::with_source(source, Duration::from_secs(5)),
        clock,
    )
}

async fn check_in(
    service: &CheckInService<InMemoryCheckInRepository, InMemoryStreakRepository>,
    user_id: &UserId,
    text: &str,
) -> CheckInOutcome {
    service
        .check_in(CheckInRequest {
            subject: CheckInSubject::User(user_id.clone()),
            mood_text: text.to_owned(),
        })
        .await
        .expect("check-in succeeds")
}

#[rstest]
#[tokio::test]
async fn analysis_results_are_stored_with_clamped_scores(clock: Arc<MutableClock>) {
    let source = Arc::new(ScriptedAnalysisSource::new(vec![Ok(analysis(
        "confident",
        140,
    ))]));
    let service = service(source.clone(), clock);

    let outcome = check_in(&service, &UserId::random(), "ready for anything").await;

    let CheckInOutcome::Accepted(accepted) = outcome else {
        panic!("expected an accepted check-in, got {outcome:?}");
    };
    assert_eq!(accepted.check_in.aesthetic, AestheticKey::Confident);
    assert_eq!(accepted.check_in.vibe_score.value(), 100);
    assert_eq!(accepted.check_in.aesthetic_name, "Main Character");
    assert_eq!(source.call_count(), 1);
}

#[rstest]
#[case::transport(Err(MoodAnalysisSourceError::transport("connection reset")))]
#[case::status(Err(MoodAnalysisSourceError::status(500_u16, "upstream error")))]
#[case::unknown_key(Ok(analysis("vaporwave", 60)))]
#[tokio::test]
async fn failed_analysis_falls_back_to_keywords(
    clock: Arc<MutableClock>,
    #[case] scripted: Result<MoodAnalysis, MoodAnalysisSourceError>,
) {
    let source = Arc::new(ScriptedAnalysisSource::new(vec![scripted]));
    let service = service(source, clock);

    let outcome = check_in(
        &service,
        &UserId::random(),
        "cozy evening with tea and a warm blanket",
    )
    .await;

    let CheckInOutcome::Accepted(accepted) = outcome else {
        panic!("expected an accepted check-in, got {outcome:?}");
    };
    assert_eq!(accepted.check_in.aesthetic, AestheticKey::Cozy);
}

#[rstest]
#[tokio::test]
async fn duplicate_check_ins_skip_analysis(clock: Arc<MutableClock>) {
    let source = Arc::new(ScriptedAnalysisSource::new(vec![Ok(analysis("chill", 70))]));
    let service = service(source.clone(), clock);
    let user_id = UserId::random();

    check_in(&service, &user_id, "slow sunday").await;
    let second = check_in(&service, &user_id, "still slow").await;

    assert_eq!(second, CheckInOutcome::Duplicate);
    assert_eq!(source.call_count(), 1);
}

#[rstest]
#[tokio::test]
async fn classifier_reports_its_source() {
    let source: Arc<dyn MoodAnalysisSource> = Arc::new(ScriptedAnalysisSource::new(vec![
        Ok(analysis("peaceful", 55)),
        Err(MoodAnalysisSourceError::timeout("deadline elapsed")),
    ]));
    let classifier = MoodClassifier::with_source(source, Duration::from_secs(5));

    let first = classifier.classify("quiet lake at dawn").await;
    let second = classifier.classify("quiet lake at dawn").await;

    assert_eq!(first.source, ClassificationSource::Ai);
    assert_eq!(first.aesthetic, AestheticKey::Peaceful);
    assert_eq!(second.source, ClassificationSource::Fallback);
}
