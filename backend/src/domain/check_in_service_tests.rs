//! Tests for the check-in service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::{
    CheckInPage, FixtureStreakRepository, MockCheckInRepository, MockStreakRepository,
};
use crate::domain::{DeviceId, ErrorCode, classify_fallback};
use chrono::{DateTime, Local, TimeZone, Utc};
use rstest::{fixture, rstest};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 23, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn fixture_day() -> NaiveDate {
    fixture_now().date_naive()
}

fn make_service<C, S>(check_ins: C, streaks: S) -> CheckInService<C, S> {
    CheckInService::new(
        Arc::new(check_ins),
        Arc::new(streaks),
        MoodClassifier::fallback_only(),
        Arc::new(FixtureClock {
            utc_now: fixture_now(),
        }),
    )
}

fn stored_check_in(user_id: &UserId, day: NaiveDate, text: &str) -> CheckIn {
    CheckIn::new(
        CheckInSubject::User(user_id.clone()),
        day,
        MoodText::new(text).expect("mood text"),
        classify_fallback(text),
        fixture_now(),
    )
}

fn user_request(user_id: &UserId, text: &str) -> CheckInRequest {
    CheckInRequest {
        subject: CheckInSubject::User(user_id.clone()),
        mood_text: text.to_owned(),
    }
}

#[fixture]
fn user_id() -> UserId {
    UserId::random()
}

#[rstest]
#[case("")]
#[case("   ")]
#[tokio::test]
async fn blank_mood_text_is_rejected_before_storage(user_id: UserId, #[case] text: &str) {
    let service = make_service(MockCheckInRepository::new(), MockStreakRepository::new());

    let error = service
        .check_in(user_request(&user_id, text))
        .await
        .expect_err("blank text rejected");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn overlong_mood_text_is_rejected(user_id: UserId) {
    let service = make_service(MockCheckInRepository::new(), MockStreakRepository::new());

    let error = service
        .check_in(user_request(&user_id, &"a".repeat(501)))
        .await
        .expect_err("long text rejected");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn second_user_check_in_same_day_is_duplicate(user_id: UserId) {
    let existing = stored_check_in(&user_id, fixture_day(), "chill morning");
    let mut check_ins = MockCheckInRepository::new();
    check_ins
        .expect_find_for_user_on()
        .times(1)
        .return_once(move |_, _| Ok(Some(existing)));

    let service = make_service(check_ins, MockStreakRepository::new());
    let outcome = service
        .check_in(user_request(&user_id, "still chill"))
        .await
        .expect("duplicate is an outcome");

    assert_eq!(outcome, CheckInOutcome::Duplicate);
}

#[tokio::test]
async fn guest_over_quota_is_rejected() {
    let mut check_ins = MockCheckInRepository::new();
    check_ins
        .expect_count_for_device_on()
        .times(1)
        .return_once(|_, _| Ok(3));

    let service = make_service(check_ins, MockStreakRepository::new());
    let outcome = service
        .check_in(CheckInRequest {
            subject: CheckInSubject::Device(DeviceId::new("dev-1").expect("device")),
            mood_text: "hello".to_owned(),
        })
        .await
        .expect("quota is an outcome");

    assert_eq!(outcome, CheckInOutcome::QuotaExceeded { limit: 3 });
}

#[tokio::test]
async fn guest_check_ins_skip_streaks() {
    let mut check_ins = MockCheckInRepository::new();
    check_ins
        .expect_count_for_device_on()
        .times(1)
        .return_once(|_, _| Ok(1));
    check_ins
        .expect_insert_if_admitted()
        .times(1)
        .return_once(|_, _| Ok(AdmissionDecision::Accepted));

    let service = make_service(check_ins, MockStreakRepository::new());
    let outcome = service
        .check_in(CheckInRequest {
            subject: CheckInSubject::Device(DeviceId::new("dev-1").expect("device")),
            mood_text: "cozy blanket day".to_owned(),
        })
        .await
        .expect("accepted");

    let CheckInOutcome::Accepted(accepted) = outcome else {
        panic!("expected acceptance, got {outcome:?}");
    };
    assert!(accepted.streak.is_none());
    assert!(accepted.check_in.subject.user_id().is_none());
    assert_eq!(accepted.check_in.aesthetic_name, "Cozy Era");
}

#[rstest]
#[tokio::test]
async fn first_user_check_in_starts_a_streak(user_id: UserId) {
    let mut check_ins = MockCheckInRepository::new();
    check_ins
        .expect_find_for_user_on()
        .times(1)
        .return_once(|_, _| Ok(None));
    check_ins
        .expect_insert_if_admitted()
        .withf(|check_in, policy| {
            check_in.check_date == fixture_day() && policy.guest_daily_limit() == 3
        })
        .times(1)
        .return_once(|_, _| Ok(AdmissionDecision::Accepted));

    let mut streaks = MockStreakRepository::new();
    streaks
        .expect_find_by_user_id()
        .times(1)
        .return_once(|_| Ok(None));
    streaks
        .expect_save()
        .withf(|state, expected| state.current_streak == 1 && expected.is_none())
        .times(1)
        .return_once(|_, _| Ok(()));

    let service = make_service(check_ins, streaks);
    let outcome = service
        .check_in(user_request(&user_id, "so happy today"))
        .await
        .expect("accepted");

    let CheckInOutcome::Accepted(accepted) = outcome else {
        panic!("expected acceptance, got {outcome:?}");
    };
    let streak = accepted.streak.expect("user streak");
    assert_eq!(
        (streak.current_streak, streak.longest_streak, streak.total_check_ins),
        (1, 1, 1)
    );
    assert_eq!(streak.last_check_date, fixture_day());
}

#[rstest]
#[tokio::test]
async fn losing_the_insert_race_reports_duplicate(user_id: UserId) {
    let mut check_ins = MockCheckInRepository::new();
    check_ins
        .expect_find_for_user_on()
        .times(1)
        .return_once(|_, _| Ok(None));
    check_ins
        .expect_insert_if_admitted()
        .times(1)
        .return_once(|_, _| Ok(AdmissionDecision::Duplicate));

    let service = make_service(check_ins, MockStreakRepository::new());
    let outcome = service
        .check_in(user_request(&user_id, "fine"))
        .await
        .expect("duplicate outcome");

    assert_eq!(outcome, CheckInOutcome::Duplicate);
}

#[rstest]
#[tokio::test]
async fn connection_failures_map_to_service_unavailable(user_id: UserId) {
    let mut check_ins = MockCheckInRepository::new();
    check_ins
        .expect_find_for_user_on()
        .times(1)
        .return_once(|_, _| Err(CheckInRepositoryError::connection("refused")));

    let service = make_service(check_ins, MockStreakRepository::new());
    let error = service
        .check_in(user_request(&user_id, "fine"))
        .await
        .expect_err("connection error");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[tokio::test]
async fn stale_streak_revision_is_a_conflict(user_id: UserId) {
    let previous = StreakState::first(user_id.clone(), fixture_day().pred_opt().expect("day"));
    let mut streaks = MockStreakRepository::new();
    streaks
        .expect_find_by_user_id()
        .times(1)
        .return_once(move |_| Ok(Some(previous)));
    streaks
        .expect_save()
        .withf(|state, expected| state.current_streak == 2 && *expected == Some(1))
        .times(1)
        .return_once(|_, _| Err(StreakRepositoryError::revision_mismatch(1_u32, 2_u32)));

    let service = make_service(MockCheckInRepository::new(), streaks);
    let error = service
        .update_streak(&user_id, fixture_day())
        .await
        .expect_err("conflict");

    assert_eq!(error.code(), ErrorCode::Conflict);
    let details = error.details().expect("details");
    assert_eq!(details["code"], "revision_mismatch");
}

#[rstest]
#[tokio::test]
async fn same_day_streak_update_does_not_write(user_id: UserId) {
    let counted = StreakState::first(user_id.clone(), fixture_day());
    let expected = counted.clone();
    let mut streaks = MockStreakRepository::new();
    streaks
        .expect_find_by_user_id()
        .times(1)
        .return_once(move |_| Ok(Some(counted)));
    streaks.expect_save().never();

    let service = make_service(MockCheckInRepository::new(), streaks);
    let state = service
        .update_streak(&user_id, fixture_day())
        .await
        .expect("no-op");

    assert_eq!(state, expected);
}

#[rstest]
#[tokio::test]
async fn calendar_offset_moves_the_day(user_id: UserId) {
    // 23:30 UTC is already the next day one hour east.
    let next_day = fixture_day().succ_opt().expect("day");
    let mut check_ins = MockCheckInRepository::new();
    check_ins
        .expect_find_for_user_on()
        .withf(move |_, day| *day == next_day)
        .times(1)
        .return_once(|_, _| Ok(None));

    let service = make_service(check_ins, FixtureStreakRepository)
        .with_calendar(CheckInCalendar::from_offset_minutes(60));
    let today = CheckInQuery::today(&service, &user_id)
        .await
        .expect("today lookup");

    assert!(today.is_none());
}

#[rstest]
#[tokio::test]
async fn history_clamps_the_page_size(user_id: UserId) {
    let mut check_ins = MockCheckInRepository::new();
    check_ins
        .expect_list_for_user()
        .withf(|_, limit, offset| *limit == 100 && *offset == 40)
        .times(1)
        .return_once(|_, _, _| {
            Ok(CheckInPage {
                items: Vec::new(),
                total: 41,
            })
        });

    let service = make_service(check_ins, FixtureStreakRepository);
    let page = service
        .history(HistoryRequest {
            user_id,
            limit: Some(1_000),
            offset: 40,
        })
        .await
        .expect("history");

    assert_eq!((page.limit, page.offset, page.total), (100, 40, 41));
}

#[rstest]
#[tokio::test]
async fn stats_combine_streak_and_history(user_id: UserId) {
    let day = fixture_day();
    let streak = StreakState::first(user_id.clone(), day);
    let rows = vec![
        stored_check_in(&user_id, day, "cozy blanket day"),
        stored_check_in(&user_id, day.pred_opt().expect("day"), "tea and rain"),
    ];

    let mut streaks = MockStreakRepository::new();
    streaks
        .expect_find_by_user_id()
        .times(1)
        .return_once(move |_| Ok(Some(streak)));
    let mut check_ins = MockCheckInRepository::new();
    check_ins
        .expect_all_for_user()
        .times(1)
        .return_once(move |_| Ok(rows));

    let service = make_service(check_ins, streaks);
    let stats = service.stats(&user_id).await.expect("stats");

    assert_eq!(stats.total_check_ins, 1);
    assert_eq!(stats.top_aesthetic.as_deref(), Some("Cozy Era"));
    assert!(stats.avg_vibe_score > 0.0);
}
