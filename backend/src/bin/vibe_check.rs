//! Operator CLI for classifying mood text and exercising the check-in flow.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use mockable::{Clock, DefaultClock};
use ortho_config::OrthoConfig;
use serde::Serialize;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use vibecheck::VibeSettings;
use vibecheck::domain::ports::{
    CheckInCommand, CheckInQuery, CheckInRequest, HistoryRequest, MoodAnalysisSource,
};
use vibecheck::domain::{
    CheckInService, CheckInSubject, DeviceId, MoodClassifier, SigningKeyCache, UserId,
};
use vibecheck::outbound::jwks::JwksHttpSource;
use vibecheck::outbound::memory::{InMemoryCheckInRepository, InMemoryStreakRepository};
use vibecheck::outbound::openai::OpenAiMoodSource;

const DEMO_ENTRIES: [&str; 2] = [
    "Feeling cozy with tea and a good book",
    "Trying again later today, still warm and snug",
];
const DEMO_GUEST_ENTRY: &str = "Excited for the road trip!";

/// `vibe-check` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "vibe-check",
    about = "Classify mood text and run check-ins against in-memory storage",
    version
)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify one mood entry and print the result as JSON.
    Classify {
        /// Free-text mood entry.
        text: String,
    },
    /// Run a scripted user and guest check-in sequence.
    Demo,
    /// Look up one identity-provider signing key by identifier.
    SigningKey {
        /// Key identifier from a token header.
        kid: String,
    },
}

fn main() -> io::Result<()> {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %error, "tracing init failed");
    }

    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(error) if is_informational(&error) => error.exit(),
        Err(error) => return Err(io::Error::other(error.to_string())),
    };
    let settings = VibeSettings::load_from_iter([OsString::from("vibe-check")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main(args, settings))
}

async fn async_main(args: CliArgs, settings: VibeSettings) -> io::Result<()> {
    match args.command {
        Command::Classify { text } => {
            let classifier = build_classifier(&settings)?;
            print_json(&classifier.classify(&text).await)
        }
        Command::Demo => run_demo(&settings).await,
        Command::SigningKey { kid } => {
            let source = JwksHttpSource::new(
                settings.signing_keys_url().map_err(io::Error::other)?,
                settings.signing_keys_timeout(),
            )
            .map_err(|error| io::Error::other(format!("create key client: {error}")))?;
            let cache = SigningKeyCache::new(
                Arc::new(source),
                Arc::new(DefaultClock),
                settings.signing_keys_ttl(),
            );
            let key = cache.key_for(&kid).await.map_err(io::Error::other)?;
            print_json(&key)
        }
    }
}

/// Whether clap stopped to print help or version text.
fn is_informational(error: &clap::Error) -> bool {
    matches!(
        error.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

fn build_classifier(settings: &VibeSettings) -> io::Result<MoodClassifier> {
    let Some(api_key) = settings.openai_api_key() else {
        return Ok(MoodClassifier::fallback_only());
    };
    let source = OpenAiMoodSource::new(
        settings.openai_endpoint().map_err(io::Error::other)?,
        api_key,
        settings.openai_model(),
        settings.ai_timeout(),
    )
    .map_err(|error| io::Error::other(format!("create analysis client: {error}")))?;
    let source: Arc<dyn MoodAnalysisSource> = Arc::new(source);
    Ok(MoodClassifier::with_source(source, settings.ai_timeout()))
}

async fn run_demo(settings: &VibeSettings) -> io::Result<()> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let service = CheckInService::new(
        Arc::new(InMemoryCheckInRepository::new()),
        Arc::new(InMemoryStreakRepository::new()),
        build_classifier(settings)?,
        clock,
    )
    .with_calendar(settings.calendar())
    .with_admission_policy(settings.admission_policy());

    let user_id = UserId::random();
    for entry in DEMO_ENTRIES {
        let outcome = service
            .check_in(CheckInRequest {
                subject: CheckInSubject::User(user_id.clone()),
                mood_text: entry.to_owned(),
            })
            .await
            .map_err(io::Error::other)?;
        print_json(&outcome)?;
    }

    let device_id = DeviceId::new("demo-device").map_err(io::Error::other)?;
    let guest_attempts = settings.admission_policy().guest_daily_limit().saturating_add(1);
    for _ in 0..guest_attempts {
        let outcome = service
            .check_in(CheckInRequest {
                subject: CheckInSubject::Device(device_id.clone()),
                mood_text: DEMO_GUEST_ENTRY.to_owned(),
            })
            .await
            .map_err(io::Error::other)?;
        print_json(&outcome)?;
    }

    let history = service
        .history(HistoryRequest {
            user_id: user_id.clone(),
            limit: None,
            offset: 0,
        })
        .await
        .map_err(io::Error::other)?;
    print_json(&history.total)?;
    print_json(&service.stats(&user_id).await.map_err(io::Error::other)?)
}

fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let rendered = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    println!("{rendered}");
    Ok(())
}
