mod config;
mod corpus;
mod errors;
mod evaluation;
mod models;
mod selection;
mod session;
mod state;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::corpus::QuestionCorpus;
use crate::evaluation::scorer::KeywordOverlapScorer;
use crate::models::question::DifficultyTag;
use crate::session::{grade_session, InterviewSession, SessionReport, Submission};
use crate::state::EngineState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging; stdout is reserved for the session itself
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting interview practice v{}", env!("CARGO_PKG_VERSION"));

    let corpus = match QuestionCorpus::embedded() {
        Ok(corpus) => corpus,
        Err(e) => {
            error!(code = e.code(), "Question corpus failed validation: {e}");
            return Err(e.into());
        }
    };
    info!(roles = ?corpus.roles(), "Question corpus v{} loaded", corpus.version());

    let state = EngineState {
        corpus: Arc::new(corpus),
        scorer: Arc::new(KeywordOverlapScorer),
        config,
    };

    let cfg = &state.config;
    let session = match cfg.shuffle_seed {
        Some(seed) => {
            info!(seed, "Using seeded question shuffle");
            InterviewSession::start(
                &state,
                &cfg.role,
                &cfg.difficulty,
                cfg.question_count,
                &mut StdRng::seed_from_u64(seed),
            )
        }
        None => InterviewSession::start(
            &state,
            &cfg.role,
            &cfg.difficulty,
            cfg.question_count,
            &mut rand::thread_rng(),
        ),
    };

    let submissions = collect_answers(&session).await?;
    let results = grade_session(&state, submissions).await?;
    let report = SessionReport::new(&session, results);

    let mut stdout = tokio::io::stdout();
    let body = serde_json::to_string_pretty(&report).context("Failed to serialize session report")?;
    stdout.write_all(body.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;

    Ok(())
}

/// Prints each question and reads one answer line from stdin. End of input counts as
/// an empty answer for every remaining question.
async fn collect_answers(session: &InterviewSession) -> Result<Vec<Submission>> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let total = session.questions.len();

    let mut intro = session.heading();
    if let Some(difficulty) = DifficultyTag::parse(&session.difficulty) {
        intro.push_str(&format!("\n{}", difficulty.description()));
    }
    stdout.write_all(format!("{intro}\n\n").as_bytes()).await?;

    let mut submissions = Vec::with_capacity(total);
    for (i, question) in session.questions.iter().enumerate() {
        stdout
            .write_all(format!("Question {} of {}: {}\n> ", i + 1, total, question.text).as_bytes())
            .await?;
        stdout.flush().await?;

        let answer = lines
            .next_line()
            .await
            .context("Failed to read answer from stdin")?
            .unwrap_or_default();

        submissions.push(Submission {
            question: question.clone(),
            answer,
        });
    }
    stdout.write_all(b"\n").await?;

    Ok(submissions)
}
