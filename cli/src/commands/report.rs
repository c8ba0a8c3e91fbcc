//! The interactive reporting workflow.
//!
//! One run walks credential acquisition, standup listing and selection,
//! answer collection, submission, and outcome presentation. Service and
//! credential failures are converted into a single user-facing message
//! here; cancellation and an unsaved report are normal outcomes.

use std::path::Path;

use chrono::DateTime;
use colored::Colorize;
use geekbot_sdk::{Report, Standup, StandupClient, StandupError};
use tracing::debug;

use crate::collector::collect_answers;
use crate::error::CliError;
use crate::git;
use crate::keystore::SecretStore;
use crate::terminal::Terminal;

const SELECT_ATTEMPTS: usize = 3;
const COMMIT_SUGGESTIONS: usize = 5;
const DASHBOARD_URL: &str = "https://app.geekbot.com/dashboard";

/// How one reporting run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The service persisted the report
    Submitted { channel: String, done_at: i64 },
    /// The service accepted the request but did not save the report
    NotSaved,
    /// The user made no standup selection
    Cancelled,
}

/// Outcome of the selection prompt
enum Selection {
    Chosen(usize),
    Cancelled,
}

/// Run the full reporting workflow once.
///
/// Every [`StandupError`] raised below this point is presented to the
/// user here; the error value is still returned so `main` can pick the
/// exit code.
pub async fn run_report<S: SecretStore, T: Terminal>(
    store: &S,
    term: &mut T,
    mut client: StandupClient,
) -> Result<RunOutcome, CliError> {
    match run_inner(store, term, &mut client).await {
        Ok(outcome) => Ok(outcome),
        Err(CliError::Standup(e)) => {
            term.say(&format!("An error occurred: {}", e).red().to_string())?;
            Err(CliError::Standup(e))
        }
        Err(e) => Err(e),
    }
}

async fn run_inner<S: SecretStore, T: Terminal>(
    store: &S,
    term: &mut T,
    client: &mut StandupClient,
) -> Result<RunOutcome, CliError> {
    let api_key = acquire_api_key(store, term)?;
    client.set_api_key(api_key)?;

    let standups = client.get_standups().await?;

    let standup = match select_standup(term, &standups)? {
        Selection::Chosen(index) => standups[index].clone(),
        Selection::Cancelled => {
            term.say(&"No standup selected.".yellow().to_string())?;
            return Ok(RunOutcome::Cancelled);
        }
    };

    suggest_commits(term)?;
    let answers = collect_answers(term, &standup.questions)?;

    let report = Report::new(standup.id, answers);
    let receipt = client.submit_report(&report).await?;

    if receipt.saved() {
        term.say(
            &format!("Report submitted successfully! Check #{}", receipt.channel)
                .green()
                .to_string(),
        )?;
        if let Some(when) = DateTime::from_timestamp(receipt.done_at, 0) {
            term.say(&format!("Completed at {}", when.format("%Y-%m-%d %H:%M UTC")))?;
        }
        Ok(RunOutcome::Submitted {
            channel: receipt.channel,
            done_at: receipt.done_at,
        })
    } else {
        term.say("Report could not be saved.")?;
        Ok(RunOutcome::NotSaved)
    }
}

/// Fetch the stored API key, or enroll one interactively when none is
/// stored yet. Keychain backend faults stay fatal.
fn acquire_api_key<S: SecretStore, T: Terminal>(
    store: &S,
    term: &mut T,
) -> Result<String, CliError> {
    match store.get() {
        Ok(key) => {
            debug!("Using stored API key");
            Ok(key)
        }
        Err(CliError::Standup(StandupError::CredentialNotFound { .. })) => {
            term.say("Please enter your API key. Get one here:")?;
            term.say(&format!("{}/api-webhooks", DASHBOARD_URL))?;
            let key = term.prompt_secret("API key: ")?;
            store.save(&key)?;
            Ok(key)
        }
        Err(e) => Err(e),
    }
}

/// Present the standup list and read a 1-based selection. Accepts
/// exactly `1..=len`; anything else re-prompts, up to three attempts.
/// An empty line cancels immediately.
fn select_standup<T: Terminal>(
    term: &mut T,
    standups: &[Standup],
) -> Result<Selection, CliError> {
    if standups.is_empty() {
        term.say("There are no standups to report on.")?;
        return Ok(Selection::Cancelled);
    }

    term.say(&"Please select a standup to report on:".bold().to_string())?;
    for (index, standup) in standups.iter().enumerate() {
        term.say(&format!("  ({}) {}", index + 1, standup.name))?;
    }

    for _ in 0..SELECT_ATTEMPTS {
        let line = term.prompt("Enter the number of the standup (empty to cancel): ")?;
        let line = line.trim();
        if line.is_empty() {
            return Ok(Selection::Cancelled);
        }

        match line.parse::<usize>() {
            Ok(n) if (1..=standups.len()).contains(&n) => {
                let standup = &standups[n - 1];
                term.say(&format!("Starting {}", standup.name.italic()))?;
                term.say(&format!("{}/w/{}", DASHBOARD_URL, standup.id))?;
                return Ok(Selection::Chosen(n - 1));
            }
            _ => {
                term.say(&format!(
                    "Invalid selection: enter a number between 1 and {}.",
                    standups.len()
                ))?;
            }
        }
    }

    Ok(Selection::Cancelled)
}

/// Print recent commit subjects of the working directory as composition
/// hints. Not being in a repository is the common case and is silent.
fn suggest_commits<T: Terminal>(term: &mut T) -> Result<(), CliError> {
    let commits = git::recent_commits(Path::new("."), COMMIT_SUGGESTIONS);
    if commits.is_empty() {
        return Ok(());
    }

    term.say("Recent commits (for reference):")?;
    for commit in &commits {
        term.say(&format!("  {} {}", commit.short_hash(), commit.subject))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keystore::test_support::MemoryStore;
    use crate::terminal::test_support::ScriptedTerminal;

    fn standup(id: i64, name: &str) -> Standup {
        Standup {
            id,
            name: name.to_string(),
            questions: Vec::new(),
        }
    }

    #[test]
    fn test_selection_accepts_first_ordinal() {
        let mut term = ScriptedTerminal::new(&["1"]);
        let standups = vec![standup(1, "Daily Standup")];

        let selection = select_standup(&mut term, &standups).unwrap();

        assert!(matches!(selection, Selection::Chosen(0)));
        assert!(term.output.contains("(1) Daily Standup"));
        assert!(term.output.contains("/w/1"));
    }

    #[test]
    fn test_selection_zero_reprompts_instead_of_wrapping() {
        // "0" is not ordinal 1; it must never reach index -1
        let mut term = ScriptedTerminal::new(&["0", "1"]);
        let standups = vec![standup(1, "Daily Standup")];

        let selection = select_standup(&mut term, &standups).unwrap();

        assert!(matches!(selection, Selection::Chosen(0)));
        assert_eq!(term.reads, 2);
        assert!(term.output.contains("between 1 and 1"));
    }

    #[test]
    fn test_selection_out_of_range_gives_up_after_attempts() {
        let mut term = ScriptedTerminal::new(&["100", "100", "100"]);
        let standups = vec![standup(1, "Daily Standup")];

        let selection = select_standup(&mut term, &standups).unwrap();

        assert!(matches!(selection, Selection::Cancelled));
        assert_eq!(term.reads, 3);
        assert!(term.output.contains("between 1 and 1"));
    }

    #[test]
    fn test_selection_empty_line_cancels() {
        let mut term = ScriptedTerminal::new(&[""]);
        let standups = vec![standup(1, "Daily Standup"), standup(2, "Retro")];

        let selection = select_standup(&mut term, &standups).unwrap();

        assert!(matches!(selection, Selection::Cancelled));
        assert_eq!(term.reads, 1);
    }

    #[test]
    fn test_selection_with_no_standups_cancels() {
        let mut term = ScriptedTerminal::new(&[]);

        let selection = select_standup(&mut term, &[]).unwrap();

        assert!(matches!(selection, Selection::Cancelled));
        assert!(term.output.contains("no standups"));
    }

    #[test]
    fn test_acquire_api_key_enrolls_when_missing() {
        let store = MemoryStore::empty();
        let mut term = ScriptedTerminal::new(&["sekrit"]);

        let key = acquire_api_key(&store, &mut term).unwrap();

        assert_eq!(key, "sekrit");
        assert_eq!(store.stored().as_deref(), Some("sekrit"));
        assert!(term.output.contains("API key: "));
        assert!(term.output.contains("api-webhooks"));
    }

    #[test]
    fn test_acquire_api_key_uses_stored_key_without_prompting() {
        let store = MemoryStore::with_secret("stored-key");
        let mut term = ScriptedTerminal::new(&[]);

        let key = acquire_api_key(&store, &mut term).unwrap();

        assert_eq!(key, "stored-key");
        assert_eq!(term.reads, 0);
    }

    const LISTING: &str = r#"[
        {"id": 1, "name": "Daily", "questions": [
            {"id": 1, "text": "Q", "color": "3498db", "answer_type": "text",
             "answer_choices": []}
        ]}
    ]"#;

    async fn client_for(server: &mockito::ServerGuard) -> StandupClient {
        StandupClient::new().unwrap().with_base_url(server.url())
    }

    #[tokio::test]
    async fn test_full_run_with_enrollment() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/standups")
            .match_header("authorization", "Bearer sekrit")
            .with_status(200)
            .with_body(LISTING)
            .create_async()
            .await;
        let submit = server
            .mock("POST", "/v1/reports")
            .match_header("authorization", "Bearer sekrit")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "standup_id": 1,
                "answers": {"1": {"text": "ok"}}
            })))
            .with_status(200)
            .with_body(r#"{"done_at": 1700000000, "channel": "daily"}"#)
            .create_async()
            .await;

        let store = MemoryStore::empty();
        // API key, selection, one answer line, end of answer
        let mut term = ScriptedTerminal::new(&["sekrit", "1", "ok", ""]);

        let outcome = run_report(&store, &mut term, client_for(&server).await)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            RunOutcome::Submitted {
                channel: "daily".to_string(),
                done_at: 1700000000
            }
        );
        assert_eq!(store.stored().as_deref(), Some("sekrit"));
        assert!(term.output.contains("#daily"));
        submit.assert_async().await;
    }

    #[tokio::test]
    async fn test_unsaved_report_is_a_normal_outcome() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/standups")
            .with_status(200)
            .with_body(LISTING)
            .create_async()
            .await;
        server
            .mock("POST", "/v1/reports")
            .with_status(200)
            .with_body(r#"{"done_at": 0, "channel": "daily"}"#)
            .create_async()
            .await;

        let store = MemoryStore::with_secret("sekrit");
        let mut term = ScriptedTerminal::new(&["1", "ok", ""]);

        let outcome = run_report(&store, &mut term, client_for(&server).await)
            .await
            .unwrap();

        assert_eq!(outcome, RunOutcome::NotSaved);
        assert!(term.output.contains("could not be saved"));
    }

    #[tokio::test]
    async fn test_cancelled_selection_skips_submission() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/standups")
            .with_status(200)
            .with_body(LISTING)
            .create_async()
            .await;
        let submit = server
            .mock("POST", "/v1/reports")
            .expect(0)
            .create_async()
            .await;

        let store = MemoryStore::with_secret("sekrit");
        let mut term = ScriptedTerminal::new(&[""]);

        let outcome = run_report(&store, &mut term, client_for(&server).await)
            .await
            .unwrap();

        assert_eq!(outcome, RunOutcome::Cancelled);
        assert!(term.output.contains("No standup selected."));
        submit.assert_async().await;
    }

    #[tokio::test]
    async fn test_service_failure_is_presented_once() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/standups")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let store = MemoryStore::with_secret("sekrit");
        let mut term = ScriptedTerminal::new(&[]);

        let err = run_report(&store, &mut term, client_for(&server).await)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CliError::Standup(StandupError::ServiceUnavailable { .. })
        ));
        assert!(term.output.contains("An error occurred:"));
    }
}
