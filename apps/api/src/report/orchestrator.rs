//! Report orchestration — drives the request/poll/collect cycles that
//! accumulate career suggestions for one quiz submission.
//!
//! Flow: create thread → post results + instructions → run to terminal →
//!       collect structured replies → publish snapshot, repeated once per
//!       requested suggestion on the same thread.
//!
//! Cycles are strictly sequential: the Assistants API allows one active run
//! per thread, so cycle k+1 never starts before cycle k settles. Failures
//! inside a cycle are logged and swallowed; the caller only ever observes a
//! shorter suggestion list.

use serde::Serialize;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::assistant::{CareerAssistant, RunStatus};
use crate::report::prompts::{build_initial_prompt, FOLLOW_UP_PROMPT, RUN_INSTRUCTIONS};
use crate::report::suggestion::{collect_suggestions, CareerSuggestion};

/// The UI-visible state of one report session, published after every cycle.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSnapshot {
    pub suggestions: Vec<CareerSuggestion>,
    pub target: usize,
    /// True until the first cycle settles, successfully or not. Lets the
    /// caller render the first result without waiting for the rest.
    pub loading: bool,
    /// True once every cycle has settled or the session was cancelled.
    pub done: bool,
}

impl ReportSnapshot {
    pub fn new(target: usize) -> Self {
        Self {
            suggestions: Vec::new(),
            target,
            loading: true,
            done: false,
        }
    }

    /// Slots still awaiting a suggestion. Zero once the session is done.
    pub fn pending(&self) -> usize {
        if self.done {
            0
        } else {
            self.target.saturating_sub(self.suggestions.len())
        }
    }
}

/// Runs the full report loop, publishing a snapshot through `tx` after every
/// cycle. Returns when all `target_count` cycles have settled or `cancel`
/// fires; no error escapes this function.
///
/// `results` is the exported quiz text; callers validate it is non-empty and
/// `target_count >= 1` before spawning.
pub async fn generate_report(
    assistant: &dyn CareerAssistant,
    assistant_id: &str,
    results: &str,
    target_count: usize,
    tx: &watch::Sender<ReportSnapshot>,
    cancel: &CancellationToken,
) {
    let thread = tokio::select! {
        _ = cancel.cancelled() => {
            finish(tx);
            return;
        }
        created = assistant.create_thread() => match created {
            Ok(thread) => thread,
            Err(e) => {
                // Without a thread no cycle can run; the caller sees an
                // empty, settled report.
                warn!("Thread creation failed, abandoning report: {e}");
                finish(tx);
                return;
            }
        },
    };

    info!(
        "Starting report session on thread {} ({} suggestions requested)",
        thread.id, target_count
    );

    for cycle in 0..target_count {
        let prompt = if cycle == 0 {
            build_initial_prompt(results)
        } else {
            FOLLOW_UP_PROMPT.to_string()
        };

        let cancelled = tokio::select! {
            _ = cancel.cancelled() => true,
            _ = run_cycle(assistant, assistant_id, &thread.id, &prompt, target_count, tx) => false,
        };

        if cycle == 0 {
            // One-shot: fires after the first cycle settles no matter how
            // it settled, independent of the remaining cycles.
            tx.send_modify(|s| s.loading = false);
        }

        if cancelled {
            info!("Report session on thread {} cancelled at cycle {cycle}", thread.id);
            break;
        }
    }

    finish(tx);
}

/// One cycle: post the prompt, run to terminal, and on completion republish
/// the sequence rebuilt from every structured reply on the thread. Any
/// failure is logged and leaves the published snapshot unchanged.
async fn run_cycle(
    assistant: &dyn CareerAssistant,
    assistant_id: &str,
    thread_id: &str,
    prompt: &str,
    target_count: usize,
    tx: &watch::Sender<ReportSnapshot>,
) {
    if let Err(e) = assistant.post_message(thread_id, prompt).await {
        warn!("Posting message failed, skipping cycle: {e}");
        return;
    }

    let run = match assistant
        .run_to_completion(thread_id, assistant_id, RUN_INSTRUCTIONS)
        .await
    {
        Ok(run) => run,
        Err(e) => {
            warn!("Run failed to settle, skipping cycle: {e}");
            return;
        }
    };

    if run.status != RunStatus::Completed {
        warn!("Run {} ended with status {:?}", run.id, run.status);
        if let Some(err) = &run.last_error {
            warn!("Run {} failure detail: {} — {}", run.id, err.code, err.message);
        }
        return;
    }

    let messages = match assistant.list_messages(thread_id).await {
        Ok(messages) => messages,
        Err(e) => {
            warn!("Listing messages failed, skipping cycle: {e}");
            return;
        }
    };

    let mut suggestions = collect_suggestions(&messages);
    // The sequence must never exceed the requested count, even if the
    // assistant volunteers extra structured replies in one turn.
    suggestions.truncate(target_count);

    info!(
        "Cycle settled: {}/{} suggestions collected",
        suggestions.len(),
        target_count
    );
    tx.send_modify(|s| s.suggestions = suggestions);
}

fn finish(tx: &watch::Sender<ReportSnapshot>) {
    tx.send_modify(|s| {
        s.loading = false;
        s.done = true;
    });
}
