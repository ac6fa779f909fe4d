/// Assistants client — the single point of entry for all OpenAI Assistants
/// API calls in the Career Finder service.
///
/// ARCHITECTURAL RULE: No other module may call the OpenAI API directly.
/// All assistant interactions MUST go through this module.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

const OPENAI_API_URL: &str = "https://api.openai.com/v1";
/// The Assistants API is gated behind a beta header.
const OPENAI_BETA: &str = "assistants=v2";
const MAX_RETRIES: u32 = 3;
/// Messages fetched per list page (the API maximum).
const MESSAGE_PAGE_LIMIT: usize = 100;
const POLL_INTERVAL: Duration = Duration::from_millis(1000);
/// Hard ceiling on one run's queued + in_progress time.
const POLL_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("Run {run_id} did not reach a terminal status within {timeout_secs}s")]
    PollTimeout { run_id: String, timeout_secs: u64 },
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

/// Opaque handle to a server-side conversation thread.
/// One is created per report session and never deleted remotely.
#[derive(Debug, Clone, Deserialize)]
pub struct ThreadHandle {
    pub id: String,
}

/// Terminal and transient statuses a run moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Queued,
    InProgress,
    RequiresAction,
    Cancelling,
    Cancelled,
    Failed,
    Completed,
    Expired,
    Incomplete,
}

impl RunStatus {
    /// Whether the run will make no further progress. `cancelling` is still
    /// in flight — the poll keeps going until `cancelled` lands.
    /// `requires_action` counts as terminal here: the report assistant never
    /// registers tools, so a tool-call request can only be abandoned.
    pub fn is_terminal(self) -> bool {
        !matches!(
            self,
            RunStatus::Queued | RunStatus::InProgress | RunStatus::Cancelling
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunError {
    pub code: String,
    pub message: String,
}

/// One request/poll cycle against the assistant, bound to a thread.
#[derive(Debug, Clone, Deserialize)]
pub struct Run {
    pub id: String,
    pub thread_id: String,
    pub status: RunStatus,
    pub last_error: Option<RunError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThreadMessage {
    pub role: String,
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<TextContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextContent {
    pub value: String,
}

impl ThreadMessage {
    /// Extracts the text of the first text block, if any.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_ref())
            .map(|t| t.value.as_str())
    }
}

/// One page of a thread's message list. Long sessions (one user message and
/// at least one reply per cycle) overflow a single page, so the cursor
/// fields drive pagination.
#[derive(Debug, Deserialize)]
struct MessageList {
    data: Vec<ThreadMessage>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    last_id: Option<String>,
}

/// Path for one message page, resuming after the given cursor.
fn message_page_path(thread_id: &str, after: Option<&str>) -> String {
    match after {
        Some(cursor) => {
            format!("/threads/{thread_id}/messages?order=asc&limit={MESSAGE_PAGE_LIMIT}&after={cursor}")
        }
        None => format!("/threads/{thread_id}/messages?order=asc&limit={MESSAGE_PAGE_LIMIT}"),
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client seam
// ────────────────────────────────────────────────────────────────────────────

/// The operations the report orchestrator needs from the assistant service.
/// A trait seam so tests can script runs without a network.
#[async_trait]
pub trait CareerAssistant: Send + Sync {
    async fn create_thread(&self) -> Result<ThreadHandle, AssistantError>;

    async fn post_message(&self, thread_id: &str, content: &str) -> Result<(), AssistantError>;

    /// Starts a run and polls it until a terminal status is observed.
    async fn run_to_completion(
        &self,
        thread_id: &str,
        assistant_id: &str,
        additional_instructions: &str,
    ) -> Result<Run, AssistantError>;

    /// All messages on the thread in chronological order.
    async fn list_messages(&self, thread_id: &str) -> Result<Vec<ThreadMessage>, AssistantError>;
}

/// The production client. Wraps the Assistants HTTP API with retry logic
/// and the run poll loop.
#[derive(Clone)]
pub struct AssistantClient {
    client: Client,
    api_key: String,
}

impl AssistantClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Sends one API request, retrying on 429 and 5xx with exponential backoff.
    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<T, AssistantError> {
        let url = format!("{OPENAI_API_URL}{path}");
        let mut last_error: Option<AssistantError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Assistant call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let mut request = self
                .client
                .request(method.clone(), &url)
                .bearer_auth(&self.api_key)
                .header("OpenAI-Beta", OPENAI_BETA);
            if let Some(body) = body {
                request = request.json(body);
            }

            let response = match request.send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(AssistantError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Assistant API returned {}: {}", status, body);
                last_error = Some(AssistantError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                // Try to parse the structured error message
                let message = serde_json::from_str::<ApiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(AssistantError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            return Ok(response.json().await?);
        }

        Err(last_error.unwrap_or(AssistantError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl CareerAssistant for AssistantClient {
    async fn create_thread(&self) -> Result<ThreadHandle, AssistantError> {
        let thread: ThreadHandle = self
            .request_json(Method::POST, "/threads", Some(&json!({})))
            .await?;
        debug!("Created thread {}", thread.id);
        Ok(thread)
    }

    async fn post_message(&self, thread_id: &str, content: &str) -> Result<(), AssistantError> {
        let body = json!({ "role": "user", "content": content });
        let _: serde_json::Value = self
            .request_json(Method::POST, &format!("/threads/{thread_id}/messages"), Some(&body))
            .await?;
        Ok(())
    }

    async fn run_to_completion(
        &self,
        thread_id: &str,
        assistant_id: &str,
        additional_instructions: &str,
    ) -> Result<Run, AssistantError> {
        let body = json!({
            "assistant_id": assistant_id,
            "additional_instructions": additional_instructions,
        });
        let mut run: Run = self
            .request_json(Method::POST, &format!("/threads/{thread_id}/runs"), Some(&body))
            .await?;

        let started = tokio::time::Instant::now();
        while !run.status.is_terminal() {
            if started.elapsed() > POLL_TIMEOUT {
                return Err(AssistantError::PollTimeout {
                    run_id: run.id,
                    timeout_secs: POLL_TIMEOUT.as_secs(),
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
            run = self
                .request_json(
                    Method::GET,
                    &format!("/threads/{}/runs/{}", thread_id, run.id),
                    None,
                )
                .await?;
        }

        debug!(
            "Run {} on thread {} settled with status {:?}",
            run.id, run.thread_id, run.status
        );
        Ok(run)
    }

    async fn list_messages(&self, thread_id: &str) -> Result<Vec<ThreadMessage>, AssistantError> {
        let mut messages = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let page: MessageList = self
                .request_json(Method::GET, &message_page_path(thread_id, after.as_deref()), None)
                .await?;
            messages.extend(page.data);

            // Every completed cycle rebuilds the suggestion sequence from
            // this list, so it must cover the whole thread.
            match (page.has_more, page.last_id) {
                (true, Some(cursor)) => after = Some(cursor),
                _ => break,
            }
        }

        Ok(messages)
    }
}
