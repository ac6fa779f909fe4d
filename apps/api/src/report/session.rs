//! In-memory registry of running report sessions.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{watch, RwLock};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::assistant::CareerAssistant;
use crate::report::orchestrator::{generate_report, ReportSnapshot};

/// One live (or settled) report-generation session.
#[derive(Clone)]
pub struct ReportSession {
    pub rx: watch::Receiver<ReportSnapshot>,
    pub cancel: CancellationToken,
    pub started_at: DateTime<Utc>,
}

/// Registry shared through `AppState`. Sessions stay until deleted so the
/// client can keep polling a finished report.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, ReportSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns the orchestration loop for one quiz submission and registers
    /// the session. The task owns its snapshot sender; handlers only ever
    /// read through the receiver.
    pub async fn spawn(
        &self,
        assistant: Arc<dyn CareerAssistant>,
        assistant_id: String,
        results: String,
        target_count: usize,
    ) -> Uuid {
        let id = Uuid::new_v4();
        let (tx, rx) = watch::channel(ReportSnapshot::new(target_count));
        let cancel = CancellationToken::new();

        let session = ReportSession {
            rx,
            cancel: cancel.clone(),
            started_at: Utc::now(),
        };
        self.sessions.write().await.insert(id, session);

        tokio::spawn(async move {
            generate_report(
                assistant.as_ref(),
                &assistant_id,
                &results,
                target_count,
                &tx,
                &cancel,
            )
            .await;
        });

        id
    }

    pub async fn get(&self, id: Uuid) -> Option<ReportSession> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Cancels in-flight work and forgets the session.
    /// Returns false when the id is unknown.
    pub async fn cancel_and_remove(&self, id: Uuid) -> bool {
        match self.sessions.write().await.remove(&id) {
            Some(session) => {
                session.cancel.cancel();
                true
            }
            None => false,
        }
    }
}
