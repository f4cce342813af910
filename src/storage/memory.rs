use serde_json::Value;
use tokio::sync::RwLock;

/// Process-wide, append-only record of accepted submissions.
///
/// Entries keep their arrival order: `append` takes the write lock, so the log
/// order is the order in which appends acquire it. The log is unbounded and is
/// never trimmed or rewritten.
///
/// Handlers receive the log as an `Arc<SubmissionLog>` through an `Extension`
/// layer; there is no module-level global.
pub struct SubmissionLog {
    entries: RwLock<Vec<Value>>,
}

impl SubmissionLog {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Appends one submission and returns the new log length.
    pub async fn append(&self, content: Value) -> usize {
        let mut entries = self.entries.write().await;
        entries.push(content);
        entries.len()
    }

    /// Returns a copy of the full log in arrival order.
    pub async fn snapshot(&self) -> Vec<Value> {
        self.entries.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for SubmissionLog {
    fn default() -> Self {
        Self::new()
    }
}
