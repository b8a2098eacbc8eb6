//! Values handed out by the queue manager

use serde::Serialize;

/// One submitted show and the user who submitted it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueEntry {
    content: String,
    submitted_by: String,
}

impl QueueEntry {
    pub fn new(content: impl Into<String>, submitted_by: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            submitted_by: submitted_by.into(),
        }
    }

    /// Free text as submitted
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Display name of the submitter
    pub fn submitted_by(&self) -> &str {
        &self.submitted_by
    }
}

/// Where an accepted entry landed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnqueueReceipt {
    /// 1-indexed position of the new entry (always the tail)
    pub position: usize,
    /// Queue length after the insert
    pub total: usize,
}

/// Entry paired with its current 1-indexed rank (head = 1)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub entry: QueueEntry,
}
