//! Queue manager for the shared show queue with event notifications

use super::entry::{EnqueueReceipt, QueueEntry, RankedEntry};
use super::error::QueueError;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: usize = 128;

/// Mutation notifications, delivered in the order the mutations happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueEvent {
    Enqueued { entry: QueueEntry, position: usize },
    Dequeued { entry: QueueEntry },
    Cleared { removed: usize },
}

#[derive(Debug, Default)]
struct QueueState {
    entries: VecDeque<QueueEntry>,
    listeners: Vec<UnboundedSender<QueueEvent>>,
}

impl QueueState {
    fn notify(&mut self, event: QueueEvent) {
        // Remove disconnected listeners
        self.listeners.retain(|sender| sender.send(event.clone()).is_ok());
    }
}

/// Bounded FIFO of shows. Every operation is one critical section over the
/// entries, so callers on any worker thread observe a consistent queue.
#[derive(Debug)]
pub struct QueueManager {
    capacity: usize,
    state: Mutex<QueueState>,
}

impl Default for QueueManager {
    fn default() -> Self {
        Self::with_checked_capacity(DEFAULT_CAPACITY)
    }
}

impl QueueManager {
    /// Create an empty queue holding at most `capacity` entries
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::InvalidCapacity);
        }
        Ok(Self::with_checked_capacity(capacity))
    }

    fn with_checked_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(QueueState::default()),
        }
    }

    // A panic inside a critical section cannot leave the deque half-updated,
    // so a poisoned lock still guards valid state.
    fn state(&self) -> MutexGuard<'_, QueueState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.state().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().entries.is_empty()
    }

    /// Append a show to the tail, or reject it when the queue is full
    pub fn enqueue(
        &self,
        content: impl Into<String>,
        submitted_by: impl Into<String>,
    ) -> Result<EnqueueReceipt, QueueError> {
        let mut state = self.state();
        if state.entries.len() >= self.capacity {
            debug!("Queue full at capacity {}", self.capacity);
            return Err(QueueError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let entry = QueueEntry::new(content, submitted_by);
        debug!(
            "Enqueuing show from {}: {}",
            entry.submitted_by(),
            entry.content()
        );
        state.entries.push_back(entry.clone());

        let total = state.entries.len();
        debug_assert!(
            total <= self.capacity,
            "queue length {} exceeds capacity {}",
            total,
            self.capacity
        );

        state.notify(QueueEvent::Enqueued {
            entry,
            position: total,
        });

        Ok(EnqueueReceipt {
            position: total,
            total,
        })
    }

    /// Head of the queue without removing it
    pub fn peek(&self) -> Result<QueueEntry, QueueError> {
        self.state()
            .entries
            .front()
            .cloned()
            .ok_or(QueueError::Empty)
    }

    /// Every entry in arrival order with its rank
    pub fn list(&self) -> Vec<RankedEntry> {
        self.state()
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| RankedEntry {
                rank: index + 1,
                entry: entry.clone(),
            })
            .collect()
    }

    /// Remove and return the head of the queue
    pub fn dequeue(&self) -> Result<QueueEntry, QueueError> {
        let mut state = self.state();
        let entry = state.entries.pop_front().ok_or(QueueError::Empty)?;
        debug!("Dequeued show: {}", entry.content());

        state.notify(QueueEvent::Dequeued {
            entry: entry.clone(),
        });

        Ok(entry)
    }

    /// Drop every entry, returning how many were removed
    pub fn clear(&self) -> usize {
        let mut state = self.state();
        let removed = state.entries.len();
        state.entries.clear();

        if removed > 0 {
            debug!("Cleared {} shows", removed);
            state.notify(QueueEvent::Cleared { removed });
        }

        removed
    }

    /// Subscribe to queue mutations
    pub fn subscribe(&self) -> UnboundedReceiver<QueueEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.state().listeners.push(tx);
        rx
    }
}
