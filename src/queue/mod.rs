//! Show queue shared by every command handler
//!
//! This module provides the bounded queue that backs the bot:
//! - One FIFO with a fixed capacity, rejecting inserts when full
//! - Submitter attribution on every entry
//! - Atomic operations safe to call from concurrent handlers
//! - Event notifications for mutation logging

pub mod entry;
pub mod error;
pub mod manager;

pub use entry::{EnqueueReceipt, QueueEntry, RankedEntry};
pub use error::QueueError;
pub use manager::{QueueEvent, QueueManager, DEFAULT_CAPACITY};

use std::sync::Arc;

/// Shared queue manager instance
pub type SharedQueueManager = Arc<QueueManager>;

/// Create a new shared queue manager
pub fn create_shared_manager(capacity: usize) -> Result<SharedQueueManager, QueueError> {
    Ok(Arc::new(QueueManager::new(capacity)?))
}
