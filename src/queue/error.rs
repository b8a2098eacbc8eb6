use thiserror::Error;

/// Expected outcomes of queue operations that are not a success
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("max queue size of {capacity} has been reached")]
    CapacityExceeded { capacity: usize },
    #[error("the queue is empty")]
    Empty,
    #[error("queue capacity must be at least 1")]
    InvalidCapacity,
}
