pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod presenter;
pub mod queue;
pub mod web_server;

// Public API
pub use config::Config;
pub use dispatcher::{Command, Dispatcher, Invocation};
pub use presenter::{Presenter, Reply};
pub use queue::{
    create_shared_manager, EnqueueReceipt, QueueEntry, QueueError, QueueEvent, QueueManager,
    RankedEntry, SharedQueueManager,
};
pub use web_server::WebServer;
