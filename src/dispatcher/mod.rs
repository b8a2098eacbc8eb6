//! Routes inbound slash commands to the queue and renders the outcome

pub mod command;

pub use command::{Command, CommandDefinition, CommandError, OptionDefinition};

use crate::presenter::{Presenter, Reply};
use crate::queue::{QueueError, SharedQueueManager};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{error, info, warn};

/// One slash-command invocation as delivered by the platform relay
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Invocation {
    pub command: String,
    /// Display name of the invoking user
    pub user: String,
    #[serde(default)]
    pub options: HashMap<String, String>,
}

impl Invocation {
    pub fn new(command: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            user: user.into(),
            options: HashMap::new(),
        }
    }

    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }
}

/// Runs exactly one queue operation per invocation
#[derive(Debug, Clone)]
pub struct Dispatcher {
    manager: SharedQueueManager,
    presenter: Presenter,
}

impl Dispatcher {
    pub fn new(manager: SharedQueueManager, presenter: Presenter) -> Self {
        Self { manager, presenter }
    }

    pub fn manager(&self) -> &SharedQueueManager {
        &self.manager
    }

    /// Parse and execute an invocation. Invalid invocations get the generic error reply.
    pub fn handle(&self, invocation: &Invocation) -> Reply {
        match Command::parse(&invocation.command, &invocation.options) {
            Ok(command) => self.execute(&command, &invocation.user),
            Err(e) => {
                warn!("Rejected command from {}: {}", invocation.user, e);
                self.presenter.command_error()
            }
        }
    }

    pub fn execute(&self, command: &Command, user: &str) -> Reply {
        match command {
            Command::AddShow { item } => {
                info!("Adding {} to queue. User {}", item, user);
                match self.manager.enqueue(item.as_str(), user) {
                    Ok(receipt) => {
                        info!("Successfully added {} to queue. User {}", item, user);
                        self.presenter.added(item, receipt)
                    }
                    Err(e) => {
                        info!("Failed to add {} to show queue: {}. User {}", item, e, user);
                        self.failure(e)
                    }
                }
            }
            Command::ListShows => self.presenter.show_list(&self.manager.list()),
            Command::NextShow => match self.manager.peek() {
                Ok(entry) => {
                    info!("Looked at next show. User {}", user);
                    self.presenter.next_show(&entry)
                }
                Err(e) => self.failure(e),
            },
            Command::RemoveNextShow => match self.manager.dequeue() {
                Ok(entry) => {
                    info!(
                        "Removed show {} submitted by {}. User {}",
                        entry.content(),
                        entry.submitted_by(),
                        user
                    );
                    self.presenter.removed_show(&entry)
                }
                Err(e) => self.failure(e),
            },
            Command::ClearShowQueue => {
                let removed = self.manager.clear();
                info!("Cleared queue ({} removed). User {}", removed, user);
                self.presenter.cleared(removed)
            }
        }
    }

    fn failure(&self, err: QueueError) -> Reply {
        match err {
            QueueError::CapacityExceeded { capacity } => self.presenter.queue_full(capacity),
            QueueError::Empty => self.presenter.queue_empty(),
            QueueError::InvalidCapacity => {
                error!("Unexpected queue error: {}", err);
                self.presenter.command_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::Color;
    use crate::queue::create_shared_manager;

    fn dispatcher(capacity: usize) -> Dispatcher {
        Dispatcher::new(
            create_shared_manager(capacity).unwrap(),
            Presenter::new(1024),
        )
    }

    fn add(dispatcher: &Dispatcher, item: &str, user: &str) -> Reply {
        dispatcher.handle(&Invocation::new("add_show", user).with_option("item", item))
    }

    fn title(reply: &Reply) -> &str {
        &reply.embeds[0].title
    }

    #[test]
    fn test_add_show_records_submitter() {
        let dispatcher = dispatcher(4);
        let reply = add(&dispatcher, "Show A", "alice");

        assert_eq!(title(&reply), "✅ Item Added");
        assert_eq!(reply.embeds[0].field_value("Queue Position"), Some("1"));

        let head = dispatcher.manager().peek().unwrap();
        assert_eq!(head.content(), "Show A");
        assert_eq!(head.submitted_by(), "alice");
    }

    #[test]
    fn test_add_show_when_full() {
        let dispatcher = dispatcher(1);
        add(&dispatcher, "Show A", "alice");
        let reply = add(&dispatcher, "Show B", "bob");

        assert_eq!(title(&reply), "❌ Item Not Added");
        assert_eq!(reply.embeds[0].color, Color::Red);
        assert_eq!(
            reply.embeds[0].description.as_deref(),
            Some("Max queue size of 1 has been reached")
        );
        assert_eq!(dispatcher.manager().len(), 1);
    }

    #[test]
    fn test_blank_item_never_reaches_queue() {
        let dispatcher = dispatcher(4);
        let reply = add(&dispatcher, "  ", "alice");

        assert!(reply.ephemeral);
        assert!(dispatcher.manager().is_empty());
    }

    #[test]
    fn test_unknown_command_gets_error_reply() {
        let dispatcher = dispatcher(4);
        let reply = dispatcher.handle(&Invocation::new("dance", "alice"));

        assert!(reply.ephemeral);
        assert_eq!(
            reply.content.as_deref(),
            Some(crate::presenter::COMMAND_ERROR_MESSAGE)
        );
    }

    #[test]
    fn test_empty_queue_replies() {
        let dispatcher = dispatcher(4);

        for name in ["next_show", "remove_next_show", "clear_show_queue"] {
            let reply = dispatcher.handle(&Invocation::new(name, "alice"));
            assert_eq!(title(&reply), "❌ Show Queue Empty", "command {}", name);
        }

        let reply = dispatcher.handle(&Invocation::new("list_shows", "alice"));
        assert_eq!(title(&reply), "📋 Queue Status");
    }

    #[test]
    fn test_next_then_remove() {
        let dispatcher = dispatcher(4);
        add(&dispatcher, "Show A", "alice");
        add(&dispatcher, "Show B", "bob");

        let next = dispatcher.handle(&Invocation::new("next_show", "carol"));
        assert_eq!(
            next.embeds[0].description.as_deref(),
            Some("\"Show A\", submitted by alice")
        );
        assert_eq!(dispatcher.manager().len(), 2);

        let removed = dispatcher.handle(&Invocation::new("remove_next_show", "carol"));
        assert_eq!(title(&removed), "🎯 Next Removed Show");
        assert_eq!(removed.embeds[0].description, next.embeds[0].description);
        assert_eq!(dispatcher.manager().peek().unwrap().content(), "Show B");
    }

    #[test]
    fn test_list_and_clear() {
        let dispatcher = dispatcher(4);
        add(&dispatcher, "Show A", "alice");
        add(&dispatcher, "Show B", "bob");

        let list = dispatcher.handle(&Invocation::new("list_shows", "carol"));
        assert_eq!(title(&list), "📋 Current Queue");
        assert_eq!(list.embeds[0].field_value("Total Items"), Some("2"));

        let cleared = dispatcher.handle(&Invocation::new("clear_show_queue", "carol"));
        assert_eq!(title(&cleared), "🎯 Cleared Show Queue");
        assert!(dispatcher.manager().is_empty());
    }

    #[test]
    fn test_invocation_deserialization() {
        let json = r#"{"command": "add_show", "user": "alice", "options": {"item": "Show A"}}"#;
        let invocation: Invocation = serde_json::from_str(json).unwrap();
        assert_eq!(
            invocation,
            Invocation::new("add_show", "alice").with_option("item", "Show A")
        );

        let json = r#"{"command": "list_shows", "user": "bob"}"#;
        let invocation: Invocation = serde_json::from_str(json).unwrap();
        assert!(invocation.options.is_empty());
    }
}
