//! Turns queue results into user-facing replies

pub mod embed;

pub use embed::{Color, Embed, EmbedField, Reply};

use crate::queue::{EnqueueReceipt, QueueEntry, RankedEntry};

/// Appended when the show list is cut to fit the display limit
pub const TRUNCATION_SUFFIX: &str = "\n... (truncated)";

/// Sent for invocations that could not be turned into a command
pub const COMMAND_ERROR_MESSAGE: &str = "An error occurred while processing the command.";

#[derive(Debug, Clone)]
pub struct Presenter {
    list_char_limit: usize,
}

impl Presenter {
    pub fn new(list_char_limit: usize) -> Self {
        Self { list_char_limit }
    }

    pub fn added(&self, item: &str, receipt: EnqueueReceipt) -> Reply {
        Reply::embed(
            Embed::new("✅ Item Added", Color::Green)
                .description(format!("Added \"{}\" to the queue", item))
                .field("Queue Position", receipt.position.to_string(), true)
                .field("Total Items", receipt.total.to_string(), true),
        )
    }

    pub fn queue_full(&self, capacity: usize) -> Reply {
        Reply::embed(
            Embed::new("❌ Item Not Added", Color::Red)
                .description(format!("Max queue size of {} has been reached", capacity)),
        )
    }

    pub fn show_list(&self, entries: &[RankedEntry]) -> Reply {
        if entries.is_empty() {
            return Reply::embed(
                Embed::new("📋 Queue Status", Color::Blue).description("The queue is empty"),
            );
        }

        let lines: Vec<String> = entries
            .iter()
            .map(|ranked| {
                format!(
                    "{}. Show: {}  Submitted by {}",
                    ranked.rank,
                    ranked.entry.content(),
                    ranked.entry.submitted_by()
                )
            })
            .collect();
        let items = truncate_lines(&lines.join("\n"), self.list_char_limit);

        Reply::embed(
            Embed::new("📋 Current Queue", Color::Blue)
                .field("Items", items, false)
                .field("Total Items", entries.len().to_string(), true),
        )
    }

    pub fn next_show(&self, entry: &QueueEntry) -> Reply {
        Reply::embed(Embed::new("🎯 Next Show", Color::Green).description(describe(entry)))
    }

    pub fn removed_show(&self, entry: &QueueEntry) -> Reply {
        Reply::embed(Embed::new("🎯 Next Removed Show", Color::Green).description(describe(entry)))
    }

    pub fn cleared(&self, removed: usize) -> Reply {
        if removed == 0 {
            return self.queue_empty();
        }
        let noun = if removed == 1 { "show" } else { "shows" };
        Reply::embed(
            Embed::new("🎯 Cleared Show Queue", Color::Green)
                .description(format!("Removed {} {} from the queue", removed, noun)),
        )
    }

    pub fn queue_empty(&self) -> Reply {
        Reply::embed(Embed::new("❌ Show Queue Empty", Color::Red).description("The queue is empty"))
    }

    pub fn command_error(&self) -> Reply {
        Reply::ephemeral_message(COMMAND_ERROR_MESSAGE)
    }
}

fn describe(entry: &QueueEntry) -> String {
    format!("\"{}\", submitted by {}", entry.content(), entry.submitted_by())
}

/// Cut `text` to at most `limit` characters, keeping whole lines and marking the cut.
/// A first line longer than the budget is cut mid-line.
pub fn truncate_lines(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let suffix_len = TRUNCATION_SUFFIX.chars().count();
    if limit <= suffix_len {
        return text.chars().take(limit).collect();
    }
    let budget = limit - suffix_len;

    let mut kept = String::new();
    let mut used = 0;
    for line in text.lines() {
        let separator = usize::from(!kept.is_empty());
        let cost = separator + line.chars().count();
        if used + cost > budget {
            break;
        }
        if separator == 1 {
            kept.push('\n');
        }
        kept.push_str(line);
        used += cost;
    }

    if kept.is_empty() {
        kept = text.chars().take(budget).collect();
    }
    kept.push_str(TRUNCATION_SUFFIX);
    kept
}
