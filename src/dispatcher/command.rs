//! Slash commands understood by the bot

use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

pub const ADD_SHOW: &str = "add_show";
pub const LIST_SHOWS: &str = "list_shows";
pub const NEXT_SHOW: &str = "next_show";
pub const REMOVE_NEXT_SHOW: &str = "remove_next_show";
pub const CLEAR_SHOW_QUEUE: &str = "clear_show_queue";

/// Option carrying the show text for `add_show`
pub const ITEM_OPTION: &str = "item";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddShow { item: String },
    ListShows,
    NextShow,
    RemoveNextShow,
    ClearShowQueue,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("command {command} requires option '{option}'")]
    MissingOption {
        command: &'static str,
        option: &'static str,
    },
    #[error("option '{option}' of command {command} must not be blank")]
    BlankOption {
        command: &'static str,
        option: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// Registration entry for one slash command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub options: Vec<OptionDefinition>,
}

impl Command {
    /// Build a command from its name and raw options. A leading `/` is ignored.
    pub fn parse(name: &str, options: &HashMap<String, String>) -> Result<Self, CommandError> {
        let name = name.trim();
        let name = name.strip_prefix('/').unwrap_or(name);

        match name {
            ADD_SHOW => {
                let item = options
                    .get(ITEM_OPTION)
                    .ok_or(CommandError::MissingOption {
                        command: ADD_SHOW,
                        option: ITEM_OPTION,
                    })?;
                if item.trim().is_empty() {
                    return Err(CommandError::BlankOption {
                        command: ADD_SHOW,
                        option: ITEM_OPTION,
                    });
                }
                Ok(Command::AddShow { item: item.clone() })
            }
            LIST_SHOWS => Ok(Command::ListShows),
            NEXT_SHOW => Ok(Command::NextShow),
            REMOVE_NEXT_SHOW => Ok(Command::RemoveNextShow),
            CLEAR_SHOW_QUEUE => Ok(Command::ClearShowQueue),
            _ => Err(CommandError::UnknownCommand(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::AddShow { .. } => ADD_SHOW,
            Command::ListShows => LIST_SHOWS,
            Command::NextShow => NEXT_SHOW,
            Command::RemoveNextShow => REMOVE_NEXT_SHOW,
            Command::ClearShowQueue => CLEAR_SHOW_QUEUE,
        }
    }

    /// Commands to register with the chat platform
    pub fn definitions() -> Vec<CommandDefinition> {
        vec![
            CommandDefinition {
                name: ADD_SHOW,
                description: "Add show to show queue",
                options: vec![OptionDefinition {
                    name: ITEM_OPTION,
                    description: "Show to add",
                    required: true,
                }],
            },
            CommandDefinition {
                name: LIST_SHOWS,
                description: "List all the shows in the show queue",
                options: Vec::new(),
            },
            CommandDefinition {
                name: NEXT_SHOW,
                description: "Display the first item in the show queue",
                options: Vec::new(),
            },
            CommandDefinition {
                name: REMOVE_NEXT_SHOW,
                description: "Remove the first item in the show queue",
                options: Vec::new(),
            },
            CommandDefinition {
                name: CLEAR_SHOW_QUEUE,
                description: "Remove every show from the show queue",
                options: Vec::new(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_add_show() {
        let command = Command::parse("add_show", &options(&[("item", "Show A")])).unwrap();
        assert_eq!(
            command,
            Command::AddShow {
                item: "Show A".to_string()
            }
        );
        assert_eq!(command.name(), ADD_SHOW);
    }

    #[test]
    fn test_parse_add_show_keeps_item_verbatim() {
        let command = Command::parse("add_show", &options(&[("item", "  Spaced  ")])).unwrap();
        assert_eq!(
            command,
            Command::AddShow {
                item: "  Spaced  ".to_string()
            }
        );
    }

    #[test]
    fn test_parse_add_show_requires_item() {
        assert_eq!(
            Command::parse("add_show", &HashMap::new()),
            Err(CommandError::MissingOption {
                command: ADD_SHOW,
                option: ITEM_OPTION,
            })
        );
        assert_eq!(
            Command::parse("add_show", &options(&[("item", "   ")])),
            Err(CommandError::BlankOption {
                command: ADD_SHOW,
                option: ITEM_OPTION,
            })
        );
    }

    #[test]
    fn test_parse_commands_without_options() {
        let none = HashMap::new();
        assert_eq!(Command::parse("list_shows", &none), Ok(Command::ListShows));
        assert_eq!(Command::parse("next_show", &none), Ok(Command::NextShow));
        assert_eq!(
            Command::parse("remove_next_show", &none),
            Ok(Command::RemoveNextShow)
        );
        assert_eq!(
            Command::parse("clear_show_queue", &none),
            Ok(Command::ClearShowQueue)
        );
    }

    #[test]
    fn test_parse_accepts_slash_prefix() {
        assert_eq!(
            Command::parse(" /next_show ", &HashMap::new()),
            Ok(Command::NextShow)
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = Command::parse("skip_show", &HashMap::new()).unwrap_err();
        assert_eq!(err, CommandError::UnknownCommand("skip_show".to_string()));
        assert_eq!(err.to_string(), "unknown command: skip_show");
    }

    #[test]
    fn test_definitions_cover_every_command() {
        let definitions = Command::definitions();
        let names: Vec<&str> = definitions.iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec![
                ADD_SHOW,
                LIST_SHOWS,
                NEXT_SHOW,
                REMOVE_NEXT_SHOW,
                CLEAR_SHOW_QUEUE
            ]
        );

        let add = &definitions[0];
        assert_eq!(add.options.len(), 1);
        assert!(add.options[0].required);
        assert!(definitions[1..].iter().all(|d| d.options.is_empty()));
    }
}
