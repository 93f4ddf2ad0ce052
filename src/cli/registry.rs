use std::collections::HashMap;

use strsim::levenshtein;

use crate::cli::core::{CommandResult, ShellContext};

/// Typos further than this from every command get no suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// Help sections, listed in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommandGroup {
    General,
    Calendar,
    Entry,
    Records,
    Reports,
    Sharing,
    Settings,
}

impl CommandGroup {
    pub fn title(self) -> &'static str {
        match self {
            CommandGroup::General => "General",
            CommandGroup::Calendar => "Calendar",
            CommandGroup::Entry => "Entry form",
            CommandGroup::Records => "Records",
            CommandGroup::Reports => "Charts & export",
            CommandGroup::Sharing => "Sharing",
            CommandGroup::Settings => "Settings",
        }
    }
}

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
    pub group: CommandGroup,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
            group: CommandGroup::General,
        }
    }
}

/// Shell commands keyed by lowercase name. Iteration follows registration
/// order; re-registering a name replaces the entry in place.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
    index: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        match self.index.get(entry.name) {
            Some(&slot) => self.entries[slot] = entry,
            None => {
                self.index.insert(entry.name, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Registers every entry under `group`.
    pub fn register_group(&mut self, group: CommandGroup, entries: Vec<CommandEntry>) {
        for mut entry in entries {
            entry.group = group;
            self.register(entry);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.get(name).map(|entry| entry.handler)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> + '_ {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    /// Entries bucketed by help section, sections in [`CommandGroup`] order.
    pub fn grouped(&self) -> Vec<(CommandGroup, Vec<&CommandEntry>)> {
        let mut groups: Vec<(CommandGroup, Vec<&CommandEntry>)> = Vec::new();
        for entry in &self.entries {
            match groups.iter_mut().find(|(group, _)| *group == entry.group) {
                Some((_, members)) => members.push(entry),
                None => groups.push((entry.group, vec![entry])),
            }
        }
        groups.sort_by_key(|(group, _)| *group);
        groups
    }

    /// Nearest command name to a mistyped `input`, if any is close enough.
    /// Ties go to the earlier registration.
    pub fn closest(&self, input: &str) -> Option<&'static str> {
        let input = input.to_lowercase();
        self.names()
            .map(|name| (levenshtein(name, &input), name))
            .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name)
    }
}
