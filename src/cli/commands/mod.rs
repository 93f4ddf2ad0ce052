pub mod calendar;
pub mod config;
pub mod entry;
pub mod records;
pub mod report;
pub mod share;
pub mod system;

use crate::cli::core::CommandError;
use crate::cli::registry::{CommandGroup, CommandRegistry};

pub fn register_all(registry: &mut CommandRegistry) {
    registry.register_group(CommandGroup::General, system::definitions());
    registry.register_group(CommandGroup::Calendar, calendar::definitions());
    registry.register_group(CommandGroup::Entry, entry::definitions());
    registry.register_group(CommandGroup::Records, records::definitions());
    registry.register_group(CommandGroup::Reports, report::definitions());
    registry.register_group(CommandGroup::Sharing, share::definitions());
    registry.register_group(CommandGroup::Settings, config::definitions());
}

/// Returns the first positional argument or a usage error.
pub(crate) fn required_arg<'a>(args: &[&'a str], usage: &str) -> Result<&'a str, CommandError> {
    args.iter()
        .copied()
        .find(|arg| !arg.starts_with("--"))
        .ok_or_else(|| CommandError::InvalidArguments(format!("usage: {usage}")))
}

pub(crate) fn has_flag(args: &[&str], flag: &str) -> bool {
    args.iter().any(|arg| *arg == flag)
}
