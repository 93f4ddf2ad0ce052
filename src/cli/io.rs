use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::cli::core::{CliMode, CommandError};
use crate::cli::output::{self, OutputPreferences};
use crate::config::Config;
use crate::ledger::{Notification, NotificationKind};

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning message via the standard CLI output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error message via the standard CLI output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success message via the standard CLI output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Shows a ledger notification as a success or error line.
pub fn print_notification(note: &Notification) {
    match note.kind {
        NotificationKind::Success => print_success(&note.message),
        NotificationKind::Failure => print_error(&note.message),
    }
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Applies output-related configuration. Scripted sessions always print
/// plain text.
pub fn apply_config(config: &Config, mode: CliMode) {
    output::set_preferences(OutputPreferences {
        color_enabled: config.ui_color_enabled && mode == CliMode::Interactive,
    });
}
