//! Core CLI dispatch and shell context helpers.

use std::{env, io, path::PathBuf, sync::Arc};

use chrono::{NaiveDate, NaiveDateTime};
use dialoguer::theme::ColorfulTheme;

use crate::{
    clock::{Clock, FixedClock, SystemClock},
    config::{Config, ConfigManager},
    currency::{format_currency, table_label},
    errors::LedgerError,
    ledger::{record::parse_record_date, Ledger, Notification},
    storage::JsonFileStore,
    utils::paths::{self, ensure_dir},
};

use super::commands;
use super::io as cli_io;
use super::registry::{CommandEntry, CommandRegistry};

/// Pins "today" for the shell, mostly so scripted sessions are reproducible.
pub const TODAY_ENV: &str = "ZAKAT_LEDGER_TODAY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Command(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Dialog(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

/// Everything a command handler may touch.
pub struct ShellContext {
    pub mode: CliMode,
    registry: CommandRegistry,
    pub ledger: Ledger,
    theme: ColorfulTheme,
    config_manager: ConfigManager,
    pub config: Config,
    home: PathBuf,
    banner: Option<(Notification, NaiveDateTime)>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let clock: Arc<dyn Clock> = match clock_override_from_env()? {
            Some(date) => Arc::new(FixedClock::on(date)),
            None => Arc::new(SystemClock),
        };
        Self::with_home(mode, paths::app_data_dir(), clock)
    }

    /// Builds a context whose store, config and clipboard file live under
    /// `home`.
    pub fn with_home(
        mode: CliMode,
        home: PathBuf,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, CliError> {
        ensure_dir(&home)?;
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config_manager = ConfigManager::with_base_dir(home.clone())?;
        let config = config_manager.load()?;
        cli_io::apply_config(&config, mode);

        let storage = JsonFileStore::new(paths::store_dir_in(&home))?;
        let ledger = Ledger::open(Box::new(storage), clock, config.ledger_settings());
        tracing::info!(
            home = %home.display(),
            records = ledger.records().len(),
            "shell context ready"
        );

        Ok(Self {
            mode,
            registry,
            ledger,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            home,
            banner: None,
            running: true,
        })
    }

    pub(crate) fn home(&self) -> &PathBuf {
        &self.home
    }

    pub(crate) fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    /// `zakat[Mar 1, 2024]*> ` where the star marks unsaved changes. While
    /// the last notification is still up the prompt ends in `+` (success)
    /// or `!` (failure).
    pub(crate) fn prompt(&self) -> String {
        let dirty = if self.ledger.has_unsaved_changes() {
            "*"
        } else {
            ""
        };
        let banner = match &self.banner {
            Some((note, shown_at)) if note.is_visible(*shown_at, self.ledger.now()) => {
                if note.is_success() {
                    "+"
                } else {
                    "!"
                }
            }
            _ => "",
        };
        format!(
            "zakat[{}]{}{}> ",
            self.ledger.selected_date().format("%b %-d, %Y"),
            dirty,
            banner
        )
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.print_warning(&err.to_string());
                return Ok(LoopControl::Continue);
            }
        };
        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }
        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&command, &tokens[0], &args)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        if let Some(best) = self.registry.closest(input) {
            cli_io::print_info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        let prompt = if self.ledger.has_unsaved_changes() {
            "Some changes could not be written to storage. Exit anyway?"
        } else {
            "Exit shell?"
        };
        cli_io::confirm_action(&self.theme, prompt, false).map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                cli_io::print_info("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                cli_io::print_error(other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }

    /// Deletes the record for `date` after confirming with the user. `None`
    /// means the user declined.
    pub(crate) fn delete_record(
        &mut self,
        date: NaiveDate,
        assume_yes: bool,
    ) -> Result<Option<Notification>, CommandError> {
        let Self {
            ledger,
            mode,
            theme,
            ..
        } = self;
        let mut answer = Ok(false);
        let outcome = ledger.delete(date, |record| {
            let question = format!(
                "Delete the record for {} ({})?",
                table_label(record.date),
                format_currency(record.profit)
            );
            answer = confirm(*mode, &*theme, &question, assume_yes);
            matches!(answer, Ok(true))
        });
        answer?;
        Ok(outcome)
    }

    pub(crate) fn show_notification(&mut self, note: &Notification) {
        cli_io::print_notification(note);
        self.banner = Some((note.clone(), self.ledger.now()));
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        cli_io::apply_config(&self.config, self.mode);
        Ok(())
    }

    pub(crate) fn config_path(&self) -> PathBuf {
        self.config_manager.path().to_path_buf()
    }
}

/// Asks a yes/no question. Script sessions never block on a prompt: they
/// answer with `assume_yes`.
fn confirm(
    mode: CliMode,
    theme: &ColorfulTheme,
    prompt: &str,
    assume_yes: bool,
) -> Result<bool, CommandError> {
    if assume_yes {
        return Ok(true);
    }
    match mode {
        CliMode::Script => Ok(false),
        CliMode::Interactive => cli_io::confirm_action(theme, prompt, false),
    }
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    parse_record_date(input).ok_or_else(|| {
        CommandError::InvalidArguments(format!("invalid date `{}` (use YYYY-MM-DD)", input))
    })
}

fn clock_override_from_env() -> Result<Option<NaiveDate>, CliError> {
    match env::var(TODAY_ENV) {
        Ok(raw) if !raw.trim().is_empty() => parse_record_date(&raw)
            .map(Some)
            .ok_or_else(|| CliError::Command(format!("{TODAY_ENV} must be YYYY-MM-DD"))),
        _ => Ok(None),
    }
}

#[cfg(test)]
pub(crate) fn test_context(today: NaiveDate) -> (tempfile::TempDir, ShellContext) {
    let temp = tempfile::TempDir::new().expect("temp dir");
    let context = ShellContext::with_home(
        CliMode::Script,
        temp.path().to_path_buf(),
        Arc::new(FixedClock::on(today)),
    )
    .expect("context");
    (temp, context)
}

#[cfg(test)]
pub(crate) fn process_script(context: &mut ShellContext, lines: &[&str]) {
    for line in lines {
        match context.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err).expect("report"),
        }
    }
}
