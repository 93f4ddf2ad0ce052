use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::config::CONFIG_KEYS;
use crate::currency::format_rate;

const USAGE: &str = "config [show | set <key> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change preferences",
        USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|arg| arg.to_lowercase()).as_deref() {
        None | Some("show") => show(context),
        Some("set") => match args {
            [_, key, value @ ..] if !value.is_empty() => set(context, key, &value.join(" ")),
            _ => Err(CommandError::InvalidArguments(format!(
                "usage: config set <key> <value> (keys: {})",
                CONFIG_KEYS.join(", ")
            ))),
        },
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{other}`; usage: {USAGE}"
        ))),
    }
}

fn show(context: &ShellContext) -> CommandResult {
    let config = &context.config;
    let unset = || "(not set)".to_string();
    output_section("Configuration");
    io::print_info(format!(
        "  default_zakat_rate   : {}",
        format_rate(config.default_zakat_rate)
    ));
    io::print_info(format!(
        "  notification_seconds : {}",
        config.notification_seconds
    ));
    io::print_info(format!(
        "  app_url              : {}",
        config.app_url.clone().unwrap_or_else(unset)
    ));
    io::print_info(format!("  share_message        : {}", config.share_message));
    io::print_info(format!(
        "  export_dir           : {}",
        config
            .export_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(unset)
    ));
    io::print_info(format!("  storage_key          : {}", config.storage_key));
    io::print_info(format!(
        "  ui_color_enabled     : {}",
        config.ui_color_enabled
    ));
    io::print_info(format!("  file                 : {}", context.config_path().display()));
    Ok(())
}

fn set(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    updated.set(key, value)?;
    let storage_key_changed = updated.storage_key != context.config.storage_key;
    context.config = updated;
    context.persist_config()?;

    let settings = context.config.ledger_settings();
    context
        .ledger
        .set_default_zakat_rate(settings.default_zakat_rate);
    context
        .ledger
        .set_notification_dismiss(settings.notification_dismiss);

    io::print_success("Configuration updated.");
    if storage_key_changed {
        io::print_warning("The new storage key takes effect the next time the shell starts.");
    }
    Ok(())
}
