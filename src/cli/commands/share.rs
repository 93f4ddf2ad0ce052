use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::share::{copy_link, share_links, CommandClipboard, FileClipboard};
use crate::utils::paths::clipboard_file_in;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "share",
            "Show WhatsApp and Telegram share links",
            "share",
            cmd_share,
        ),
        CommandEntry::new(
            "copy-link",
            "Copy the app link to the clipboard",
            "copy-link",
            cmd_copy_link,
        ),
    ]
}

fn app_url(context: &ShellContext) -> Result<String, CommandError> {
    context.config.app_url.clone().ok_or_else(|| {
        CommandError::InvalidArguments(
            "No app link configured. Use `config set app_url <url>` first.".into(),
        )
    })
}

fn cmd_share(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let url = app_url(context)?;
    let links = share_links(&url, &context.config.share_message);
    output_section("Share");
    io::print_info(format!("  WhatsApp : {}", links.whatsapp));
    io::print_info(format!("  Telegram : {}", links.telegram));
    Ok(())
}

fn cmd_copy_link(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let url = app_url(context)?;
    let fallback = FileClipboard::new(clipboard_file_in(context.home()));
    // Scripted sessions never touch the desktop clipboard.
    let primary = match context.mode {
        CliMode::Interactive => CommandClipboard::system(),
        CliMode::Script => CommandClipboard::new(Vec::new()),
    };
    let note = context
        .ledger
        .notify(copy_link(&url, &primary, &fallback));
    context.show_notification(&note);
    Ok(())
}
