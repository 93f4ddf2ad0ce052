use crate::cli::core::{parse_date, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::calendar as calendar_view;
use crate::currency::long_label;
use crate::ledger::YearMonth;

use super::required_arg;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "calendar",
            "Show the viewed month",
            "calendar",
            cmd_calendar,
        ),
        CommandEntry::new("prev", "View the previous month", "prev", cmd_prev),
        CommandEntry::new("next", "View the next month", "next", cmd_next),
        CommandEntry::new("month", "View a given month", "month <YYYY-MM>", cmd_month),
        CommandEntry::new(
            "select",
            "Select a date and load its record into the form",
            "select <YYYY-MM-DD|today>",
            cmd_select,
        ),
    ]
}

pub(crate) fn show_calendar(context: &ShellContext) {
    io::print_info(calendar_view::render(&context.ledger.calendar()));
}

fn cmd_calendar(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    show_calendar(context);
    Ok(())
}

fn cmd_prev(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.ledger.go_to_previous_month();
    show_calendar(context);
    Ok(())
}

fn cmd_next(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.ledger.go_to_next_month();
    show_calendar(context);
    Ok(())
}

fn cmd_month(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = required_arg(args, "month <YYYY-MM>")?;
    let month = YearMonth::parse(raw).ok_or_else(|| {
        CommandError::InvalidArguments(format!("invalid month `{raw}` (use YYYY-MM)"))
    })?;
    context.ledger.show_month(month);
    show_calendar(context);
    Ok(())
}

fn cmd_select(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = required_arg(args, "select <YYYY-MM-DD|today>")?;
    let date = if raw.eq_ignore_ascii_case("today") {
        context.ledger.today()
    } else {
        parse_date(raw)?
    };
    let existing = context.ledger.select_date(date).is_some();
    io::print_info(format!("Selected {}", long_label(date)));
    if existing {
        io::print_info("Loaded the saved record into the form.");
    }
    Ok(())
}
