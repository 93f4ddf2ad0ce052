use crate::cli::core::{parse_date, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::table::record_table;
use crate::currency::{format_currency, format_rate, long_label};

use super::{has_flag, required_arg};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("list", "Show all records, newest first", "list", cmd_list),
        CommandEntry::new(
            "edit",
            "Load a saved record into the form",
            "edit <YYYY-MM-DD>",
            cmd_edit,
        ),
        CommandEntry::new(
            "delete",
            "Delete the record for a date",
            "delete <YYYY-MM-DD> [--yes]",
            cmd_delete,
        ),
        CommandEntry::new(
            "summary",
            "Show totals across all records",
            "summary",
            cmd_summary,
        ),
    ]
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let rows = context.ledger.table();
    output_section("Ledger");
    if rows.is_empty() {
        io::print_info("No records yet.");
    } else {
        io::print_info(record_table(rows).render());
    }
    io::print_info(format!(
        "{} record(s) stored in {}",
        context.ledger.records().len(),
        context.ledger.storage_description()
    ));
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let date = parse_date(required_arg(args, "edit <YYYY-MM-DD>")?)?;
    let record = context.ledger.edit(date)?;
    io::print_info(format!(
        "Editing {}: profit {}, rate {}, sadaka {}",
        long_label(record.date),
        format_currency(record.profit),
        format_rate(record.zakat_rate),
        format_currency(record.sadaka)
    ));
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let date = parse_date(required_arg(args, "delete <YYYY-MM-DD> [--yes]")?)?;
    let assume_yes = has_flag(args, "--yes");

    let outcome = context.delete_record(date, assume_yes)?;
    match outcome {
        Some(note) => context.show_notification(&note),
        None => io::print_info("Delete cancelled."),
    }
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let totals = context.ledger.totals();
    output_section("Summary");
    io::print_info(format!(
        "  Total profit : {}",
        format_currency(totals.total_profit)
    ));
    io::print_info(format!(
        "  Total zakat  : {}",
        format_currency(totals.total_zakat)
    ));
    io::print_info(format!(
        "  Total sadaka : {}",
        format_currency(totals.total_sadaka)
    ));
    io::print_info(format!(
        "  Net profit   : {}",
        format_currency(totals.net_profit)
    ));
    Ok(())
}
