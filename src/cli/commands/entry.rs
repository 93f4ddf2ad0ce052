use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::currency::{format_currency, format_rate, long_label};
use crate::ledger::form::parse_amount;
use crate::ledger::record::zakat_for;

use super::required_arg;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("form", "Show the input form", "form", cmd_form),
        CommandEntry::new(
            "profit",
            "Set the profit field",
            "profit <amount>",
            cmd_profit,
        ),
        CommandEntry::new(
            "rate",
            "Set the zakat rate field",
            "rate <percent>",
            cmd_rate,
        ),
        CommandEntry::new(
            "sadaka",
            "Set the sadaka field",
            "sadaka <amount>",
            cmd_sadaka,
        ),
        CommandEntry::new(
            "save",
            "Save the form as the selected date's record",
            "save",
            cmd_save,
        ),
        CommandEntry::new("reset", "Clear the form", "reset", cmd_reset),
    ]
}

fn cmd_form(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let form = context.ledger.form();
    output_section(long_label(context.ledger.selected_date()));
    io::print_info(format!("  Profit      : {}", blank_dash(&form.profit)));
    io::print_info(format!("  Zakat rate  : {}", format_rate(form.zakat_rate())));
    io::print_info(format!("  Sadaka      : {}", blank_dash(&form.sadaka)));
    if let Some(profit) = parse_amount(&form.profit).filter(|p| *p > 0.0) {
        io::print_info(format!(
            "  Zakat due   : {}",
            format_currency(zakat_for(profit, form.zakat_rate()))
        ));
    }
    Ok(())
}

fn blank_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn cmd_profit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = required_arg(args, "profit <amount>")?;
    context.ledger.form_mut().set_profit(raw);
    Ok(())
}

fn cmd_rate(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = required_arg(args, "rate <percent>")?;
    context.ledger.form_mut().set_zakat_rate(raw)?;
    Ok(())
}

fn cmd_sadaka(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = required_arg(args, "sadaka <amount>")?;
    context.ledger.form_mut().set_sadaka(raw);
    Ok(())
}

fn cmd_save(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let note = context.ledger.save();
    context.show_notification(&note);
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.ledger.reset_form();
    io::print_info("Form cleared.");
    Ok(())
}
