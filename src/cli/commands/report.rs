use std::path::PathBuf;

use crate::chart::all_charts;
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::chart::{render as render_chart, terminal_width};
use crate::errors::LedgerError;
use crate::export::DirectorySink;

use super::has_flag;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "chart",
            "Show the profit and contribution charts",
            "chart [--json]",
            cmd_chart,
        ),
        CommandEntry::new(
            "export",
            "Write all records to a CSV file",
            "export [dir]",
            cmd_export,
        ),
    ]
}

fn cmd_chart(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let charts = all_charts(&context.ledger.chart_series());
    if has_flag(args, "--json") {
        let json = serde_json::to_string_pretty(&charts).map_err(LedgerError::from)?;
        println!("{json}");
        return Ok(());
    }
    let width = terminal_width();
    for spec in &charts {
        io::print_info(render_chart(spec, width));
        io::print_info("");
    }
    Ok(())
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let dir = args
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .map(|dir| PathBuf::from(*dir))
        .unwrap_or_else(|| context.config.export_dir());
    let sink = DirectorySink::new(dir);
    let (note, written) = context.ledger.export(&sink);
    context.show_notification(&note);
    if let Some(path) = written {
        io::print_info(format!("Wrote {}", path.display()));
    }
    Ok(())
}
