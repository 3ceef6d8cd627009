//! `fleet reports` command - Analytics

use console::style;
use miette::Result;
use tabled::{builder::Builder, settings::Style};

use crate::cli::commands::Context;
use crate::cli::helpers::format_money;
use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::state::AppState;
use crate::views::reports::{export_notice, kpis, ExportKind, Kpis, ARCHIVE};

#[derive(clap::Args, Debug)]
pub struct ReportsArgs {
    /// Request an export (pdf or csv); only acknowledged
    #[arg(long)]
    pub export: Option<ExportKind>,
}

pub fn run(args: ReportsArgs, app: &mut AppState, ctx: &Context) -> Result<()> {
    if let Some(kind) = args.export {
        println!("{} {}", style("•").cyan(), export_notice(kind));
        return Ok(());
    }

    let k = kpis(&app.store);

    if ctx.format() == OutputFormat::Md {
        print!("{}", markdown(&k));
        return Ok(());
    }

    if let Some(text) = output::serialized(&k, ctx.format())? {
        print!("{}", text);
        return Ok(());
    }

    println!("{}", app.theme.accent().apply_to("Analytics"));
    let mut tiles = Builder::default();
    tiles.push_record(["Total Freight Value", "Operational Margin", "Fleet Uptime", "Pending Audits"]);
    tiles.push_record([
        format_money(k.total_freight_value),
        k.operational_margin.to_string(),
        k.fleet_uptime.to_string(),
        k.pending_audits.to_string(),
    ]);
    println!("{}", tiles.build().with(Style::rounded()));

    println!();
    println!("{}", style("Report archive").bold());
    println!("{}", archive_table().with(Style::rounded()));
    Ok(())
}

fn archive_table() -> tabled::Table {
    let mut builder = Builder::default();
    builder.push_record(["Report", "Date", "Size"]);
    for report in &ARCHIVE {
        builder.push_record([report.title, report.date, report.size]);
    }
    builder.build()
}

/// The analytics summary as a Markdown document
fn markdown(k: &Kpis) -> String {
    let mut out = String::new();
    out.push_str("# FleetTrack Analytics\n\n");
    out.push_str(&format!(
        "- **Total Freight Value:** {}\n",
        format_money(k.total_freight_value)
    ));
    out.push_str(&format!("- **Operational Margin:** {}\n", k.operational_margin));
    out.push_str(&format!("- **Fleet Uptime:** {}\n", k.fleet_uptime));
    out.push_str(&format!("- **Pending Audits:** {}\n", k.pending_audits));
    out.push_str("\n## Archive\n\n");
    out.push_str(&archive_table().with(Style::markdown()).to_string());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed;

    #[test]
    fn test_markdown_report() {
        let store = seed::load_embedded().unwrap();
        let text = markdown(&kpis(&store));
        assert!(text.starts_with("# FleetTrack Analytics"));
        assert!(text.contains("R97,900"));
        assert!(text.contains("| Monthly Maintenance Audit"));
        assert!(text.contains("Operator Performance Matrix"));
    }
}
