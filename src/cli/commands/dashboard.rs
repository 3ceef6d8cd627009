//! `fleet dashboard` command - Control Center

use console::style;
use miette::Result;
use tabled::{builder::Builder, settings::Style};

use crate::cli::commands::Context;
use crate::cli::helpers::format_money;
use crate::cli::output;
use crate::cli::table::CellValue;
use crate::core::state::AppState;
use crate::views::dashboard::{dashboard, Dashboard, TrendPoint};

/// Widest bar in the fuel trend chart
const BAR_WIDTH: usize = 30;

pub fn run(app: &mut AppState, ctx: &Context) -> Result<()> {
    let d = dashboard(&app.store);
    if let Some(text) = output::serialized(&d, ctx.format())? {
        print!("{}", text);
        return Ok(());
    }

    let accent = app.theme.accent();
    println!("{}", accent.apply_to("Control Center"));
    println!("{}", tiles(&d));

    println!();
    println!("{}", style("Fuel spend trend").bold());
    for line in trend_chart(&d.fuel_trend) {
        println!("  {}", line);
    }

    println!();
    println!("{}", style("Recent alerts").bold());
    if d.alerts.is_empty() {
        println!("  {}", style("No alerts.").dim());
    }
    for a in d.alerts {
        println!(
            "  {:<8} {:<6} {}  {}",
            style(a.event_id()).cyan(),
            CellValue::Severity(a.severity).format_tsv(6),
            a.message,
            style(a.date).dim()
        );
    }
    Ok(())
}

/// KPI tiles as a one-row table
fn tiles(d: &Dashboard) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Total Fleet", "Utilization", "Incidents", "OPEX"]);
    builder.push_record([
        format!("{} ({} active)", d.total_vehicles, d.active_vehicles),
        d.utilization_label(),
        d.incidents.to_string(),
        format_money(d.opex),
    ]);
    builder.build().with(Style::rounded()).to_string()
}

/// One bar per month, scaled to the largest value
fn trend_chart(points: &[TrendPoint]) -> Vec<String> {
    let max = points.iter().map(|p| p.cost).fold(0.0_f64, f64::max);
    points
        .iter()
        .map(|p| {
            let len = if max > 0.0 {
                ((p.cost / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            format!("{:<4} {:<width$} {}", p.month, "█".repeat(len), format_money(p.cost), width = BAR_WIDTH)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed;

    #[test]
    fn test_trend_chart_scales_to_largest_month() {
        let store = seed::load_embedded().unwrap();
        let d = dashboard(&store);
        let lines = trend_chart(&d.fuel_trend);
        assert_eq!(lines.len(), 5);
        // April (R21,800) is the peak
        assert!(lines[3].starts_with("Apr"));
        assert_eq!(lines[3].matches('█').count(), BAR_WIDTH);
        assert!(lines[4].ends_with("R11,400"));
    }

    #[test]
    fn test_trend_chart_with_no_spend() {
        let points = vec![TrendPoint { month: "Jan", cost: 0.0 }];
        assert_eq!(trend_chart(&points)[0].matches('█').count(), 0);
    }

    #[test]
    fn test_tiles_show_kpis() {
        let store = seed::load_embedded().unwrap();
        let text = tiles(&dashboard(&store));
        assert!(text.contains("60.0%"));
        assert!(text.contains("5 (3 active)"));
        assert!(text.contains("R11,400"));
    }
}
