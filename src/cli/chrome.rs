//! Shell chrome: top bar, sidebar and status bar
//!
//! The indicators in the status bar are fixed text; only the clock moves.

use chrono::NaiveTime;
use console::style;

use crate::core::router::View;
use crate::core::state::AppState;

pub const PRODUCT: &str = "FleetTrack";

const STATUS_ITEMS: [&str; 5] = [
    "System: Operational",
    "latency: 24ms",
    "Region: US-EAST-1",
    "Proc: 12%",
    "DB: Syncing",
];

/// Bottom status line with the wall clock
pub fn status_bar(now: NaiveTime) -> String {
    format!("{}  |  {}", STATUS_ITEMS.join("  |  "), now.format("%H:%M:%S"))
}

/// Product name, current view and theme
pub fn top_bar(app: &AppState) -> String {
    let accent = app.theme.accent();
    let muted = app.theme.muted();
    format!(
        "{}  {}  {}",
        accent.apply_to(PRODUCT),
        app.view.menu_label(),
        muted.apply_to(format!("[{} mode]  {}", app.theme, app.view.path())),
    )
}

/// Sidebar menu entries, the current view marked
pub fn sidebar(app: &AppState) -> Vec<String> {
    let accent = app.theme.accent();
    View::sidebar()
        .iter()
        .map(|view| {
            let entry = format!("{:<16} {}", view.menu_label(), style(view.path()).dim());
            if *view == app.view {
                format!("{} {}", accent.apply_to("▸"), accent.apply_to(entry))
            } else {
                format!("  {}", entry)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Theme;
    use crate::core::store::FleetStore;

    #[test]
    fn test_status_bar_shows_clock() {
        let time = NaiveTime::from_hms_opt(9, 5, 3).unwrap();
        let bar = status_bar(time);
        assert!(bar.starts_with("System: Operational"));
        assert!(bar.contains("DB: Syncing"));
        assert!(bar.ends_with("09:05:03"));
    }

    #[test]
    fn test_sidebar_hides_routes_and_marks_current() {
        let mut app = AppState::new(FleetStore::default(), Theme::Dark);
        app.navigate("/fuel");
        let lines = sidebar(&app);
        assert_eq!(lines.len(), 10);
        assert!(!lines.iter().any(|l| l.contains("Route Planner")));
        let marked: Vec<&String> = lines.iter().filter(|l| l.contains('▸')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("Telemetry"));
    }

    #[test]
    fn test_top_bar_names_view() {
        let mut app = AppState::new(FleetStore::default(), Theme::Light);
        app.navigate("/work-orders");
        let bar = top_bar(&app);
        assert!(bar.contains("Ops Center"));
        assert!(bar.contains("light mode"));
    }
}
