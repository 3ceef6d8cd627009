//! Path routing - maps dashboard paths to views

use serde::Serialize;

/// One screen of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Dashboard,
    Vehicles,
    Drivers,
    Routes,
    Tracking,
    Trips,
    Revenue,
    WorkOrders,
    Fuel,
    Maintenance,
    Reports,
}

impl View {
    /// Every routable view
    pub fn all() -> &'static [View] {
        &[
            View::Dashboard,
            View::Vehicles,
            View::Drivers,
            View::Routes,
            View::Tracking,
            View::Trips,
            View::Revenue,
            View::WorkOrders,
            View::Fuel,
            View::Maintenance,
            View::Reports,
        ]
    }

    /// Views in sidebar order. Routes is reachable by path only.
    pub fn sidebar() -> &'static [View] {
        &[
            View::Dashboard,
            View::Vehicles,
            View::Drivers,
            View::Tracking,
            View::Trips,
            View::Revenue,
            View::WorkOrders,
            View::Fuel,
            View::Maintenance,
            View::Reports,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            View::Dashboard => "/",
            View::Vehicles => "/vehicles",
            View::Drivers => "/drivers",
            View::Routes => "/routes",
            View::Tracking => "/tracking",
            View::Trips => "/trips",
            View::Revenue => "/revenue",
            View::WorkOrders => "/work-orders",
            View::Fuel => "/fuel",
            View::Maintenance => "/maintenance",
            View::Reports => "/reports",
        }
    }

    /// Sidebar label
    pub fn menu_label(&self) -> &'static str {
        match self {
            View::Dashboard => "Control Center",
            View::Vehicles => "Asset Matrix",
            View::Drivers => "Operator Deck",
            View::Routes => "Route Planner",
            View::Tracking => "Live Tracking",
            View::Trips => "Journey Log",
            View::Revenue => "Revenue",
            View::WorkOrders => "Ops Center",
            View::Fuel => "Telemetry",
            View::Maintenance => "Maintenance",
            View::Reports => "Analytics",
        }
    }

    pub fn in_sidebar(&self) -> bool {
        *self != View::Routes
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Outcome of resolving a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub view: View,
    /// The path matched nothing and was sent to the dashboard
    pub redirected: bool,
}

/// Resolve a path to its view.
///
/// A leading `#` (hash routing), surrounding whitespace and trailing slashes
/// are ignored; a missing leading slash is tolerated. Unknown paths redirect
/// to `/`.
pub fn resolve(path: &str) -> Resolved {
    let normalized = normalize(path);
    match View::all().iter().find(|v| v.path() == normalized) {
        Some(view) => Resolved {
            view: *view,
            redirected: false,
        },
        None => {
            tracing::debug!(path, "no route matched, redirecting to /");
            Resolved {
                view: View::Dashboard,
                redirected: true,
            }
        }
    }
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim();
    let trimmed = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let trimmed = trimmed.trim_end_matches('/');
    let trimmed = trimmed.trim_start_matches('/');
    format!("/{}", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_view_resolves_to_itself() {
        for view in View::all() {
            let resolved = resolve(view.path());
            assert_eq!(resolved.view, *view);
            assert!(!resolved.redirected);
        }
    }

    #[test]
    fn test_hash_and_trailing_slash_are_ignored() {
        assert_eq!(resolve("#/vehicles").view, View::Vehicles);
        assert_eq!(resolve("/work-orders/").view, View::WorkOrders);
        assert_eq!(resolve("fuel").view, View::Fuel);
        assert_eq!(resolve("#/").view, View::Dashboard);
        assert!(!resolve("").redirected);
    }

    #[test]
    fn test_unknown_path_redirects_to_dashboard() {
        for path in ["/nope", "/vehicles/V001", "/Vehicles", "/settings"] {
            let resolved = resolve(path);
            assert_eq!(resolved.view, View::Dashboard);
            assert!(resolved.redirected, "{} should redirect", path);
        }
    }

    #[test]
    fn test_routes_hidden_from_sidebar() {
        assert!(!View::sidebar().contains(&View::Routes));
        assert_eq!(View::sidebar().len(), View::all().len() - 1);
        assert!(View::sidebar().iter().all(|v| v.in_sidebar()));
        assert_eq!(View::Trips.menu_label(), "Journey Log");
    }
}
