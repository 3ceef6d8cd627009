//! Application state shared by every command handler
//!
//! One [`AppState`] lives for the whole process (or the whole `fleet shell`
//! session). Handlers borrow it mutably; nothing else holds onto it.

use console::Style;
use serde::Deserialize;
use std::time::Duration;

use crate::core::router::{self, Resolved, View};
use crate::core::store::FleetStore;

/// Color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Highlight for headings and the active menu entry
    pub fn accent(&self) -> Style {
        match self {
            Theme::Dark => Style::new().cyan().bold(),
            Theme::Light => Style::new().blue().bold(),
        }
    }

    /// Secondary text
    pub fn muted(&self) -> Style {
        match self {
            Theme::Dark => Style::new().dim(),
            Theme::Light => Style::new().black().bright(),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(format!("Invalid theme: {}. Use dark or light", s)),
        }
    }
}

/// Simulated sign-in state; no credentials are checked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

/// Everything the dashboard holds in memory
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: FleetStore,
    pub session: Session,
    pub theme: Theme,
    pub view: View,
}

impl AppState {
    pub fn new(store: FleetStore, theme: Theme) -> Self {
        Self {
            store,
            session: Session::default(),
            theme,
            view: View::default(),
        }
    }

    /// Wait out the simulated authentication delay, then sign in
    pub fn login(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        self.session.authenticated = true;
        tracing::info!("signed in");
    }

    pub fn logout(&mut self) {
        self.session.authenticated = false;
        self.view = View::Dashboard;
        tracing::info!("signed out");
    }

    /// Route to `path`, landing on the dashboard when nothing matches
    pub fn navigate(&mut self, path: &str) -> Resolved {
        let resolved = router::resolve(path);
        self.view = resolved.view;
        resolved
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        tracing::debug!(theme = theme.as_str(), "theme changed");
    }
}
