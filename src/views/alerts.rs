//! Read-only alert feed

use crate::core::search::{matches_any, Filter};
use crate::core::store::FleetStore;
use crate::entities::{Alert, Severity};

/// Alerts in feed order, optionally narrowed by text and severity
pub fn list<'a>(store: &'a FleetStore, query: &str, severity: &Filter<Severity>) -> Vec<&'a Alert> {
    store
        .alerts
        .items()
        .iter()
        .filter(|a| matches_any(query, &[a.message.as_str(), a.alert_type.as_str()]))
        .filter(|a| severity.accepts(&a.severity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed;

    #[test]
    fn test_filter_alerts() {
        let store = seed::load_embedded().unwrap();
        assert_eq!(list(&store, "", &Filter::All).len(), 3);
        assert_eq!(list(&store, "", &Filter::Only(Severity::High)).len(), 2);
        assert_eq!(list(&store, "license", &Filter::All).len(), 1);
    }
}
