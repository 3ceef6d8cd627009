//! Entity trait - common interface for all fleet records

use serde::{de::DeserializeOwned, Serialize};

use crate::core::identity::EntityKind;

/// Common trait for all fleet records
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// The record kind, which also decides the id format
    const KIND: EntityKind;

    /// Get the record's id
    fn id(&self) -> &str;

    /// Get a short display title (registration, name, description...)
    fn title(&self) -> String;

    /// Get the record's status, or its closest equivalent
    fn status(&self) -> &str;
}

/// Normalize user input for case- and separator-insensitive enum parsing.
///
/// `"on route"`, `"On-Route"` and `"ON_ROUTE"` all normalize to `"on_route"`.
pub fn normalize_token(s: &str) -> String {
    s.trim().to_lowercase().replace(['-', ' '], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("On Route"), "on_route");
        assert_eq!(normalize_token(" KwaZulu-Natal "), "kwazulu_natal");
        assert_eq!(normalize_token("IN_PROGRESS"), "in_progress");
    }
}
