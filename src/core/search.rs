//! Text search and facet filtering shared by the list views

use std::str::FromStr;

/// Case-insensitive substring match over any of `fields`.
///
/// Only an empty query matches everything; whitespace is matched literally.
pub fn matches_any(query: &str, fields: &[&str]) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Exact-match filter on one facet; `all` disables it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

impl<T> From<Option<T>> for Filter<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Filter::Only(v),
            None => Filter::All,
        }
    }
}

impl<T> FromStr for Filter<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Filter::All)
        } else {
            T::from_str(s.trim())
                .map(Filter::Only)
                .map_err(|e| e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::VehicleStatus;

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(matches_any("", &["anything"]));
        assert!(matches_any("", &[]));
    }

    #[test]
    fn test_whitespace_is_part_of_the_query() {
        assert!(!matches_any("kft ", &["KFT102"]));
        assert!(matches_any("kft ", &["KFT 102 GP"]));
        assert!(!matches_any("   ", &["V001", "KFT102"]));
        assert!(matches_any(" ", &["CAA 88210"]));
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        assert!(matches_any("kft", &["KFT 102 GP", "V001"]));
        assert!(matches_any("v00", &["CAA 88210", "V002"]));
        assert!(!matches_any("zzz", &["KFT 102 GP", "V001"]));
    }

    #[test]
    fn test_search_returns_exactly_matching_count() {
        let regs = ["KFT 102 GP", "CAA 88210", "ND 992-001", "BB 55 YY GP", "FST 441 FS"];
        let hits = regs.iter().filter(|r| matches_any("gp", &[r])).count();
        assert_eq!(hits, 2);
    }

    #[test]
    fn test_filter_parse() {
        let all: Filter<VehicleStatus> = "all".parse().unwrap();
        assert_eq!(all, Filter::All);
        let only: Filter<VehicleStatus> = "maintenance".parse().unwrap();
        assert_eq!(only, Filter::Only(VehicleStatus::Maintenance));
        assert!("broken".parse::<Filter<VehicleStatus>>().is_err());
        let by_vehicle: Filter<String> = " V003 ".parse().unwrap();
        assert_eq!(by_vehicle, Filter::Only("V003".to_string()));
    }

    #[test]
    fn test_filter_accepts() {
        let f = Filter::Only(VehicleStatus::Active);
        assert!(f.accepts(&VehicleStatus::Active));
        assert!(!f.accepts(&VehicleStatus::Inactive));
        assert!(Filter::<VehicleStatus>::All.accepts(&VehicleStatus::Inactive));
    }
}
