//! South African provinces used for vehicle registration and route planning

use serde::{Deserialize, Serialize};

use crate::core::entity::normalize_token;

/// Province a vehicle is registered in or a route runs through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Province {
    #[default]
    Gauteng,
    #[serde(rename = "Western Cape")]
    WesternCape,
    #[serde(rename = "KwaZulu-Natal")]
    KwaZuluNatal,
    #[serde(rename = "Eastern Cape")]
    EasternCape,
    #[serde(rename = "Free State")]
    FreeState,
    Limpopo,
    Mpumalanga,
    #[serde(rename = "North West")]
    NorthWest,
    #[serde(rename = "Northern Cape")]
    NorthernCape,
}

impl Province {
    pub fn as_str(&self) -> &'static str {
        match self {
            Province::Gauteng => "Gauteng",
            Province::WesternCape => "Western Cape",
            Province::KwaZuluNatal => "KwaZulu-Natal",
            Province::EasternCape => "Eastern Cape",
            Province::FreeState => "Free State",
            Province::Limpopo => "Limpopo",
            Province::Mpumalanga => "Mpumalanga",
            Province::NorthWest => "North West",
            Province::NorthernCape => "Northern Cape",
        }
    }

    pub fn all() -> &'static [Province] {
        &[
            Province::Gauteng,
            Province::WesternCape,
            Province::KwaZuluNatal,
            Province::EasternCape,
            Province::FreeState,
            Province::Limpopo,
            Province::Mpumalanga,
            Province::NorthWest,
            Province::NorthernCape,
        ]
    }
}

impl std::fmt::Display for Province {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Province {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = normalize_token(s);
        Province::all()
            .iter()
            .find(|p| normalize_token(p.as_str()) == token)
            .copied()
            .ok_or_else(|| {
                format!(
                    "Invalid province: {}. Use one of: {}",
                    s,
                    Province::all()
                        .iter()
                        .map(|p| p.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_province_from_str_is_forgiving() {
        assert_eq!("kwazulu natal".parse::<Province>().unwrap(), Province::KwaZuluNatal);
        assert_eq!("WESTERN_CAPE".parse::<Province>().unwrap(), Province::WesternCape);
        assert!("Atlantis".parse::<Province>().is_err());
    }

    #[test]
    fn test_province_serializes_with_display_name() {
        let json = serde_json::to_string(&Province::KwaZuluNatal).unwrap();
        assert_eq!(json, "\"KwaZulu-Natal\"");
    }
}
