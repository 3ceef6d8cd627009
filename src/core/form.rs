//! Form binding - raw field strings in, typed values out
//!
//! Both the flag-driven `new`/`edit` commands and the interactive wizard
//! produce a [`FormValues`] map. Each view then pulls typed values out of
//! it, so every field is parsed and checked before a record is built.

use chrono::{NaiveDate, NaiveDateTime};
use miette::Diagnostic;
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

use crate::core::identity::EntityKind;

/// A form field failed to bind
#[derive(Debug, Error, Diagnostic, PartialEq)]
pub enum FormError {
    #[error("missing required field '{field}'")]
    #[diagnostic(
        code(fleet::form::missing),
        help("pass the field as a flag, or use -i to fill the form interactively")
    )]
    Missing { field: String },

    #[error("invalid value '{value}' for '{field}': {reason}")]
    #[diagnostic(code(fleet::form::invalid))]
    Invalid {
        field: String,
        value: String,
        reason: String,
    },

    #[error("'{field}' cannot be negative (got {value})")]
    #[diagnostic(code(fleet::form::negative), help("quantities and costs start at 0"))]
    Negative { field: String, value: f64 },
}

/// How a field is entered and checked
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
    Date,
    DateTime,
    /// One of a closed set of values
    Choice(Vec<&'static str>),
    /// Id of a record of another kind; `optional` allows "none"
    Reference { kind: EntityKind, optional: bool },
}

/// One field of an entity form
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Key in [`FormValues`], and the command-line flag name
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            required: true,
        }
    }

    pub fn of(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Raw, unvalidated form contents keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, builder style
    pub fn with(mut self, name: &str, value: impl ToString) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: impl ToString) {
        self.values.insert(name.to_string(), value.to_string());
    }

    /// Set a field only when a value was given
    pub fn set_opt<V: ToString>(&mut self, name: &str, value: Option<V>) {
        if let Some(v) = value {
            self.set(name, v);
        }
    }

    /// Clear a field so it reads as absent
    pub fn clear(&mut self, name: &str) {
        self.values.remove(name);
    }

    /// Overlay `other` on top of `self`
    pub fn merge(mut self, other: FormValues) -> Self {
        self.values.extend(other.values);
        self
    }

    /// Raw value, with blank input treated as absent
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Required free text
    pub fn text(&self, name: &str) -> Result<String, FormError> {
        self.get(name)
            .map(str::to_string)
            .ok_or_else(|| FormError::Missing {
                field: name.to_string(),
            })
    }

    /// Optional free text; "none" clears a weak reference
    pub fn opt_text(&self, name: &str) -> Option<String> {
        self.get(name)
            .filter(|v| !v.eq_ignore_ascii_case("none"))
            .map(str::to_string)
    }

    /// Required whole number, at least zero
    pub fn integer(&self, name: &str) -> Result<u32, FormError> {
        let raw = self.text(name)?;
        raw.parse::<u32>().map_err(|_| FormError::Invalid {
            field: name.to_string(),
            value: raw.clone(),
            reason: "expected a whole number".to_string(),
        })
    }

    /// Required decimal number
    pub fn decimal(&self, name: &str) -> Result<f64, FormError> {
        let raw = self.text(name)?;
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(FormError::Invalid {
                field: name.to_string(),
                value: raw,
                reason: "expected a number".to_string(),
            }),
        }
    }

    /// Required decimal number that may not drop below zero
    pub fn non_negative(&self, name: &str) -> Result<f64, FormError> {
        let value = self.decimal(name)?;
        if value < 0.0 {
            return Err(FormError::Negative {
                field: name.to_string(),
                value,
            });
        }
        Ok(value)
    }

    /// Required calendar date (YYYY-MM-DD)
    pub fn date(&self, name: &str) -> Result<NaiveDate, FormError> {
        let raw = self.text(name)?;
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| FormError::Invalid {
            field: name.to_string(),
            value: raw.clone(),
            reason: "expected a date like 2024-05-20".to_string(),
        })
    }

    /// Optional calendar date
    pub fn opt_date(&self, name: &str) -> Result<Option<NaiveDate>, FormError> {
        match self.get(name) {
            Some(_) => self.date(name).map(Some),
            None => Ok(None),
        }
    }

    /// Required local date-time; seconds are optional
    pub fn datetime(&self, name: &str) -> Result<NaiveDateTime, FormError> {
        let raw = self.text(name)?;
        parse_datetime(&raw).ok_or_else(|| FormError::Invalid {
            field: name.to_string(),
            value: raw.clone(),
            reason: "expected a time like 2024-05-20T08:00".to_string(),
        })
    }

    /// Required value from a closed set
    pub fn choice<T>(&self, name: &str) -> Result<T, FormError>
    where
        T: FromStr<Err = String>,
    {
        let raw = self.text(name)?;
        raw.parse::<T>().map_err(|reason| FormError::Invalid {
            field: name.to_string(),
            value: raw.clone(),
            reason,
        })
    }
}

/// Accepts `2024-05-20T08:00`, `2024-05-20T08:00:00` and the space-separated forms
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw.trim(), fmt).ok())
}

/// Format a date-time the way forms accept it back
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M").to_string()
}
