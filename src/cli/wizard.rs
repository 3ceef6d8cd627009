//! Interactive form filling for `new -i` and `edit -i`
//!
//! Walks a view's [`FieldSpec`]s and prompts for each one, pre-filled with
//! whatever the form already holds. Values come back as raw strings; the
//! view binds and checks them afterwards like flag input.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::core::entity::Entity;
use crate::core::form::{FieldKind, FieldSpec, FormValues};
use crate::core::identity::EntityKind;
use crate::core::store::FleetStore;

const NONE_CHOICE: &str = "none";

/// Prompts for form fields
pub struct FormWizard {
    theme: ColorfulTheme,
}

impl Default for FormWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl FormWizard {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    /// Prompt for every field, starting from `base`
    pub fn run(
        &self,
        title: &str,
        fields: &[FieldSpec],
        base: FormValues,
        store: &FleetStore,
    ) -> Result<FormValues> {
        println!();
        println!("{} {}", style("◆").cyan(), style(title).bold());
        println!("{}", style("─".repeat(50)).dim());
        println!();

        let mut form = base;
        for field in fields {
            // a blank value still overrides the record being edited
            let value = self.prompt_field(field, form.get(field.name), store)?;
            form.set(field.name, value.unwrap_or_default());
        }
        Ok(form)
    }

    fn prompt_field(
        &self,
        field: &FieldSpec,
        current: Option<&str>,
        store: &FleetStore,
    ) -> Result<Option<String>> {
        let prompt = if field.required {
            field.label.to_string()
        } else {
            format!("{} {}", field.label, style("(optional)").dim())
        };

        match &field.kind {
            FieldKind::Choice(values) => {
                let default_idx = current
                    .and_then(|c| values.iter().position(|v| v.eq_ignore_ascii_case(c)))
                    .unwrap_or(0);
                let selection = Select::with_theme(&self.theme)
                    .with_prompt(&prompt)
                    .items(values)
                    .default(default_idx)
                    .interact()
                    .into_diagnostic()?;
                Ok(Some(values[selection].to_string()))
            }

            FieldKind::Reference { kind, optional } => {
                let options = reference_options(store, *kind);
                if options.is_empty() {
                    return self.prompt_text(&prompt, current, field.required);
                }
                let mut labels: Vec<String> = options.iter().map(|(_, label)| label.clone()).collect();
                if *optional {
                    labels.push(NONE_CHOICE.to_string());
                }
                let default_idx = match current {
                    Some(id) => options.iter().position(|(oid, _)| oid == id).unwrap_or(0),
                    None if *optional => options.len(),
                    None => 0,
                };
                let selection = Select::with_theme(&self.theme)
                    .with_prompt(&prompt)
                    .items(&labels)
                    .default(default_idx)
                    .interact()
                    .into_diagnostic()?;
                Ok(options.get(selection).map(|(id, _)| id.clone()))
            }

            FieldKind::Date => self.prompt_text(&format!("{} (YYYY-MM-DD)", prompt), current, field.required),
            FieldKind::DateTime => {
                self.prompt_text(&format!("{} (YYYY-MM-DDTHH:MM)", prompt), current, field.required)
            }
            FieldKind::Text | FieldKind::Integer | FieldKind::Decimal => {
                self.prompt_text(&prompt, current, field.required)
            }
        }
    }

    fn prompt_text(&self, prompt: &str, current: Option<&str>, required: bool) -> Result<Option<String>> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(!required);
        if let Some(c) = current {
            input = input.default(c.to_string());
        }
        let value = input.interact_text().into_diagnostic()?;
        let value = value.trim().to_string();
        if value.is_empty() {
            Ok(None)
        } else {
            Ok(Some(value))
        }
    }
}

/// `(id, label)` pairs offered for a reference field
pub fn reference_options(store: &FleetStore, kind: EntityKind) -> Vec<(String, String)> {
    fn pairs<T: Entity>(items: &[T]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|r| (r.id().to_string(), format!("{}  {}", r.id(), r.title())))
            .collect()
    }
    match kind {
        EntityKind::Vehicle => pairs(store.vehicles.items()),
        EntityKind::Driver => pairs(store.drivers.items()),
        EntityKind::Route => pairs(store.routes.items()),
        EntityKind::Trip => pairs(store.trips.items()),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed;

    #[test]
    fn test_reference_options_list_ids_with_titles() {
        let store = seed::load_embedded().unwrap();
        let vehicles = reference_options(&store, EntityKind::Vehicle);
        assert_eq!(vehicles.len(), 5);
        assert_eq!(vehicles[0].0, "V001");
        assert!(vehicles[0].1.contains("KFT 102 GP"));

        let drivers = reference_options(&store, EntityKind::Driver);
        assert_eq!(drivers[3].0, "D004");
        assert!(reference_options(&store, EntityKind::Alert).is_empty());
    }
}
