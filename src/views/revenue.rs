//! Revenue ledger

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::core::form::{FieldKind, FieldSpec, FormError, FormValues};
use crate::core::store::{Collection, FleetStore};
use crate::entities::{RevenueCategory, RevenueRecord};
use crate::views::crud::{CrudView, Deletable};

pub struct RevenueView;

impl CrudView for RevenueView {
    type Record = RevenueRecord;
    type Facet = RevenueCategory;

    fn collection(store: &FleetStore) -> &Collection<RevenueRecord> {
        &store.revenue
    }

    fn collection_mut(store: &mut FleetStore) -> &mut Collection<RevenueRecord> {
        &mut store.revenue
    }

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::of("date", "Date", FieldKind::Date),
            FieldSpec::of("amount", "Amount (R)", FieldKind::Decimal),
            FieldSpec::text("source", "Source"),
            FieldSpec::of(
                "category",
                "Category",
                FieldKind::Choice(vec!["FREIGHT", "LOGISTICS", "CONSULTING"]),
            ),
        ]
    }

    fn defaults(now: NaiveDateTime) -> FormValues {
        FormValues::new()
            .with("date", now.date())
            .with("category", RevenueCategory::Freight)
    }

    fn to_form(r: &RevenueRecord) -> FormValues {
        FormValues::new()
            .with("date", r.date)
            .with("amount", r.amount)
            .with("source", &r.source)
            .with("category", r.category)
    }

    fn build(id: String, form: &FormValues) -> Result<RevenueRecord, FormError> {
        Ok(RevenueRecord {
            id,
            date: form.date("date")?,
            amount: form.decimal("amount")?,
            source: form.text("source")?,
            category: form.choice("category")?,
        })
    }

    fn search_fields(r: &RevenueRecord) -> Vec<&str> {
        vec![r.source.as_str()]
    }

    fn facet(r: &RevenueRecord) -> RevenueCategory {
        r.category
    }
}

impl Deletable for RevenueView {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: RevenueCategory,
    pub amount: f64,
}

/// Ledger total and the split per category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueSummary {
    pub total: f64,
    pub by_category: Vec<CategoryTotal>,
}

pub fn total(store: &FleetStore) -> f64 {
    store.revenue.items().iter().map(|r| r.amount).sum()
}

pub fn summary(store: &FleetStore) -> RevenueSummary {
    let records = store.revenue.items();
    RevenueSummary {
        total: total(store),
        by_category: RevenueCategory::all()
            .iter()
            .map(|&category| CategoryTotal {
                category,
                amount: records
                    .iter()
                    .filter(|r| r.category == category)
                    .map(|r| r.amount)
                    .sum(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search::Filter;
    use crate::core::seed;
    use crate::views::crud;

    #[test]
    fn test_summary() {
        let store = seed::load_embedded().unwrap();
        let s = summary(&store);
        assert_eq!(s.total, 97900.0);
        assert_eq!(s.by_category[0].amount, 85500.0);
        assert_eq!(s.by_category[1].amount, 12400.0);
        assert_eq!(s.by_category[2].amount, 0.0);
    }

    #[test]
    fn test_delete_record() {
        let mut store = seed::load_embedded().unwrap();
        let removed = crud::delete::<RevenueView>(&mut store, "REV-001", |_| true).unwrap();
        assert!(removed.is_some());
        assert_eq!(store.revenue.len(), 1);
        assert_eq!(store.revenue.items()[0].id, "REV-002");
        assert_eq!(total(&store), 12400.0);
    }

    #[test]
    fn test_create_defaults_to_freight() {
        let mut store = seed::load_embedded().unwrap();
        let r = crud::create::<RevenueView>(
            &mut store,
            FormValues::new().with("amount", "4500").with("source", "Karoo Haulage"),
            "2024-05-20T09:00:00".parse().unwrap(),
        )
        .unwrap();
        assert_eq!(r.id, "REV-003");
        assert_eq!(r.category, RevenueCategory::Freight);
        assert_eq!(
            crud::list::<RevenueView>(&store, "karoo", &Filter::Only(RevenueCategory::Freight)).len(),
            1
        );
    }
}
