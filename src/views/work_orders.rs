//! Ops Center - the work order board

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::core::form::{FieldKind, FieldSpec, FormError, FormValues};
use crate::core::identity::EntityKind;
use crate::core::store::{Collection, FleetStore, StoreError};
use crate::entities::{WorkOrder, WorkOrderStatus};
use crate::views::crud::CrudView;
use crate::views::trips::Transition;

pub struct WorkOrdersView;

impl CrudView for WorkOrdersView {
    type Record = WorkOrder;
    type Facet = WorkOrderStatus;

    fn collection(store: &FleetStore) -> &Collection<WorkOrder> {
        &store.work_orders
    }

    fn collection_mut(store: &mut FleetStore) -> &mut Collection<WorkOrder> {
        &mut store.work_orders
    }

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::of(
                "vehicle",
                "Vehicle",
                FieldKind::Reference {
                    kind: EntityKind::Vehicle,
                    optional: false,
                },
            ),
            FieldSpec::of(
                "priority",
                "Priority",
                FieldKind::Choice(vec!["LOW", "MEDIUM", "HIGH", "CRITICAL"]),
            ),
            FieldSpec::text("description", "Description"),
        ]
    }

    fn defaults(now: NaiveDateTime) -> FormValues {
        FormValues::new()
            .with("priority", "LOW")
            .with("status", WorkOrderStatus::Open)
            .with("created", now.date())
    }

    fn to_form(o: &WorkOrder) -> FormValues {
        FormValues::new()
            .with("vehicle", &o.vehicle_id)
            .with("priority", o.priority)
            .with("description", &o.description)
            .with("status", o.status)
            .with("created", o.created_at)
    }

    fn build(id: String, form: &FormValues) -> Result<WorkOrder, FormError> {
        Ok(WorkOrder {
            id,
            vehicle_id: form.text("vehicle")?,
            priority: form.choice("priority")?,
            description: form.text("description")?,
            status: form.choice("status")?,
            created_at: form.date("created")?,
        })
    }

    fn search_fields(o: &WorkOrder) -> Vec<&str> {
        vec![o.description.as_str(), o.vehicle_id.as_str()]
    }

    fn facet(o: &WorkOrder) -> WorkOrderStatus {
        o.status
    }

    const MANAGED: &'static [&'static str] = &["status"];
}

/// Move order `id` to `target` when that is its one forward step.
///
/// Anything else (backwards, skipping, or from RESOLVED) is a no-op.
pub fn transition(
    store: &mut FleetStore,
    id: &str,
    target: WorkOrderStatus,
) -> Result<Transition<WorkOrder>, StoreError> {
    let order = store.work_orders.get(id)?;
    if order.status.next() != Some(target) {
        tracing::debug!(id, from = order.status.as_str(), to = target.as_str(), "no control for transition");
        return Ok(Transition::NoOp(order.clone()));
    }
    let moved = WorkOrder {
        status: target,
        ..order.clone()
    };
    store.work_orders.replace(moved.clone())?;
    tracing::info!(id, status = target.as_str(), "work order moved");
    Ok(Transition::Applied(moved))
}

/// OPEN → IN_PROGRESS
pub fn start(store: &mut FleetStore, id: &str) -> Result<Transition<WorkOrder>, StoreError> {
    transition(store, id, WorkOrderStatus::InProgress)
}

/// IN_PROGRESS → RESOLVED
pub fn resolve(store: &mut FleetStore, id: &str) -> Result<Transition<WorkOrder>, StoreError> {
    transition(store, id, WorkOrderStatus::Resolved)
}

/// Whichever forward step the order has, if any
pub fn advance(store: &mut FleetStore, id: &str) -> Result<Transition<WorkOrder>, StoreError> {
    let current = store.work_orders.get(id)?.status;
    match current.next() {
        Some(next) => transition(store, id, next),
        None => Ok(Transition::NoOp(store.work_orders.get(id)?.clone())),
    }
}

/// One column of the board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardColumn<'a> {
    pub status: WorkOrderStatus,
    pub count: usize,
    pub orders: Vec<&'a WorkOrder>,
}

/// Three columns, OPEN / IN_PROGRESS / RESOLVED, each in list order
pub fn board<'a>(orders: &[&'a WorkOrder]) -> Vec<BoardColumn<'a>> {
    WorkOrderStatus::all()
        .iter()
        .map(|&status| {
            let orders: Vec<&WorkOrder> = orders
                .iter()
                .copied()
                .filter(|o| o.status == status)
                .collect();
            BoardColumn {
                status,
                count: orders.len(),
                orders,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search::Filter;
    use crate::core::seed;
    use crate::entities::Priority;
    use crate::views::crud;

    fn counts(store: &FleetStore) -> Vec<usize> {
        let all = crud::list::<WorkOrdersView>(store, "", &Filter::All);
        board(&all).iter().map(|c| c.count).collect()
    }

    #[test]
    fn test_start_open_order_fills_in_progress_column() {
        let mut store = seed::load_embedded().unwrap();
        assert_eq!(counts(&store), vec![1, 1, 0]);

        let result = start(&mut store, "WO-102").unwrap();
        assert!(result.applied());
        assert_eq!(counts(&store), vec![0, 2, 0]);
    }

    #[test]
    fn test_orders_only_move_forward() {
        let mut store = seed::load_embedded().unwrap();

        assert!(!resolve(&mut store, "WO-102").unwrap().applied());
        assert!(start(&mut store, "WO-102").unwrap().applied());
        assert!(!start(&mut store, "WO-102").unwrap().applied());
        assert!(resolve(&mut store, "WO-102").unwrap().applied());

        let revision = store.work_orders.revision();
        assert!(!advance(&mut store, "WO-102").unwrap().applied());
        assert!(!start(&mut store, "WO-102").unwrap().applied());
        assert_eq!(store.work_orders.revision(), revision);
        assert_eq!(
            store.work_orders.find("WO-102").unwrap().status,
            WorkOrderStatus::Resolved
        );
    }

    #[test]
    fn test_advance_walks_the_lifecycle() {
        let mut store = seed::load_embedded().unwrap();
        let moved = advance(&mut store, "WO-101").unwrap();
        assert_eq!(moved.record().status, WorkOrderStatus::Resolved);
    }

    #[test]
    fn test_create_work_order() {
        let mut store = seed::load_embedded().unwrap();
        let input = FormValues::new()
            .with("vehicle", "V005")
            .with("description", "Replace alternator");
        let o = crud::create::<WorkOrdersView>(
            &mut store,
            input,
            "2024-05-21T10:00:00".parse().unwrap(),
        )
        .unwrap();
        assert_eq!(o.id, "WO-103");
        assert_eq!(o.status, WorkOrderStatus::Open);
        assert_eq!(o.priority, Priority::Low);
        assert_eq!(o.created_at.to_string(), "2024-05-21");
    }

    #[test]
    fn test_edit_cannot_move_status() {
        let mut store = seed::load_embedded().unwrap();
        let o = crud::edit::<WorkOrdersView>(
            &mut store,
            "WO-101",
            FormValues::new().with("status", "OPEN").with("description", "Brake pads"),
        )
        .unwrap();
        assert_eq!(o.status, WorkOrderStatus::InProgress);
        assert_eq!(o.description, "Brake pads");
    }

    #[test]
    fn test_search_by_vehicle_id() {
        let store = seed::load_embedded().unwrap();
        let hits = crud::list::<WorkOrdersView>(&store, "v003", &Filter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "WO-101");
    }
}
