//! Generic create/read/update/delete over one collection
//!
//! Every list view implements [`CrudView`]: where its records live, how a
//! form turns into a record, which text fields search looks at and which
//! facet the filter matches. The free functions here drive the rest.

use chrono::NaiveDateTime;
use miette::Diagnostic;
use thiserror::Error;

use crate::core::entity::Entity;
use crate::core::form::{FieldSpec, FormError, FormValues};
use crate::core::search::{matches_any, Filter};
use crate::core::store::{Collection, FleetStore, StoreError};

/// Create or edit failed
#[derive(Debug, Error, Diagnostic)]
pub enum CrudError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Form(#[from] FormError),
}

/// A list view over one entity collection
pub trait CrudView {
    type Record: Entity;

    /// Value the view's filter dropdown matches exactly
    type Facet: PartialEq;

    fn collection(store: &FleetStore) -> &Collection<Self::Record>;

    fn collection_mut(store: &mut FleetStore) -> &mut Collection<Self::Record>;

    /// Fields of the create/edit form, in prompt order
    fn fields() -> Vec<FieldSpec>;

    /// Values a blank create form starts with
    fn defaults(now: NaiveDateTime) -> FormValues;

    /// Form pre-filled from an existing record
    fn to_form(record: &Self::Record) -> FormValues;

    /// Bind a completed form into a record carrying `id`
    fn build(id: String, form: &FormValues) -> Result<Self::Record, FormError>;

    /// Text the search box matches against
    fn search_fields(record: &Self::Record) -> Vec<&str>;

    fn facet(record: &Self::Record) -> Self::Facet;

    /// Fields only the view itself sets; caller input for them is ignored
    const MANAGED: &'static [&'static str] = &[];
}

fn without_managed<V: CrudView>(mut input: FormValues) -> FormValues {
    for name in V::MANAGED {
        input.clear(name);
    }
    input
}

/// Views whose records may be deleted
pub trait Deletable: CrudView {}

/// Records matching both the search query and the facet filter, in list order
pub fn list<'a, V: CrudView>(
    store: &'a FleetStore,
    query: &str,
    filter: &Filter<V::Facet>,
) -> Vec<&'a V::Record> {
    V::collection(store)
        .items()
        .iter()
        .filter(|r| matches_any(query, &V::search_fields(r)))
        .filter(|r| filter.accepts(&V::facet(r)))
        .collect()
}

/// Append a record built from `input` layered over the form defaults
pub fn create<V: CrudView>(
    store: &mut FleetStore,
    input: FormValues,
    now: NaiveDateTime,
) -> Result<V::Record, CrudError> {
    let form = V::defaults(now).merge(without_managed::<V>(input));
    let collection = V::collection_mut(store);
    let record = V::build(collection.next_id(), &form)?;
    collection.append(record.clone());
    tracing::info!(kind = V::Record::KIND.as_str(), id = record.id(), "created");
    Ok(record)
}

/// Replace record `id` with the pre-filled form overlaid by `input`
pub fn edit<V: CrudView>(
    store: &mut FleetStore,
    id: &str,
    input: FormValues,
) -> Result<V::Record, CrudError> {
    let collection = V::collection_mut(store);
    let existing = collection.get(id)?;
    let form = V::to_form(existing).merge(without_managed::<V>(input));
    let record = V::build(id.to_string(), &form)?;
    collection.replace(record.clone())?;
    tracing::info!(kind = V::Record::KIND.as_str(), id, "updated");
    Ok(record)
}

/// Remove record `id` once `confirm` agrees.
///
/// Returns `Ok(None)` when confirmation is refused; nothing changes then.
pub fn delete<V: Deletable>(
    store: &mut FleetStore,
    id: &str,
    confirm: impl FnOnce(&V::Record) -> bool,
) -> Result<Option<V::Record>, StoreError> {
    let collection = V::collection_mut(store);
    let record = collection.get(id)?;
    if !confirm(record) {
        tracing::debug!(kind = V::Record::KIND.as_str(), id, "delete declined");
        return Ok(None);
    }
    let removed = collection.remove(id)?;
    tracing::info!(kind = V::Record::KIND.as_str(), id, "deleted");
    Ok(Some(removed))
}
