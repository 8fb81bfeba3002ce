use rand::Rng;
use tracing::debug;

use crate::error::StoreError;
use crate::facts::models::{FactIndex, FactRecord};
use crate::facts::r#trait::FactStore;
use crate::states::StateCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// No record existed; a new one holds exactly the submitted facts.
    Created(FactRecord),
    /// The submitted facts were appended to an existing record.
    Appended(FactRecord),
}

impl CreateOutcome {
    pub fn record(&self) -> &FactRecord {
        match self {
            Self::Created(r) | Self::Appended(r) => r,
        }
    }
}

/// Result of a modify/delete. The two "not found" cases are ordinary
/// outcomes, answered with a message rather than an error status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Updated(FactRecord),
    NoRecord,
    IndexOutOfRange,
}

pub fn no_facts_message(code: &StateCode) -> String {
    format!("No Fun Facts found for {}", code.name())
}

pub fn no_fact_at_index_message(code: &StateCode) -> String {
    format!("No Fun Fact found at that index for {}", code.name())
}

/// Uniform pick over `facts`; `None` when empty.
pub fn pick_fact<'a, R: Rng + ?Sized>(facts: &'a [String], rng: &mut R) -> Option<&'a String> {
    if facts.is_empty() {
        return None;
    }
    facts.get(rng.gen_range(0..facts.len()))
}

/// One random stored fact for `code`, or `None` if it has none.
pub async fn random_fact(
    store: &dyn FactStore,
    code: &StateCode,
) -> Result<Option<String>, StoreError> {
    let Some(record) = store.find_by_code(code.as_str()).await? else {
        return Ok(None);
    };
    Ok(pick_fact(&record.funfacts, &mut rand::thread_rng()).cloned())
}

pub async fn create_facts(
    store: &dyn FactStore,
    code: &StateCode,
    funfacts: Vec<String>,
) -> Result<CreateOutcome, StoreError> {
    match store.find_by_code(code.as_str()).await? {
        Some(mut record) => {
            debug!(state = %code, added = funfacts.len(), "appending fun facts");
            record.funfacts.extend(funfacts);
            Ok(CreateOutcome::Appended(store.save(record).await?))
        }
        None => {
            debug!(state = %code, added = funfacts.len(), "creating fact record");
            Ok(CreateOutcome::Created(
                store.create(code.as_str(), funfacts).await?,
            ))
        }
    }
}

pub async fn modify_fact(
    store: &dyn FactStore,
    code: &StateCode,
    index: FactIndex,
    funfact: String,
) -> Result<EditOutcome, StoreError> {
    edit_fact(store, code, index, |facts, slot| facts[slot] = funfact).await
}

pub async fn delete_fact(
    store: &dyn FactStore,
    code: &StateCode,
    index: FactIndex,
) -> Result<EditOutcome, StoreError> {
    edit_fact(store, code, index, |facts, slot| {
        facts.remove(slot);
    })
    .await
}

async fn edit_fact<F>(
    store: &dyn FactStore,
    code: &StateCode,
    index: FactIndex,
    apply: F,
) -> Result<EditOutcome, StoreError>
where
    F: FnOnce(&mut Vec<String>, usize) + Send,
{
    let Some(mut record) = store.find_by_code(code.as_str()).await? else {
        return Ok(EditOutcome::NoRecord);
    };
    // An empty stored fact is treated as no fact at that index.
    let Some(slot) = index
        .slot(record.funfacts.len())
        .filter(|&slot| !record.funfacts[slot].is_empty())
    else {
        return Ok(EditOutcome::IndexOutOfRange);
    };

    apply(&mut record.funfacts, slot);
    Ok(EditOutcome::Updated(store.save(record).await?))
}
