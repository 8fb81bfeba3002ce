use serde::Serialize;
use std::collections::HashMap;

use crate::facts::models::FactRecord;
use crate::states::StateRecord;

/// A reference record with the state's stored facts overlaid, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinedState {
    #[serde(flatten)]
    pub state: StateRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funfacts: Option<Vec<String>>,
}

pub fn join_state(state: &StateRecord, facts: Option<&FactRecord>) -> JoinedState {
    let funfacts = facts
        .filter(|f| !f.funfacts.is_empty())
        .map(|f| f.funfacts.clone());
    JoinedState {
        state: state.clone(),
        funfacts,
    }
}

/// Join every reference record with its fact record. The output has exactly
/// one entry per input state, in input order.
pub fn join_states(states: &[&StateRecord], facts: &[FactRecord]) -> Vec<JoinedState> {
    let by_code: HashMap<&str, &FactRecord> = facts
        .iter()
        .map(|f| (f.state_code.as_str(), f))
        .collect();

    states
        .iter()
        .map(|s| join_state(s, by_code.get(s.code.as_str()).copied()))
        .collect()
}
