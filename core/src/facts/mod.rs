//! Fact Store contract, the join with reference data, and the fact operations.

pub mod join;
pub mod models;
pub mod ops;
pub mod r#trait;

pub use join::{join_state, join_states, JoinedState};
pub use models::{FactIndex, FactRecord};
pub use ops::{
    create_facts, delete_fact, modify_fact, no_facts_message, no_fact_at_index_message,
    pick_fact, random_fact, CreateOutcome, EditOutcome,
};
pub use r#trait::FactStore;
