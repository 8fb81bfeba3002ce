use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One state's stored fun facts. Serialized with the document-store field
/// names clients already know (`_id`, `stateCode`, `funfacts`, `__v`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactRecord {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "stateCode")]
    pub state_code: String,
    #[serde(default)]
    pub funfacts: Vec<String>,
    /// Incremented by the store on every save.
    #[serde(rename = "__v", default)]
    pub version: u32,
}

impl FactRecord {
    pub fn new(state_code: impl Into<String>, funfacts: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            state_code: state_code.into(),
            funfacts,
            version: 0,
        }
    }
}

/// A caller-supplied 1-based fact position, resolved to a slot in the facts
/// sequence only if it can address one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactIndex(Option<usize>);

impl FactIndex {
    pub fn one_based(n: i64) -> Self {
        Self(
            n.checked_sub(1)
                .and_then(|zero_based| usize::try_from(zero_based).ok()),
        )
    }

    /// An index that matches no slot (negative or fractional input).
    pub fn unaddressable() -> Self {
        Self(None)
    }

    /// Zero-based slot if it lies inside a sequence of `len` facts.
    pub fn slot(&self, len: usize) -> Option<usize> {
        self.0.filter(|&i| i < len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_record_wire_names() {
        let record = FactRecord::new("AL", vec!["Fact1".into()]);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["stateCode"], "AL");
        assert_eq!(value["funfacts"], serde_json::json!(["Fact1"]));
        assert_eq!(value["__v"], 0);
        assert!(value["_id"].is_string());
    }

    #[test]
    fn test_fact_index_slot() {
        assert_eq!(FactIndex::one_based(1).slot(2), Some(0));
        assert_eq!(FactIndex::one_based(2).slot(2), Some(1));
        assert_eq!(FactIndex::one_based(3).slot(2), None);
        assert_eq!(FactIndex::one_based(5).slot(2), None);
        assert_eq!(FactIndex::one_based(-1).slot(2), None);
        assert_eq!(FactIndex::one_based(i64::MIN).slot(2), None);
        assert_eq!(FactIndex::unaddressable().slot(10), None);
        assert_eq!(FactIndex::one_based(1).slot(0), None);
    }
}
