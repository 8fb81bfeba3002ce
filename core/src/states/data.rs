use lazy_static::lazy_static;
use std::collections::HashMap;

use super::filter::ContigFilter;
use super::types::StateRecord;
use crate::error::DatasetError;

const STATES_JSON: &str = include_str!("../../data/states.json");

lazy_static! {
    static ref DATASET: Dataset =
        Dataset::from_json(STATES_JSON).expect("bundled states.json must be valid");
}

/// Process-wide Reference Dataset, parsed on first use and never mutated.
pub fn dataset() -> &'static Dataset {
    &DATASET
}

#[derive(Debug)]
pub struct Dataset {
    records: Vec<StateRecord>,
    by_code: HashMap<String, usize>,
}

impl Dataset {
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<StateRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn from_records(records: Vec<StateRecord>) -> Result<Self, DatasetError> {
        let mut by_code = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            let well_formed =
                record.code.len() == 2 && record.code.chars().all(|c| c.is_ascii_uppercase());
            if !well_formed {
                return Err(DatasetError::MalformedCode(record.code.clone()));
            }
            if by_code.insert(record.code.clone(), idx).is_some() {
                return Err(DatasetError::DuplicateCode(record.code.clone()));
            }
        }
        Ok(Self { records, by_code })
    }

    pub fn records(&self) -> &[StateRecord] {
        &self.records
    }

    pub fn get(&self, code: &str) -> Option<&StateRecord> {
        self.by_code.get(code).map(|&idx| &self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records passing `filter`, in dataset order.
    pub fn filtered(&self, filter: ContigFilter) -> Vec<&StateRecord> {
        self.records
            .iter()
            .filter(|r| filter.matches(&r.code))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_dataset_has_fifty_states() {
        let ds = dataset();
        assert_eq!(ds.len(), 50);
        assert!(!ds.is_empty());
        assert_eq!(ds.get("AL").unwrap().capital_city, "Montgomery");
        assert_eq!(ds.get("HI").unwrap().nickname, "Aloha State");
        assert!(ds.get("al").is_none());
    }

    #[test]
    fn test_bundled_dataset_is_sorted_by_name() {
        let names: Vec<&str> = dataset().records().iter().map(|r| r.state.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_filtered_counts() {
        let ds = dataset();
        assert_eq!(ds.filtered(ContigFilter::All).len(), 50);
        assert_eq!(ds.filtered(ContigFilter::ContiguousOnly).len(), 48);

        let outside: Vec<&str> = ds
            .filtered(ContigFilter::NonContiguousOnly)
            .iter()
            .map(|r| r.code.as_str())
            .collect();
        assert_eq!(outside, vec!["AK", "HI"]);
    }

    #[test]
    fn test_rejects_duplicate_codes() {
        let json = r#"[
            {"state":"A","slug":"a","code":"AA","nickname":"","admission_date":"","admission_number":1,"capital_city":"","population":1},
            {"state":"B","slug":"b","code":"AA","nickname":"","admission_date":"","admission_number":2,"capital_city":"","population":2}
        ]"#;
        assert!(matches!(
            Dataset::from_json(json),
            Err(DatasetError::DuplicateCode(code)) if code == "AA"
        ));
    }

    #[test]
    fn test_rejects_lowercase_codes() {
        let json = r#"[
            {"state":"A","slug":"a","code":"aa","nickname":"","admission_date":"","admission_number":1,"capital_city":"","population":1}
        ]"#;
        assert!(matches!(
            Dataset::from_json(json),
            Err(DatasetError::MalformedCode(_))
        ));
    }
}
