use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::data::dataset;
use crate::error::StateCodeError;

/// One row of the bundled dataset. Field names follow the JSON served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRecord {
    pub state: String,
    pub slug: String,
    pub code: String,
    pub nickname: String,
    pub admission_date: String,
    pub admission_number: u32,
    pub capital_city: String,
    pub population: u64,
}

/// A state code that has been checked against the Reference Dataset.
///
/// The only way to obtain one is [`StateCode::from_param`], so holding a
/// `StateCode` means the code is uppercase and known.
#[derive(Clone, Copy)]
pub struct StateCode {
    record: &'static StateRecord,
}

impl StateCode {
    /// Normalize a raw path parameter and resolve it against the dataset.
    ///
    /// An absent or empty parameter is `Missing`; anything that does not
    /// name a bundled state after uppercasing is `Invalid`.
    pub fn from_param(raw: Option<&str>) -> Result<Self, StateCodeError> {
        let code = match raw {
            Some(s) if !s.is_empty() => s.to_uppercase(),
            _ => return Err(StateCodeError::Missing),
        };

        dataset()
            .get(&code)
            .map(|record| Self { record })
            .ok_or(StateCodeError::Invalid(code))
    }

    pub fn as_str(&self) -> &'static str {
        &self.record.code
    }

    /// Full state name, e.g. "Alabama".
    pub fn name(&self) -> &'static str {
        &self.record.state
    }

    pub fn record(&self) -> &'static StateRecord {
        self.record
    }
}

impl PartialEq for StateCode {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for StateCode {}

impl Hash for StateCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Debug for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StateCode").field(&self.as_str()).finish()
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StateCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_param_uppercases() {
        let code = StateCode::from_param(Some("ky")).unwrap();
        assert_eq!(code.as_str(), "KY");
        assert_eq!(code.name(), "Kentucky");

        let mixed = StateCode::from_param(Some("nY")).unwrap();
        assert_eq!(mixed.as_str(), "NY");
    }

    #[test]
    fn test_from_param_missing() {
        assert_eq!(
            StateCode::from_param(None).unwrap_err(),
            StateCodeError::Missing
        );
        assert_eq!(
            StateCode::from_param(Some("")).unwrap_err(),
            StateCodeError::Missing
        );
    }

    #[test]
    fn test_from_param_invalid_any_case() {
        for raw in ["zz", "ZZ", "Zz", "PR", "dc", "ALA", "A"] {
            match StateCode::from_param(Some(raw)) {
                Err(StateCodeError::Invalid(code)) => assert_eq!(code, raw.to_uppercase()),
                other => panic!("expected Invalid for {raw}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_every_dataset_code_resolves_in_lowercase() {
        for record in dataset().records() {
            let lower = record.code.to_lowercase();
            let code = StateCode::from_param(Some(&lower)).unwrap();
            assert_eq!(code.as_str(), record.code);
        }
    }

    #[test]
    fn test_serialize_as_plain_string() {
        let code = StateCode::from_param(Some("tx")).unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"TX\"");
    }
}
