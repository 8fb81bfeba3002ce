//! Request body validation

use serde::de::DeserializeOwned;
use serde_json::Value;
use statefacts_core::api::FactIndex;

use super::models::HttpServerError;

/// Parse a JSON body. An empty body is treated as `{}` so that missing
/// fields are reported as such rather than as a parse failure.
pub fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, HttpServerError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|_| {
        HttpServerError::WrongType("Request body must be a JSON object".to_string())
    })
}

/// Values a client can send to mean "not provided": null, false, 0, "".
/// An index of 0 therefore reads as absent.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map(|f| f == 0.0).unwrap_or(false),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn present(value: Option<Value>) -> Option<Value> {
    value.filter(|v| !is_blank(v))
}

pub fn validate_funfacts(value: Option<Value>) -> Result<Vec<String>, HttpServerError> {
    let Some(value) = present(value) else {
        return Err(HttpServerError::MissingField(
            "State fun facts value required".to_string(),
        ));
    };
    let Value::Array(items) = value else {
        return Err(HttpServerError::WrongType(
            "State fun facts value must be an array".to_string(),
        ));
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(s),
            _ => Err(HttpServerError::WrongType(
                "State fun facts value must be an array of strings".to_string(),
            )),
        })
        .collect()
}

pub fn validate_index(value: Option<Value>) -> Result<FactIndex, HttpServerError> {
    let Some(value) = present(value) else {
        return Err(HttpServerError::MissingField(
            "State fun fact index value required".to_string(),
        ));
    };

    let not_a_number =
        || HttpServerError::WrongType("State fun fact index must be a number".to_string());

    match value {
        Value::Number(n) => Ok(match n.as_i64() {
            Some(i) => FactIndex::one_based(i),
            None => n.as_f64().map(index_from_f64).unwrap_or(FactIndex::unaddressable()),
        }),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<i64>() {
                Ok(FactIndex::one_based(i))
            } else if let Ok(f) = s.parse::<f64>() {
                Ok(index_from_f64(f))
            } else {
                Err(not_a_number())
            }
        }
        _ => Err(not_a_number()),
    }
}

fn index_from_f64(f: f64) -> FactIndex {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        FactIndex::one_based(f as i64)
    } else {
        FactIndex::unaddressable()
    }
}

pub fn validate_funfact(value: Option<Value>) -> Result<String, HttpServerError> {
    match present(value) {
        None => Err(HttpServerError::MissingField(
            "State fun fact value required".to_string(),
        )),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(HttpServerError::WrongType(
            "State fun fact value must be a string".to_string(),
        )),
    }
}
