//! Argument, credential and upstream-envelope validation.
//!
//! All checks are pure. Argument and credential checks run before any
//! upstream call is made.

use serde_json::Value;
use tracing::warn;

use crate::error::PubgError;

/// Whether a JSON value counts as present: `null`, `false`, `0`, `""` do not.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Fail with `MissingArgument` for the first required name whose value is
/// absent or falsy. `args` is expected to be an object; anything else counts
/// as having no arguments at all.
pub fn validate_args(args: &Value, required: &[&str]) -> Result<(), PubgError> {
    for name in required {
        let present = args.get(*name).map(is_truthy).unwrap_or(false);
        if !present {
            return Err(PubgError::MissingArgument((*name).to_string()));
        }
    }
    Ok(())
}

/// Return the configured credential, or `MissingCredential` if there is none.
pub fn validate_api_key(api_key: Option<&str>) -> Result<&str, PubgError> {
    match api_key {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(PubgError::MissingCredential),
    }
}

/// Reject envelopes with nothing usable in `data`.
///
/// In array mode `data` must be a non-empty sequence whose first element is
/// present. Otherwise `data` must have at least one member: a non-empty
/// object, array or string. Numbers and booleans have no members.
pub fn validate_response(envelope: Option<&Value>, is_array: bool) -> Result<(), PubgError> {
    let reject = |reason: &str| {
        warn!("Rejected upstream envelope: {}", reason);
        Err(PubgError::UpstreamData(reason.to_string()))
    };

    let Some(envelope) = envelope else {
        return reject("missing envelope");
    };
    let data = match envelope.get("data") {
        Some(data) if is_truthy(data) => data,
        _ => return reject("missing data"),
    };

    if is_array {
        match data.as_array() {
            Some(items) if items.first().map(is_truthy).unwrap_or(false) => Ok(()),
            Some(_) => reject("empty data array"),
            None => reject("data is not an array"),
        }
    } else {
        let empty = match data {
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::String(s) => s.is_empty(),
            Value::Null | Value::Bool(_) | Value::Number(_) => true,
        };
        if empty {
            reject("empty data object")
        } else {
            Ok(())
        }
    }
}
