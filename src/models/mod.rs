//! Upstream envelope types and the flat output types returned to GraphQL.

pub mod jsonapi;
pub mod matches;
pub mod season;
pub mod stats;

pub use jsonapi::{Document, Linkage, Relationship, Resource, ResourceRef};
pub use matches::{MatchMeta, MatchStats, Player, Team};
pub use season::Season;
pub use stats::GameModeStats;

use serde::Deserialize;
use serde_json::Value;

// ── Lenient deserializers for upstream statistics ──────────────────────────
//
// Statistic members are sometimes numbers, sometimes numeric strings, and
// occasionally null. Anything unparseable becomes `None` instead of failing
// the whole object. Integer members only take integral values; `2.7` is not
// an integer and is not rounded into one.

pub(crate) fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let val: Option<Value> = Option::deserialize(deserializer)?;
    Ok(val.and_then(|v| match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

/// `f` as an `i64` when it is a whole number inside `i64` range.
fn integral(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}

pub(crate) fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let val: Option<Value> = Option::deserialize(deserializer)?;
    Ok(val.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

pub(crate) fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let val: Option<Value> = Option::deserialize(deserializer)?;
    Ok(val.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }))
}

pub(crate) fn deserialize_lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let val: Option<Value> = Option::deserialize(deserializer)?;
    Ok(val.and_then(|v| match v {
        Value::Bool(b) => Some(b),
        Value::String(s) => match s.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }))
}
