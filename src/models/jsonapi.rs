//! JSON:API envelope types.
//!
//! Upstream responses carry a top-level `data` (one resource or a list),
//! an optional `included` list of side-loaded resources, and per-resource
//! `attributes` / `relationships`. Every member is optional on decode, and an
//! explicit `null` reads the same as an absent member, so a partial document
//! never fails to parse; resolvers decide what is required.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::PubgError;

/// A whole upstream response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub data: Value,

    #[serde(default, deserialize_with = "null_as_default")]
    pub included: Vec<Resource>,
}

/// A JSON:API resource object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Resource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,

    #[serde(default)]
    pub attributes: Value,

    /// `None` when the resource has no `relationships` member at all (or it
    /// is `null`). A relationship whose value is `null` is kept as `None`.
    #[serde(default)]
    pub relationships: Option<HashMap<String, Option<Relationship>>>,
}

/// A relationship entry: `{ data: ref | [ref] | null }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Option<Linkage>,
}

/// Resource linkage of a relationship.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Linkage {
    // Tried first: a struct would also accept a sequence.
    Many(Vec<ResourceRef>),
    One(ResourceRef),
}

/// `{ id, type }` pointer into `data` or `included`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResourceRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
}

impl Document {
    /// Decode an already validated envelope.
    pub fn from_value(value: Value) -> Result<Self, PubgError> {
        serde_json::from_value(value)
            .map_err(|e| PubgError::UpstreamData(format!("malformed envelope: {}", e)))
    }

    /// The primary resource of a single-resource response.
    pub fn primary(&self) -> Result<Resource, PubgError> {
        decode(&self.data)
    }

    /// The primary resources of a list response.
    pub fn primary_list(&self) -> Result<Vec<Resource>, PubgError> {
        match &self.data {
            Value::Array(_) => decode(&self.data),
            Value::Null => Ok(Vec::new()),
            other => Ok(vec![decode(other)?]),
        }
    }

    /// Side-loaded resources of the given `type`, in upstream order.
    pub fn included_of<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Resource> + 'a {
        self.included.iter().filter(move |r| r.kind == kind)
    }
}

impl Resource {
    /// Look up a value under `attributes` by path.
    pub fn attribute(&self, path: &[&str]) -> Option<&Value> {
        lookup(&self.attributes, path)
    }

    /// Decode the attribute at `path`, or `T::default()` when it is missing.
    pub fn attribute_or_default<T>(&self, path: &[&str]) -> Result<T, PubgError>
    where
        T: DeserializeOwned + Default,
    {
        decode_or_default(self.attribute(path))
    }

    /// The named relationship, if present.
    pub fn relationship(&self, name: &str) -> Option<&Relationship> {
        self.relationships
            .as_ref()
            .and_then(|r| r.get(name))
            .and_then(Option::as_ref)
    }

    /// IDs referenced by the named relationship; empty when absent.
    pub fn related_ids(&self, name: &str) -> Vec<String> {
        self.relationship(name)
            .map(Relationship::ids)
            .unwrap_or_default()
    }
}

impl Relationship {
    pub fn refs(&self) -> Vec<&ResourceRef> {
        match &self.data {
            Some(Linkage::Many(refs)) => refs.iter().collect(),
            Some(Linkage::One(r)) => vec![r],
            None => Vec::new(),
        }
    }

    pub fn ids(&self) -> Vec<String> {
        self.refs().into_iter().map(|r| r.id.clone()).collect()
    }
}

/// Walk `path` through nested objects. Missing keys, `null` and non-object
/// intermediates all yield `None`.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for key in path {
        current = current.as_object()?.get(*key)?;
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

/// Decode `value`, falling back to `T::default()` when it is absent.
pub fn decode_or_default<T>(value: Option<&Value>) -> Result<T, PubgError>
where
    T: DeserializeOwned + Default,
{
    match value {
        Some(v) => decode(v),
        None => Ok(T::default()),
    }
}

/// `null` decodes to `T::default()`, like an absent member.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, PubgError> {
    T::deserialize(value).map_err(|e| PubgError::UpstreamData(format!("malformed resource: {}", e)))
}
