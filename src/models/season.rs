//! Season metadata.

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

use super::{deserialize_lenient_bool, Resource};
use crate::error::PubgError;

/// A season as exposed to GraphQL callers.
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub id: String,
    pub is_current_season: bool,
    pub is_off_season: bool,
}

/// `attributes` of an upstream season resource.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SeasonAttributes {
    #[serde(deserialize_with = "deserialize_lenient_bool")]
    is_current_season: Option<bool>,

    #[serde(alias = "isOffseason", deserialize_with = "deserialize_lenient_bool")]
    is_off_season: Option<bool>,
}

impl Season {
    /// Build from an upstream season resource; missing flags are `false`.
    pub fn from_resource(resource: &Resource) -> Result<Self, PubgError> {
        let attrs: SeasonAttributes = resource.attribute_or_default(&[])?;
        Ok(Self {
            id: resource.id.clone(),
            is_current_season: attrs.is_current_season.unwrap_or(false),
            is_off_season: attrs.is_off_season.unwrap_or(false),
        })
    }
}
