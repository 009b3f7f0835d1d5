//! Query resolvers.
//!
//! Each resolver validates its arguments and the credential, performs its
//! upstream call(s) sequentially, and reshapes the JSON:API envelope into the
//! flat output types. Missing intermediate members yield empty/default
//! output; only the envelope check and argument/credential checks fail.

mod matches;
mod stats;

pub use matches::assemble_match;

use serde_json::{json, Value};
use tracing::debug;

use crate::error::PubgError;
use crate::models::jsonapi::lookup;
use crate::models::{Document, Season};
use crate::upstream::UpstreamClient;
use crate::validate::validate_args;

/// Resolver set over one upstream client.
#[derive(Clone)]
pub struct Resolvers {
    upstream: UpstreamClient,
}

impl Resolvers {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }

    /// Whether an upstream credential is configured.
    pub fn has_credential(&self) -> bool {
        self.upstream.validate_api_key().is_ok()
    }

    /// Argument and credential checks; both run before any network call.
    fn preflight(&self, args: &Value, required: &[&str]) -> Result<(), PubgError> {
        validate_args(args, required)?;
        self.upstream.validate_api_key()?;
        Ok(())
    }

    /// Fetch the resource at `segments` and decode the validated envelope.
    async fn fetch_document(&self, segments: &[&str], is_array: bool) -> Result<Document, PubgError> {
        let envelope = self.upstream.fetch(segments, None, is_array).await?;
        Document::from_value(envelope)
    }

    /// Account ID of the player named `username`.
    pub async fn get_account_id(&self, username: &str) -> Result<String, PubgError> {
        self.preflight(&json!({ "username": username }), &["username"])?;

        let name: String = url::form_urlencoded::byte_serialize(username.as_bytes()).collect();
        let query = format!("filter[playerNames]={}", name);
        let envelope = self.upstream.fetch(&["players"], Some(&query), true).await?;

        // The list check guarantees a first element; only its `id` is read,
        // and a missing or non-string one resolves to "".
        let id = envelope
            .get("data")
            .and_then(Value::as_array)
            .and_then(|players| players.first())
            .and_then(|player| lookup(player, &["id"]))
            .and_then(Value::as_str)
            .unwrap_or_default();
        Ok(id.to_string())
    }

    /// All seasons known to upstream, in upstream order.
    pub async fn get_seasons(&self) -> Result<Vec<Season>, PubgError> {
        self.preflight(&Value::Null, &[])?;

        let doc = self.fetch_document(&["seasons"], true).await?;
        let seasons = doc
            .primary_list()?
            .iter()
            .map(Season::from_resource)
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Resolved {} seasons", seasons.len());
        Ok(seasons)
    }

    /// The first season flagged current, if any. One upstream call.
    pub async fn get_current_season(&self) -> Result<Option<Season>, PubgError> {
        let seasons = self.get_seasons().await?;
        Ok(current_season(seasons))
    }
}

/// First season with `is_current_season` set.
pub fn current_season(seasons: Vec<Season>) -> Option<Season> {
    seasons.into_iter().find(|s| s.is_current_season)
}
