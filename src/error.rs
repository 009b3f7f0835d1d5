//! Failure kinds raised by validators, the upstream client and resolvers.

use async_graphql::ErrorExtensions;
use thiserror::Error;

/// Errors surfaced to GraphQL callers as field-level errors.
#[derive(Debug, Error)]
pub enum PubgError {
    /// A required query argument was absent or empty.
    #[error("Must provide {0}")]
    MissingArgument(String),

    /// No upstream API key is configured.
    #[error("Must provide valid api key")]
    MissingCredential,

    /// Upstream answered, but with an empty or malformed envelope.
    #[error("Request failed: bad request or no data for provided arguments ({0})")]
    UpstreamData(String),

    /// Upstream could not be reached or did not return JSON.
    #[error("Upstream request failed: {0}")]
    UpstreamTransport(String),
}

impl PubgError {
    /// Stable machine-readable code for the `code` error extension.
    pub fn code(&self) -> &'static str {
        match self {
            PubgError::MissingArgument(_) => "MISSING_ARGUMENT",
            PubgError::MissingCredential => "MISSING_CREDENTIAL",
            PubgError::UpstreamData(_) => "UPSTREAM_DATA",
            PubgError::UpstreamTransport(_) => "UPSTREAM_TRANSPORT",
        }
    }
}

impl From<reqwest::Error> for PubgError {
    fn from(err: reqwest::Error) -> Self {
        PubgError::UpstreamTransport(err.to_string())
    }
}

impl ErrorExtensions for PubgError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, e| e.set("code", code.to_string()))
    }
}
