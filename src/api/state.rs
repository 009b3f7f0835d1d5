use std::sync::Arc;

use crate::config::{AppConfig, ServerConfig};
use crate::error::PubgError;
use crate::resolvers::Resolvers;
use crate::upstream::UpstreamClient;

/// Shared, read-only state for the router and the GraphQL context.
#[derive(Clone)]
pub struct AppState {
    pub resolvers: Arc<Resolvers>,
    pub server: Arc<ServerConfig>,
}

impl AppState {
    /// Build state with an HTTP upstream client from configuration.
    pub fn new(config: &AppConfig) -> Result<Self, PubgError> {
        let upstream = UpstreamClient::new(&config.upstream)?;
        Ok(Self::with_resolvers(
            Resolvers::new(upstream),
            config.server.clone(),
        ))
    }

    pub fn with_resolvers(resolvers: Resolvers, server: ServerConfig) -> Self {
        Self {
            resolvers: Arc::new(resolvers),
            server: Arc::new(server),
        }
    }
}
