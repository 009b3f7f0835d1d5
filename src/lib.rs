//! # PUBG Stats GraphQL
//!
//! A GraphQL gateway over the PUBG statistics REST API (JSON:API).
//!
//! ## Architecture
//!
//! - **validate**: argument, credential and envelope checks
//! - **keys**: mode key / matches key derivation
//! - **upstream**: HTTP client for the statistics API
//! - **resolvers**: one per query field; reshape envelopes into flat types
//! - **models**: JSON:API envelope and output types
//! - **gql**: GraphQL schema
//! - **api**: HTTP endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod config;
pub mod error;
pub mod gql;
pub mod keys;
pub mod models;
pub mod resolvers;
pub mod upstream;
pub mod validate;

pub use error::PubgError;
pub use keys::{GameMode, Perspective};
