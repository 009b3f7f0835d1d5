//! GraphQL schema over the resolvers.

pub mod queries;
pub mod schema;

pub use queries::QueryRoot;
pub use schema::{build_schema, schema_sdl, StatsSchema};
