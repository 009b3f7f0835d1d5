use async_graphql::{EmptyMutation, EmptySubscription, Schema};

use super::QueryRoot;
use crate::api::state::AppState;

/// The read-only statistics schema.
pub type StatsSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the GraphQL schema and inject shared state into the context.
pub fn build_schema(state: AppState) -> StatsSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(state) // available in resolvers via ctx.data::<AppState>()
        .finish()
}

/// SDL of the schema, without any state attached.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .finish()
        .sdl()
}
