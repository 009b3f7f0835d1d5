use async_graphql::{Request, Variables};
use pubg_stats_gql::api::state::AppState;
use pubg_stats_gql::config::{ServerConfig, UpstreamConfig};
use pubg_stats_gql::gql::{build_schema, StatsSchema};
use pubg_stats_gql::resolvers::Resolvers;
use pubg_stats_gql::upstream::UpstreamClient;
use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-api-key";

/// State whose upstream points at the mock server's `/shards/steam`.
pub fn state_for(server: &MockServer, api_key: Option<&str>) -> AppState {
    let config = UpstreamConfig {
        base_url: format!("{}/shards/steam", server.uri()),
        api_key: api_key.map(str::to_string),
        timeout_seconds: Some(5),
    };
    let upstream = UpstreamClient::new(&config).expect("Failed to build upstream client");
    AppState::with_resolvers(Resolvers::new(upstream), ServerConfig::default())
}

pub fn schema_for(server: &MockServer) -> StatsSchema {
    build_schema(state_for(server, Some(API_KEY)))
}

/// Answer authenticated GETs of `upstream_path` with `body`, exactly `times` times.
pub async fn mount_json(server: &MockServer, upstream_path: &str, body: Value, times: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/shards/steam{}", upstream_path)))
        .and(header("authorization", format!("Bearer {}", API_KEY).as_str()))
        .and(header("accept", "application/vnd.api+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

/// Helper function to execute GraphQL queries
pub async fn execute_graphql(
    schema: &StatsSchema,
    query: &str,
    variables: Option<Variables>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    schema.execute(request).await
}

/// `code` extension of the first error in a response.
#[allow(dead_code)]
pub fn first_error_code(response: &async_graphql::Response) -> Option<String> {
    let ext = response.errors.first()?.extensions.as_ref()?;
    match ext.get("code")? {
        async_graphql::Value::String(code) => Some(code.clone()),
        _ => None,
    }
}
