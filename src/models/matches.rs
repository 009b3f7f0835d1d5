//! Match breakdown: metadata, teams (rosters) and players (participants).

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

use super::{
    deserialize_lenient_bool, deserialize_lenient_f64, deserialize_lenient_i64,
    deserialize_lenient_string,
};

/// A whole match as returned by `getMatchStats`.
#[derive(SimpleObject, Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStats {
    pub id: String,
    pub meta: MatchMeta,
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
}

/// `attributes` of the match resource.
#[derive(SimpleObject, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchMeta {
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub created_at: Option<String>,

    /// Match length in seconds
    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub duration: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub game_mode: Option<String>,

    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub map_name: Option<String>,

    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub match_type: Option<String>,

    #[serde(deserialize_with = "deserialize_lenient_bool")]
    pub is_custom_match: Option<bool>,

    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub season_state: Option<String>,

    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub shard_id: Option<String>,

    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub title_id: Option<String>,
}

/// A roster: its `stats` spread flat, plus outcome and member references.
#[derive(SimpleObject, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Team {
    #[serde(skip_deserializing)]
    pub id: String,

    /// Final placement of the team
    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub rank: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub team_id: Option<i64>,

    #[serde(skip_deserializing)]
    pub won: bool,

    #[serde(skip_deserializing)]
    pub player_ids: Vec<String>,

    /// Participants referenced by `playerIds` that were side-loaded
    #[serde(skip_deserializing)]
    pub players: Vec<Player>,
}

/// A participant: `id` plus its `stats` spread flat.
#[derive(SimpleObject, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Player {
    #[serde(skip_deserializing)]
    pub id: String,

    /// In-game name
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub name: Option<String>,

    /// Account ID of the player
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub player_id: Option<String>,

    #[graphql(name = "DBNOs")]
    #[serde(rename = "DBNOs", deserialize_with = "deserialize_lenient_i64")]
    pub dbnos: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub assists: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub boosts: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub damage_dealt: Option<f64>,

    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub death_type: Option<String>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub headshot_kills: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub heals: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub kill_place: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub kill_streaks: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub kills: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub longest_kill: Option<f64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub revives: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub ride_distance: Option<f64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub road_kills: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub swim_distance: Option<f64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub team_kills: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub time_survived: Option<f64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub vehicle_destroys: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub walk_distance: Option<f64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub weapons_acquired: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub win_place: Option<i64>,
}
