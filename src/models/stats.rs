//! Per-mode lifetime and season statistics.

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

use super::{deserialize_lenient_f64, deserialize_lenient_i64, deserialize_lenient_string};

/// One `gameModeStats` entry, copied member by member from upstream.
///
/// Every member is optional: an absent statistic is `null`, and an entirely
/// absent mode block is the all-`null` default.
#[derive(SimpleObject, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameModeStats {
    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub assists: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub boosts: Option<i64>,

    #[graphql(name = "dBNOs")]
    #[serde(rename = "dBNOs", deserialize_with = "deserialize_lenient_i64")]
    pub d_bnos: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub daily_kills: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub daily_wins: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub damage_dealt: Option<f64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub days: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub headshot_kills: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub heals: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub kill_points: Option<f64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub kills: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub longest_kill: Option<f64>,

    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub longest_time_survived: Option<f64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub losses: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub max_kill_streaks: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub most_survival_time: Option<f64>,

    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub rank_points: Option<f64>,

    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub rank_points_title: Option<String>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub revives: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub ride_distance: Option<f64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub road_kills: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub round_most_kills: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub rounds_played: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub suicides: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub swim_distance: Option<f64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub team_kills: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub time_survived: Option<f64>,

    #[graphql(name = "top10s")]
    #[serde(rename = "top10s", deserialize_with = "deserialize_lenient_i64")]
    pub top_10s: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub vehicle_destroys: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub walk_distance: Option<f64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub weapons_acquired: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub weekly_kills: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub weekly_wins: Option<i64>,

    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub win_points: Option<f64>,

    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub wins: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_decode_partial_block() {
        let stats: GameModeStats = serde_json::from_value(json!({"kills": 10})).unwrap();
        assert_eq!(
            stats,
            GameModeStats {
                kills: Some(10),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_decode_upstream_block() {
        let stats: GameModeStats = serde_json::from_value(json!({
            "assists": 3,
            "dBNOs": 12,
            "damageDealt": 1534.25,
            "kills": 14,
            "longestKill": 212.5,
            "rankPointsTitle": "0",
            "roundsPlayed": 9,
            "top10s": 4,
            "wins": 1,
            "unknownFutureStat": 99
        }))
        .unwrap();

        assert_eq!(stats.assists, Some(3));
        assert_eq!(stats.d_bnos, Some(12));
        assert_eq!(stats.damage_dealt, Some(1534.25));
        assert_eq!(stats.kills, Some(14));
        assert_eq!(stats.longest_kill, Some(212.5));
        assert_eq!(stats.rank_points_title.as_deref(), Some("0"));
        assert_eq!(stats.rounds_played, Some(9));
        assert_eq!(stats.top_10s, Some(4));
        assert_eq!(stats.wins, Some(1));
        assert_eq!(stats.heals, None);
    }

    #[test]
    fn test_serialize_uses_upstream_names() {
        let stats = GameModeStats {
            d_bnos: Some(2),
            top_10s: Some(1),
            ..Default::default()
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["dBNOs"], json!(2));
        assert_eq!(value["top10s"], json!(1));
        assert_eq!(value["kills"], json!(null));
    }
}
