//! Lifetime/season statistics and match-ID resolvers.

use serde_json::json;
use tracing::debug;

use super::Resolvers;
use crate::error::PubgError;
use crate::keys::{matches_key, mode_key, GameMode, Perspective};
use crate::models::GameModeStats;

impl Resolvers {
    /// Lifetime statistics of one mode/perspective pair.
    pub async fn get_lifetime_stats(
        &self,
        account_id: &str,
        game_mode: GameMode,
        perspective: Perspective,
    ) -> Result<GameModeStats, PubgError> {
        self.preflight(
            &json!({
                "accountId": account_id,
                "gameMode": game_mode,
                "perspective": perspective,
            }),
            &["accountId", "gameMode", "perspective"],
        )?;

        self.mode_stats(&["players", account_id, "seasons", "lifetime"], game_mode, perspective)
            .await
    }

    /// Statistics of one season for one mode/perspective pair.
    pub async fn get_season_stats(
        &self,
        account_id: &str,
        season_id: &str,
        game_mode: GameMode,
        perspective: Perspective,
    ) -> Result<GameModeStats, PubgError> {
        self.preflight(
            &json!({
                "accountId": account_id,
                "seasonId": season_id,
                "gameMode": game_mode,
                "perspective": perspective,
            }),
            &["accountId", "seasonId", "gameMode", "perspective"],
        )?;

        self.mode_stats(&["players", account_id, "seasons", season_id], game_mode, perspective)
            .await
    }

    /// Match IDs a player played in one season for one mode/perspective pair.
    pub async fn get_season_match_ids(
        &self,
        account_id: &str,
        season_id: &str,
        game_mode: GameMode,
        perspective: Perspective,
    ) -> Result<Vec<String>, PubgError> {
        self.preflight(
            &json!({
                "accountId": account_id,
                "seasonId": season_id,
                "gameMode": game_mode,
                "perspective": perspective,
            }),
            &["accountId", "seasonId", "gameMode", "perspective"],
        )?;

        let key = matches_key(game_mode, perspective);
        debug!("Season match list key: {}", key);

        let doc = self
            .fetch_document(&["players", account_id, "seasons", season_id], false)
            .await?;
        Ok(doc.primary()?.related_ids(&key))
    }

    /// Recent match IDs of a player.
    pub async fn get_player_match_ids(&self, account_id: &str) -> Result<Vec<String>, PubgError> {
        self.preflight(&json!({ "accountId": account_id }), &["accountId"])?;

        let doc = self
            .fetch_document(&["players", account_id], false)
            .await?;
        Ok(doc.primary()?.related_ids("matches"))
    }

    /// `data.attributes.gameModeStats[modeKey]`, or all-null stats when any
    /// level is missing.
    async fn mode_stats(
        &self,
        segments: &[&str],
        game_mode: GameMode,
        perspective: Perspective,
    ) -> Result<GameModeStats, PubgError> {
        let key = mode_key(game_mode, perspective);
        debug!("Game mode stats key: {}", key);

        let doc = self.fetch_document(segments, false).await?;
        doc.primary()?
            .attribute_or_default(&["gameModeStats", key.as_str()])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::resolvers::tests::resolvers_over;
    use crate::error::PubgError;
    use crate::keys::{GameMode, Perspective};
    use crate::models::GameModeStats;
    use crate::upstream::RecordingTransport;

    #[tokio::test]
    async fn test_lifetime_stats_tpp_uses_bare_mode_key() {
        let (resolvers, transport) = resolvers_over(RecordingTransport::new().respond(
            "/players/account.123/seasons/lifetime",
            json!({"data": {"attributes": {"gameModeStats": {
                "squad": {"kills": 10},
                "squad-fpp": {"kills": 99}
            }}}}),
        ));

        let stats = resolvers
            .get_lifetime_stats("account.123", GameMode::Squad, Perspective::Tpp)
            .await
            .unwrap();

        assert_eq!(
            stats,
            GameModeStats {
                kills: Some(10),
                ..Default::default()
            }
        );
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_lifetime_stats_fpp_uses_suffixed_key() {
        let (resolvers, _) = resolvers_over(RecordingTransport::new().respond(
            "/players/account.123/seasons/lifetime",
            json!({"data": {"attributes": {"gameModeStats": {
                "duo": {"wins": 1},
                "duo-fpp": {"wins": 5}
            }}}}),
        ));

        let stats = resolvers
            .get_lifetime_stats("account.123", GameMode::Duo, Perspective::Fpp)
            .await
            .unwrap();
        assert_eq!(stats.wins, Some(5));
    }

    #[tokio::test]
    async fn test_lifetime_stats_missing_path_defaults() {
        let (resolvers, _) = resolvers_over(
            RecordingTransport::new()
                .respond("/players/a/seasons/lifetime", json!({"data": {"id": "lifetime"}})),
        );

        let stats = resolvers
            .get_lifetime_stats("a", GameMode::Solo, Perspective::Fpp)
            .await
            .unwrap();
        assert_eq!(stats, GameModeStats::default());
    }

    #[tokio::test]
    async fn test_season_stats() {
        let (resolvers, _) = resolvers_over(RecordingTransport::new().respond(
            "/players/a/seasons/s1",
            json!({"data": {"attributes": {"gameModeStats": {"solo-fpp": {"kills": 4, "top10s": 2}}}}}),
        ));

        let stats = resolvers
            .get_season_stats("a", "s1", GameMode::Solo, Perspective::Fpp)
            .await
            .unwrap();
        assert_eq!(stats.kills, Some(4));
        assert_eq!(stats.top_10s, Some(2));
    }

    #[tokio::test]
    async fn test_season_stats_requires_season_id() {
        let (resolvers, transport) = resolvers_over(RecordingTransport::new());

        let err = resolvers
            .get_season_stats("a", "", GameMode::Solo, Perspective::Fpp)
            .await
            .unwrap_err();

        assert!(matches!(err, PubgError::MissingArgument(ref n) if n == "seasonId"));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_season_match_ids() {
        let (resolvers, _) = resolvers_over(RecordingTransport::new().respond(
            "/players/a/seasons/s1",
            json!({"data": {"relationships": {
                "matchesSquadFPP": {"data": [{"id": "m1", "type": "match"}, {"id": "m2", "type": "match"}]},
                "matchesSquad": {"data": [{"id": "m3", "type": "match"}]}
            }}}),
        ));

        let ids = resolvers
            .get_season_match_ids("a", "s1", GameMode::Squad, Perspective::Fpp)
            .await
            .unwrap();
        assert_eq!(ids, vec!["m1", "m2"]);
    }

    #[tokio::test]
    async fn test_season_match_ids_absent_relationship() {
        let (resolvers, _) = resolvers_over(RecordingTransport::new().respond(
            "/players/a/seasons/s1",
            json!({"data": {"relationships": {"matchesSquad": {"data": [{"id": "m3"}]}}}}),
        ));

        let ids = resolvers
            .get_season_match_ids("a", "s1", GameMode::Duo, Perspective::Tpp)
            .await
            .unwrap();
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_player_match_ids() {
        let (resolvers, transport) = resolvers_over(RecordingTransport::new().respond(
            "/players/account.123",
            json!({"data": {"id": "account.123", "relationships": {
                "matches": {"data": [{"id": "m1", "type": "match"}]}
            }}}),
        ));

        let ids = resolvers.get_player_match_ids("account.123").await.unwrap();
        assert_eq!(ids, vec!["m1"]);
        assert_eq!(
            transport.calls(),
            vec!["https://upstream.test/shards/steam/players/account.123".to_string()]
        );
    }

    #[tokio::test]
    async fn test_player_match_ids_with_null_sibling_relationship() {
        let (resolvers, _) = resolvers_over(RecordingTransport::new().respond(
            "/players/a",
            json!({"data": {"id": "a", "relationships": {
                "matches": {"data": [{"id": "m1"}]},
                "assets": null
            }}}),
        ));

        assert_eq!(resolvers.get_player_match_ids("a").await.unwrap(), vec!["m1"]);
    }

    #[tokio::test]
    async fn test_account_id_is_a_single_path_segment() {
        let (resolvers, transport) = resolvers_over(RecordingTransport::new().respond(
            "/players/a%2F..%2Fmatches%3Fx%23y",
            json!({"data": {"id": "a"}}),
        ));

        assert!(resolvers
            .get_player_match_ids("a/../matches?x#y")
            .await
            .unwrap()
            .is_empty());
        assert_eq!(
            transport.calls(),
            vec!["https://upstream.test/shards/steam/players/a%2F..%2Fmatches%3Fx%23y".to_string()]
        );
    }

    #[tokio::test]
    async fn test_fractional_integer_stat_is_null() {
        let (resolvers, _) = resolvers_over(RecordingTransport::new().respond(
            "/players/a/seasons/lifetime",
            json!({"data": {"attributes": {"gameModeStats": {
                "solo-fpp": {"kills": 2.7, "wins": 3.0, "damageDealt": 2.7}
            }}}}),
        ));

        let stats = resolvers
            .get_lifetime_stats("a", GameMode::Solo, Perspective::Fpp)
            .await
            .unwrap();
        assert_eq!(stats.kills, None);
        assert_eq!(stats.wins, Some(3));
        assert_eq!(stats.damage_dealt, Some(2.7));
    }

    #[tokio::test]
    async fn test_player_match_ids_without_relationships() {
        let (resolvers, _) = resolvers_over(
            RecordingTransport::new().respond("/players/a", json!({"data": {"id": "a"}})),
        );

        assert!(resolvers.get_player_match_ids("a").await.unwrap().is_empty());
    }
}
