use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::api::state::AppState;
use crate::keys::{GameMode, Perspective};
use crate::models::{GameModeStats, MatchStats, Season};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Account ID of the player with the given in-game name.
    async fn get_account_id(&self, ctx: &Context<'_>, username: String) -> Result<String> {
        let state = ctx.data::<AppState>()?;
        state
            .resolvers
            .get_account_id(&username)
            .await
            .map_err(|e| e.extend())
    }

    /// Lifetime statistics for one game mode and perspective.
    async fn get_lifetime_stats(
        &self,
        ctx: &Context<'_>,
        account_id: String,
        #[graphql(default)] game_mode: GameMode,
        #[graphql(default)] perspective: Perspective,
    ) -> Result<GameModeStats> {
        let state = ctx.data::<AppState>()?;
        state
            .resolvers
            .get_lifetime_stats(&account_id, game_mode, perspective)
            .await
            .map_err(|e| e.extend())
    }

    async fn get_seasons(&self, ctx: &Context<'_>) -> Result<Vec<Season>> {
        let state = ctx.data::<AppState>()?;
        state.resolvers.get_seasons().await.map_err(|e| e.extend())
    }

    /// The season flagged current upstream, or null.
    async fn get_current_season(&self, ctx: &Context<'_>) -> Result<Option<Season>> {
        let state = ctx.data::<AppState>()?;
        state
            .resolvers
            .get_current_season()
            .await
            .map_err(|e| e.extend())
    }

    async fn get_season_stats(
        &self,
        ctx: &Context<'_>,
        account_id: String,
        season_id: String,
        #[graphql(default)] game_mode: GameMode,
        #[graphql(default)] perspective: Perspective,
    ) -> Result<GameModeStats> {
        let state = ctx.data::<AppState>()?;
        state
            .resolvers
            .get_season_stats(&account_id, &season_id, game_mode, perspective)
            .await
            .map_err(|e| e.extend())
    }

    /// Match IDs of one season, game mode and perspective.
    async fn get_season_match_ids(
        &self,
        ctx: &Context<'_>,
        account_id: String,
        season_id: String,
        #[graphql(default)] game_mode: GameMode,
        #[graphql(default)] perspective: Perspective,
    ) -> Result<Vec<String>> {
        let state = ctx.data::<AppState>()?;
        state
            .resolvers
            .get_season_match_ids(&account_id, &season_id, game_mode, perspective)
            .await
            .map_err(|e| e.extend())
    }

    /// Recent match IDs of a player.
    async fn get_player_match_ids(&self, ctx: &Context<'_>, account_id: String) -> Result<Vec<String>> {
        let state = ctx.data::<AppState>()?;
        state
            .resolvers
            .get_player_match_ids(&account_id)
            .await
            .map_err(|e| e.extend())
    }

    /// Metadata, teams and players of one match.
    async fn get_match_stats(&self, ctx: &Context<'_>, match_id: String) -> Result<MatchStats> {
        let state = ctx.data::<AppState>()?;
        state
            .resolvers
            .get_match_stats(&match_id)
            .await
            .map_err(|e| e.extend())
    }
}
