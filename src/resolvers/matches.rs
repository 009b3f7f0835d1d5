//! Match breakdown resolver.

use std::collections::HashMap;

use serde_json::{json, Value};
use tracing::debug;

use super::Resolvers;
use crate::error::PubgError;
use crate::models::{Document, MatchMeta, MatchStats, Player, Resource, Team};

const ROSTER: &str = "roster";
const PARTICIPANT: &str = "participant";

impl Resolvers {
    /// Full breakdown of one match: metadata, teams and players.
    pub async fn get_match_stats(&self, match_id: &str) -> Result<MatchStats, PubgError> {
        self.preflight(&json!({ "matchId": match_id }), &["matchId"])?;

        let doc = self
            .fetch_document(&["matches", match_id], false)
            .await?;
        assemble_match(&doc)
    }
}

/// Rebuild a match from its resource and the side-loaded rosters and
/// participants. References are resolved one level deep only.
pub fn assemble_match(doc: &Document) -> Result<MatchStats, PubgError> {
    let resource = doc.primary()?;
    let meta: MatchMeta = resource.attribute_or_default(&[])?;

    let players = doc
        .included_of(PARTICIPANT)
        .map(player_from_participant)
        .collect::<Result<Vec<_>, _>>()?;

    let teams = {
        let participants_by_id: HashMap<&str, &Player> =
            players.iter().map(|p| (p.id.as_str(), p)).collect();

        doc.included_of(ROSTER)
            .map(|roster| team_from_roster(roster, &participants_by_id))
            .collect::<Result<Vec<_>, _>>()?
    };

    debug!(
        "Assembled match {}: {} teams, {} players",
        resource.id,
        teams.len(),
        players.len()
    );

    Ok(MatchStats {
        id: resource.id,
        meta,
        teams,
        players,
    })
}

/// `{ id, ...attributes.stats }`
fn player_from_participant(resource: &Resource) -> Result<Player, PubgError> {
    let mut player: Player = resource.attribute_or_default(&["stats"])?;
    player.id = resource.id.clone();
    Ok(player)
}

/// `{ id, ...attributes.stats, won, playerIds }` plus the resolved players.
///
/// A roster without any `relationships` member is malformed and fails the
/// whole match.
fn team_from_roster(
    resource: &Resource,
    participants_by_id: &HashMap<&str, &Player>,
) -> Result<Team, PubgError> {
    if resource.relationships.is_none() {
        return Err(PubgError::UpstreamData(format!(
            "roster {} has no relationships",
            resource.id
        )));
    }

    let mut team: Team = resource.attribute_or_default(&["stats"])?;
    team.id = resource.id.clone();

    // Upstream sends `won` as the string "true"/"false". Only the exact
    // string "true" is a win; a JSON boolean is not.
    team.won = resource.attribute(&["won"]).and_then(Value::as_str) == Some("true");

    team.player_ids = resource.related_ids("participants");

    team.players = team
        .player_ids
        .iter()
        .filter_map(|id| participants_by_id.get(id.as_str()).map(|p| (*p).clone()))
        .collect();

    Ok(team)
}
