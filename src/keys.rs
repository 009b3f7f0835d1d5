//! Composite lookup keys derived from game mode and perspective.
//!
//! The upstream API indexes per-mode statistics by a "mode key"
//! (`squad`, `squad-fpp`, ...) and per-mode season match lists by a
//! "matches key" (`matchesSquad`, `matchesSquadFPP`, ...). The two naming
//! schemes are asymmetric and are kept exactly as upstream spells them.

use std::fmt;

use async_graphql::Enum;
use serde::{Deserialize, Serialize};

/// Team size of a match.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[graphql(rename_items = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Solo,
    Duo,
    Squad,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Solo, GameMode::Duo, GameMode::Squad];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Solo => "solo",
            GameMode::Duo => "duo",
            GameMode::Squad => "squad",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Camera perspective: first person or third person.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[graphql(rename_items = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Perspective {
    #[default]
    Fpp,
    Tpp,
}

impl Perspective {
    pub const ALL: [Perspective; 2] = [Perspective::Fpp, Perspective::Tpp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Perspective::Fpp => "fpp",
            Perspective::Tpp => "tpp",
        }
    }
}

impl fmt::Display for Perspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key of a `gameModeStats` entry: `"<mode>-fpp"` for first person, bare
/// `"<mode>"` for third person.
pub fn mode_key(game_mode: GameMode, perspective: Perspective) -> String {
    match perspective {
        Perspective::Fpp => format!("{}-fpp", game_mode),
        Perspective::Tpp => game_mode.to_string(),
    }
}

/// Key of a season's match-list relationship, e.g. `matchesSquadFPP`.
pub fn matches_key(game_mode: GameMode, perspective: Perspective) -> String {
    let suffix = match perspective {
        Perspective::Fpp => "FPP",
        Perspective::Tpp => "",
    };
    format!("matches{}{}", capitalize(game_mode.as_str()), suffix)
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
