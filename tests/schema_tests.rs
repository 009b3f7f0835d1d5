use pubg_stats_gql::gql::schema_sdl;

#[test]
fn test_sdl_exposes_query_fields() {
    let sdl = schema_sdl();

    for field in [
        "getAccountId(username: String!): String!",
        "getSeasons: [Season!]!",
        "getCurrentSeason: Season\n",
        "getPlayerMatchIds(accountId: String!): [String!]!",
        "getMatchStats(matchId: String!): MatchStats!",
    ] {
        assert!(sdl.contains(field), "SDL should contain {:?}:\n{}", field, sdl);
    }

    for field in [
        "getLifetimeStats(",
        "getSeasonStats(",
        "getSeasonMatchIds(",
    ] {
        assert!(sdl.contains(field), "SDL should contain {:?}", field);
    }
}

#[test]
fn test_sdl_enums_and_defaults() {
    let sdl = schema_sdl();

    assert!(sdl.contains("enum GameMode"));
    assert!(sdl.contains("enum Perspective"));
    assert!(sdl.contains("gameMode: GameMode! = solo"));
    assert!(sdl.contains("perspective: Perspective! = fpp"));
}

#[test]
fn test_sdl_keeps_upstream_stat_names() {
    let sdl = schema_sdl();

    assert!(sdl.contains("dBNOs: Int"));
    assert!(sdl.contains("top10s: Int"));
    assert!(sdl.contains("rankPointsTitle: String"));
    assert!(sdl.contains("DBNOs: Int"));
    assert!(sdl.contains("playerIds: [String!]!"));
    assert!(sdl.contains("isOffSeason: Boolean!"));
}
