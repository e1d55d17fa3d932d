//! Single binary web server exposing the ranking engine as stateless JSON endpoints.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST (e.g. 127.0.0.1), PORT (e.g. 8080).
//! Storing rosters and rounds is left to the caller; every request carries the data it needs.

use actix_web::{
    get, post,
    web::Json,
    App, HttpResponse, HttpServer, Responder,
};
use chrono::Utc;
use ladder_league::{
    complete_round, group_fixtures, reorder_player_ranks, resolve_placement, start_round,
    validate_ranks, Fixture, Group, GroupFormat, GroupPlacement, LadderError, MatchRecord,
    MatchScoreMap, Player, PlayerId, RoundSnapshot,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct StartRoundBody {
    players: Vec<Player>,
    present_player_ids: Vec<PlayerId>,
}

/// A group as shown to the score entry screen.
#[derive(Serialize)]
struct GroupView {
    group_number: u32,
    format: Option<GroupFormat>,
    players: Vec<Player>,
    fixtures: Vec<Fixture>,
}

#[derive(Deserialize)]
struct PlacementBody {
    group: Group,
    group_number: u32,
    #[serde(default)]
    scores: MatchScoreMap,
}

#[derive(Serialize)]
struct PlacementResponse {
    placement: GroupPlacement,
    fixtures: Vec<Fixture>,
}

#[derive(Deserialize)]
struct CompleteRoundBody {
    players: Vec<Player>,
    present_player_ids: Vec<PlayerId>,
    groups: Vec<Group>,
    #[serde(default)]
    scores: MatchScoreMap,
}

#[derive(Serialize)]
struct CompleteRoundResponse {
    snapshot: RoundSnapshot,
    records: Vec<MatchRecord>,
}

#[derive(Deserialize)]
struct SetRankBody {
    players: Vec<Player>,
    player_id: PlayerId,
    new_rank: u32,
}

fn error_response(e: LadderError) -> HttpResponse {
    log::warn!("Rejected request: {}", e);
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "ladder-league",
    })
}

/// Split the present players into groups and list each group's matches.
#[post("/api/rounds/groups")]
async fn api_start_round(body: Json<StartRoundBody>) -> HttpResponse {
    if let Err(e) = validate_ranks(&body.players) {
        return error_response(e);
    }
    let present: HashSet<PlayerId> = body.present_player_ids.iter().copied().collect();
    let groups = match start_round(&body.players, &present) {
        Ok(groups) => groups,
        Err(e) => return error_response(e),
    };
    let no_scores = MatchScoreMap::new();
    let views: Vec<GroupView> = groups
        .into_iter()
        .zip(1u32..)
        .map(|(group, group_number)| GroupView {
            group_number,
            format: group.format(),
            fixtures: group_fixtures(&group, group_number, &no_scores),
            players: group.players,
        })
        .collect();
    HttpResponse::Ok().json(views)
}

/// Placement of one group for the scores entered so far.
#[post("/api/rounds/placement")]
async fn api_group_placement(body: Json<PlacementBody>) -> HttpResponse {
    if body.group_number == 0 {
        log::warn!("Rejected request: group number 0");
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": "Group numbers start at 1" }));
    }
    let placement = resolve_placement(&body.group, body.group_number, &body.scores);
    let fixtures = group_fixtures(&body.group, body.group_number, &body.scores);
    HttpResponse::Ok().json(PlacementResponse { placement, fixtures })
}

/// Complete a round: new ladder, snapshot and normalized match records.
#[post("/api/rounds/complete")]
async fn api_complete_round(body: Json<CompleteRoundBody>) -> HttpResponse {
    if let Err(e) = validate_ranks(&body.players) {
        return error_response(e);
    }
    let body = body.into_inner();
    let present: HashSet<PlayerId> = body.present_player_ids.iter().copied().collect();
    match complete_round(&body.players, &present, &body.groups, &body.scores) {
        Ok(outcome) => {
            let snapshot = RoundSnapshot::from_outcome(
                body.groups,
                body.scores,
                body.players,
                body.present_player_ids,
                &outcome,
                Utc::now(),
            );
            HttpResponse::Ok().json(CompleteRoundResponse {
                snapshot,
                records: outcome.records,
            })
        }
        Err(e) => error_response(e),
    }
}

/// Manually move one player to a new rank.
#[post("/api/players/rank")]
async fn api_set_rank(body: Json<SetRankBody>) -> HttpResponse {
    if let Err(e) = validate_ranks(&body.players) {
        return error_response(e);
    }
    match reorder_player_ranks(&body.players, body.player_id, body.new_rank) {
        Ok(players) => HttpResponse::Ok().json(players),
        Err(e) => error_response(e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(|| {
        App::new()
            .service(api_health)
            .service(api_start_round)
            .service(api_group_placement)
            .service(api_complete_round)
            .service(api_set_rank)
    })
    .bind(bind)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Value};

    fn ladder(n: u32) -> Vec<Player> {
        (1..=n).map(|r| Player::new(format!("P{r}"), r)).collect()
    }

    #[actix_web::test]
    async fn groups_endpoint_lists_fixtures() {
        let app = test::init_service(App::new().service(api_start_round)).await;
        let players = ladder(7);
        let ids: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
        let req = test::TestRequest::post()
            .uri("/api/rounds/groups")
            .set_json(json!({ "players": players, "present_player_ids": ids }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body[0]["format"], "bracket");
        assert_eq!(body[0]["fixtures"][3]["match_id"], "g1-r2-m2");
        assert_eq!(body[1]["format"], "round_robin");
        assert_eq!(body[1]["fixtures"][2]["match_id"], "g2-m3");
    }

    #[actix_web::test]
    async fn five_present_players_is_a_bad_request() {
        let app = test::init_service(App::new().service(api_start_round)).await;
        let players = ladder(6);
        let ids: Vec<PlayerId> = players.iter().take(5).map(|p| p.id).collect();
        let req = test::TestRequest::post()
            .uri("/api/rounds/groups")
            .set_json(json!({ "players": players, "present_player_ids": ids }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn complete_round_returns_snapshot_and_records() {
        let app = test::init_service(App::new().service(api_complete_round)).await;
        let players = ladder(4);
        let ids: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
        let req = test::TestRequest::post()
            .uri("/api/rounds/complete")
            .set_json(json!({
                "players": players,
                "present_player_ids": ids,
                "groups": [players],
                "scores": {
                    "g1-r1-m1": { "score1": "10", "score2": "5" },
                    "g1-r1-m2": { "score1": "10", "score2": "5" },
                    "g1-r2-m1": { "score1": "10", "score2": "8" },
                    "g1-r2-m2": { "score1": "10", "score2": "9" }
                }
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let after: Vec<&str> = body["snapshot"]["playersAfter"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(after, ["P1", "P2", "P4", "P3"]);
        assert_eq!(body["records"].as_array().unwrap().len(), 4);
    }

    #[actix_web::test]
    async fn rank_endpoint_rejects_out_of_range() {
        let app = test::init_service(App::new().service(api_set_rank)).await;
        let players = ladder(3);
        let req = test::TestRequest::post()
            .uri("/api/players/rank")
            .set_json(json!({ "players": players, "player_id": players[0].id, "new_rank": 4 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn rank_endpoint_rejects_duplicate_ranks() {
        let app = test::init_service(App::new().service(api_set_rank)).await;
        let mut players = ladder(3);
        players[2].rank = 2;
        let req = test::TestRequest::post()
            .uri("/api/players/rank")
            .set_json(json!({ "players": players, "player_id": players[0].id, "new_rank": 2 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn placement_endpoint_rejects_group_zero() {
        let app = test::init_service(App::new().service(api_group_placement)).await;
        let players = ladder(3);
        let req = test::TestRequest::post()
            .uri("/api/rounds/placement")
            .set_json(json!({ "group": players, "group_number": 0, "scores": {} }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Group numbers start at 1");
    }

    #[actix_web::test]
    async fn placement_endpoint_accepts_decimal_scores() {
        let app = test::init_service(App::new().service(api_group_placement)).await;
        let players = ladder(2);
        let req = test::TestRequest::post()
            .uri("/api/rounds/placement")
            .set_json(json!({
                "group": players,
                "group_number": 2,
                "scores": { "g2-m1": { "score1": "9.5", "score2": "10" } }
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["placement"][0]["name"], "P2");
    }
}
