use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use moodplay::api::{create_router, AppState, REQUEST_ID_HEADER};
use moodplay::config::Config;

fn create_test_server() -> TestServer {
    let state = AppState::new(&Config::default()).unwrap();
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

async fn seed_library(server: &TestServer) {
    let response = server
        .post("/api/v1/library")
        .json(&json!({
            "games": [
                {
                    "id": 413150,
                    "title": "Stardew Valley",
                    "genres": ["Simulation", "RPG", 23],
                    "moods": ["cozy", "zen"],
                    "description": "Build the farm of your dreams",
                    "estimatedSessionMinutes": 40
                },
                {
                    "id": 1145360,
                    "title": "Hades",
                    "genres": ["Rogue-lite", 1],
                    "description": "Battle out of hell in this rogue-like dungeon crawler"
                },
                {
                    "id": "gog-disco-elysium",
                    "title": "Disco Elysium",
                    "genres": ["Role-Playing"],
                    "description": "A detective story about choices and character"
                }
            ]
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let server = create_test_server();
    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static(REQUEST_ID_HEADER),
            HeaderValue::from_static("trace-me-123"),
        )
        .await;
    assert_eq!(
        response.header(HeaderName::from_static(REQUEST_ID_HEADER)),
        "trace-me-123"
    );

    // Generated when the client sends none
    let response = server.get("/health").await;
    assert!(!response
        .header(HeaderName::from_static(REQUEST_ID_HEADER))
        .is_empty());
}

#[tokio::test]
async fn test_taxonomy() {
    let server = create_test_server();
    let response = server.get("/api/v1/taxonomy").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["version"], 3);
    assert_eq!(body["genres"].as_array().unwrap().len(), 16);
    assert_eq!(body["moods"].as_array().unwrap().len(), 16);
    assert!(!body["genres"]
        .as_array()
        .unwrap()
        .contains(&json!("unknown")));
    assert_eq!(body["masterMoods"][1]["id"], "brain-power");
}

#[tokio::test]
async fn test_import_normalizes_records() {
    let server = create_test_server();
    seed_library(&server).await;

    let response = server.get("/api/v1/library/413150").await;
    response.assert_status_ok();
    let game: Value = response.json();
    assert_eq!(game["genres"], json!(["simulation", "rpg", "indie"]));
    assert_eq!(game["moods"], json!(["relaxing"]));
    assert_eq!(game["masterMoods"], json!(["zen"]));
    assert_eq!(game["moodsInferred"], false);

    let response = server.get("/api/v1/library/1145360").await;
    let game: Value = response.json();
    assert_eq!(game["genres"], json!(["roguelike", "action"]));
    assert_eq!(game["moodsInferred"], true);
    assert!(game["effectiveMoods"]
        .as_array()
        .unwrap()
        .contains(&json!("intense")));
}

#[tokio::test]
async fn test_reimport_counts_updates() {
    let server = create_test_server();
    seed_library(&server).await;

    let response = server
        .post("/api/v1/library")
        .json(&json!({
            "games": [{ "id": 1145360, "title": "Hades", "genres": ["Action"] }]
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let summary: Value = response.json();
    assert_eq!(summary["inserted"], 0);
    assert_eq!(summary["updated"], 1);

    let games: Vec<Value> = server.get("/api/v1/library").await.json();
    assert_eq!(games.len(), 3);
}

#[tokio::test]
async fn test_empty_import_is_rejected() {
    let server = create_test_server();
    let response = server
        .post("/api/v1/library")
        .json(&json!({ "games": [] }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("No games"));
}

#[tokio::test]
async fn test_unknown_game_is_not_found() {
    let server = create_test_server();
    let response = server.get("/api/v1/library/does-not-exist").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_library_filters() {
    let server = create_test_server();
    seed_library(&server).await;

    let games: Vec<Value> = server
        .get("/api/v1/library")
        .add_query_param("master_mood", "zen")
        .await
        .json();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0]["title"], "Stardew Valley");

    let games: Vec<Value> = server
        .get("/api/v1/library")
        .add_query_param("genre", "rpg")
        .await
        .json();
    assert_eq!(games.len(), 2);

    let games: Vec<Value> = server
        .get("/api/v1/library")
        .add_query_param("genre", "Role-Playing")
        .add_query_param("master_mood", "Zen")
        .await
        .json();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0]["title"], "Stardew Valley");

    let response = server
        .get("/api/v1/library")
        .add_query_param("genre", "Basket Weaving")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Basket Weaving"));

    let games: Vec<Value> = server
        .get("/api/v1/library")
        .add_query_param("q", "HADES")
        .await
        .json();
    assert_eq!(games.len(), 1);

    let games: Vec<Value> = server
        .get("/api/v1/library")
        .add_query_param("session", "short")
        .await
        .json();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0]["title"], "Hades");
}

#[tokio::test]
async fn test_recommendations() {
    let server = create_test_server();
    seed_library(&server).await;

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "mood": "Story Rich", "session": "long", "limit": 2 }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["context"]["mood"], "story-rich");
    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 2);
    assert_eq!(recommendations[0]["game"]["title"], "Disco Elysium");

    let top = &recommendations[0]["score"];
    assert_eq!(top["breakdown"]["moodMatch"], 40);
    assert_eq!(top["breakdown"]["genreFit"], 30);
    assert_eq!(top["breakdown"]["timeAlignment"], 20);
    assert_eq!(top["reasoning"]["confidence"], "high");
    assert_eq!(top["totalScore"], 100);
    assert_eq!(recommendations[1]["game"]["title"], "Stardew Valley");
    assert_eq!(recommendations[1]["score"]["totalScore"], 45);
}

#[tokio::test]
async fn test_recommendations_neutral_and_preferred_genre() {
    let server = create_test_server();
    seed_library(&server).await;

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "session": "short", "genre": "Roguelike" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["context"]["mood"], Value::Null);
    assert_eq!(body["context"]["preferredGenre"], "roguelike");

    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 3);
    for recommendation in recommendations {
        assert_eq!(recommendation["score"]["breakdown"]["moodMatch"], 5);
    }
    assert_eq!(recommendations[0]["game"]["title"], "Hades");
}

#[tokio::test]
async fn test_recommendation_limit_validation() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "mood": "chill", "session": "short", "limit": 0 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "mood": "chill", "session": "forever" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_malformed_record_does_not_reject_batch() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/library")
        .json(&json!({
            "games": [
                { "id": 1, "title": "Good", "genres": ["RPG"] },
                {
                    "id": 2,
                    "title": "Bad",
                    "genres": [-1, null, 2.5],
                    "moods": [42],
                    "estimatedSessionMinutes": 45.5
                }
            ]
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let summary: Value = response.json();
    assert_eq!(summary["inserted"], 2);

    let games: Vec<Value> = server.get("/api/v1/library").await.json();
    assert_eq!(games.len(), 2);

    let bad: Value = server.get("/api/v1/library/2").await.json();
    assert_eq!(bad["genres"], json!([]));
    assert_eq!(bad["estimatedSessionMinutes"], 46);

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "mood": "relaxing", "session": "medium" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    let bad = body["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["game"]["title"] == "Bad")
        .cloned()
        .unwrap();
    assert_eq!(bad["score"]["breakdown"]["moodMatch"], 5);
    assert_eq!(bad["score"]["breakdown"]["timeAlignment"], 20);
}

#[tokio::test]
async fn test_unparseable_body_gets_json_error() {
    let server = create_test_server();
    let response = server
        .post("/api/v1/library")
        .json(&json!({ "games": "not a list" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_clear_cache() {
    let server = create_test_server();
    seed_library(&server).await;

    server
        .post("/api/v1/recommendations")
        .json(&json!({ "mood": "intense", "session": "medium" }))
        .await
        .assert_status_ok();

    // Hades and Disco Elysium have no explicit moods
    let response = server.post("/api/v1/cache/clear").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "cleared": 2 }));

    let response = server.post("/api/v1/cache/clear").await;
    response.assert_json(&json!({ "cleared": 0 }));
}
