use std::time::Duration;

use axum::http::StatusCode;
use models::domains::{scores, users};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::json;

use crate::{TestApp, TestClient, player, spawn_app};

async fn record_count(app: &TestApp) -> u64 {
    scores::Entity::find().count(&app.conn).await.unwrap()
}

#[tokio::test]
async fn submissions_accumulate() {
    let app = spawn_app().await;
    let mut alice = player(&app, "alice").await;

    let (status, body) = alice
        .post("/scores", json!({ "game_name": "Wordle", "score": 10 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Score saved successfully!");
    assert_eq!(body["data"]["score"], 10);

    let (status, body) = alice
        .post("/scores", json!({ "game_name": "Wordle", "score": 15 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Score updated successfully!");
    assert_eq!(body["data"]["game_name"], "Wordle");
    assert_eq!(body["data"]["score"], 25);

    let (status, board) = alice.get("/scores?game_name=Wordle").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(board, json!([{ "username": "alice", "score": 25 }]));
    assert_eq!(record_count(&app).await, 1);
}

#[tokio::test]
async fn first_play_of_another_game_is_a_new_entry() {
    let app = spawn_app().await;
    let mut alice = player(&app, "alice").await;

    alice
        .post("/scores", json!({ "game_name": "Wordle", "score": 10 }))
        .await;
    let (_, body) = alice
        .post("/scores", json!({ "game_name": " Sudoku ", "score": 3 }))
        .await;
    assert_eq!(body["message"], "Score saved successfully!");
    assert_eq!(body["data"]["game_name"], "Sudoku");

    let (_, body) = alice
        .post("/scores", json!({ "game_name": "Sudoku", "score": 0 }))
        .await;
    assert_eq!(body["message"], "Score updated successfully!");
    assert_eq!(body["data"]["score"], 3);
}

#[tokio::test]
async fn sessions_of_deleted_accounts_cannot_submit() {
    let app = spawn_app().await;
    let mut alice = player(&app, "alice").await;

    users::Entity::delete_many()
        .filter(users::Column::Username.eq("alice"))
        .exec(&app.conn)
        .await
        .unwrap();

    let (status, body) = alice
        .post("/scores", json!({ "game_name": "Wordle", "score": 10 }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "User is not logged in.");
    let (status, _) = alice.get("/scores/me").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(record_count(&app).await, 0);
}

#[tokio::test]
async fn unauthenticated_submissions_write_nothing() {
    let app = spawn_app().await;
    let mut anonymous = TestClient::new(&app);

    let (status, body) = anonymous
        .post("/scores", json!({ "game_name": "Wordle", "score": 10 }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "User is not logged in.");
    assert_eq!(record_count(&app).await, 0);
}

#[tokio::test]
async fn logging_out_revokes_submission() {
    let app = spawn_app().await;
    let mut alice = player(&app, "alice").await;

    alice.post("/auth/logout", json!({})).await;
    let (status, _) = alice
        .post("/scores", json!({ "game_name": "Sudoku", "score": 1 }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(record_count(&app).await, 0);
}

#[tokio::test]
async fn identity_comes_from_the_session_only() {
    let app = spawn_app().await;
    player(&app, "bob").await;
    let mut alice = player(&app, "alice").await;

    // A forged user field in the body is ignored.
    let (status, _) = alice
        .post(
            "/scores",
            json!({ "game_name": "2048", "score": 64, "username": "bob", "user_id": "bob" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, board) = alice.get("/scores?game_name=2048").await;
    assert_eq!(board, json!([{ "username": "alice", "score": 64 }]));
}

#[tokio::test]
async fn rejects_bad_submissions() {
    let app = spawn_app().await;
    let mut alice = player(&app, "alice").await;

    let (status, body) = alice
        .post("/scores", json!({ "game_name": "Chess", "score": 10 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Unknown game: Chess");

    let (status, _) = alice
        .post("/scores", json!({ "game_name": "Wordle", "score": -5 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = alice
        .post("/scores", json!({ "game_name": "Wordle", "score": "ten" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = alice.post("/scores", json!({ "game_name": "Wordle" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(record_count(&app).await, 0);
}

#[tokio::test]
async fn leaderboard_orders_ties_by_recency() {
    let app = spawn_app().await;
    let mut alice = player(&app, "alice").await;
    let mut bob = player(&app, "bob").await;
    let mut carol = player(&app, "carol").await;

    alice
        .post("/scores", json!({ "game_name": "FlappyBird", "score": 50 }))
        .await;
    bob.post("/scores", json!({ "game_name": "FlappyBird", "score": 80 }))
        .await;
    tokio::time::sleep(Duration::from_millis(5)).await;
    carol
        .post("/scores", json!({ "game_name": "FlappyBird", "score": 80 }))
        .await;

    let (status, board) = alice.get("/scores?game_name=FlappyBird").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        board,
        json!([
            { "username": "carol", "score": 80 },
            { "username": "bob", "score": 80 },
            { "username": "alice", "score": 50 },
        ])
    );
}

#[tokio::test]
async fn empty_boards_succeed_and_unknown_games_fail() {
    let app = spawn_app().await;
    let mut client = TestClient::new(&app);

    let (status, board) = client.get("/scores?game_name=Sudoku").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(board, json!([]));

    let (status, board) = client.get("/scores").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(board, json!([]));

    let (status, board) = client.get("/scores?game_name=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(board, json!([]));

    let (status, body) = client.get("/scores?game_name=Chess").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn lists_the_callers_own_totals() {
    let app = spawn_app().await;
    let mut alice = player(&app, "alice").await;

    alice
        .post("/scores", json!({ "game_name": "Sudoku", "score": 3 }))
        .await;
    alice
        .post("/scores", json!({ "game_name": "2048", "score": 512 }))
        .await;

    let (status, body) = alice.get("/scores/me").await;
    assert_eq!(status, StatusCode::OK);
    let totals: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| (s["game_name"].as_str().unwrap().to_string(), s["score"].as_i64().unwrap()))
        .collect();
    assert_eq!(totals, vec![("2048".to_string(), 512), ("Sudoku".to_string(), 3)]);

    let mut anonymous = TestClient::new(&app);
    let (status, _) = anonymous.get("/scores/me").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
