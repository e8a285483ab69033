use serde_json::{json, Value};

use crate::support::{create_game, roll, start_server};

#[tokio::test]
async fn roll_returns_scorecard() {
    let base = start_server().await;
    let client = reqwest::Client::new();
    let id = create_game(&client, &base).await;

    roll(&client, &base, id, 5).await;
    let resp = roll(&client, &base, id, 5).await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["frames"][0]["kind"], "spare");
    assert_eq!(body["frames"][0]["score"], json!({ "state": "pending" }));

    let body: Value = roll(&client, &base, id, 3).await.json().await.unwrap();
    assert_eq!(
        body["frames"][0]["score"],
        json!({ "state": "scored", "value": 13 })
    );
    assert_eq!(body["currentScore"], 13);
    assert_eq!(body["rollsPlayed"], 3);
}

#[tokio::test]
async fn perfect_game_over_http() {
    let base = start_server().await;
    let client = reqwest::Client::new();
    let id = create_game(&client, &base).await;

    for _ in 0..12 {
        assert_eq!(roll(&client, &base, id, 10).await.status(), 200);
    }

    let body: Value = client
        .get(format!("{base}/api/v1/bowling/{id}/score"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "complete");
    assert_eq!(body["total"], json!({ "state": "scored", "value": 300 }));

    let resp = roll(&client, &base, id, 10).await;
    assert_eq!(resp.status(), 409);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["reason"], "GameAlreadyComplete");
}

#[tokio::test]
async fn invalid_pins_return_400() {
    let base = start_server().await;
    let client = reqwest::Client::new();
    let id = create_game(&client, &base).await;

    let resp = roll(&client, &base, id, 11).await;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["reason"], "InvalidPinCount");

    let resp = roll(&client, &base, id, -2).await;
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn too_many_pins_return_400() {
    let base = start_server().await;
    let client = reqwest::Client::new();
    let id = create_game(&client, &base).await;

    roll(&client, &base, id, 8).await;
    let resp = roll(&client, &base, id, 3).await;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["reason"], "PinCountExceedsRemaining");

    let body: Value = client
        .get(format!("{base}/api/v1/bowling/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["knockedOverPinsPerRoll"], json!([8]));
}

#[tokio::test]
async fn roll_on_unknown_game_returns_404() {
    let base = start_server().await;
    let client = reqwest::Client::new();
    let resp = roll(&client, &base, 999, 1).await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn out_of_range_integers_reach_the_validator() {
    let base = start_server().await;
    let client = reqwest::Client::new();
    let id = create_game(&client, &base).await;

    for pins in [3_000_000_000_i64, -3_000_000_000, i64::MAX] {
        let resp = roll(&client, &base, id, pins).await;
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["reason"], "InvalidPinCount");
    }
}

#[tokio::test]
async fn malformed_roll_body_returns_json_400() {
    let base = start_server().await;
    let client = reqwest::Client::new();
    let id = create_game(&client, &base).await;

    for body in [json!({ "pins": "seven" }), json!({ "pins": 2.5 }), json!({})] {
        let resp = client
            .post(format!("{base}/api/v1/bowling/{id}/rolls"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["reason"], "MalformedRequest");
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn roll_with_pins_in_path() {
    let base = start_server().await;
    let client = reqwest::Client::new();
    let id = create_game(&client, &base).await;

    let resp = client
        .post(format!("{base}/api/v1/bowling/{id}/roll/10"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["frames"][0]["kind"], "strike");
    assert_eq!(body["rollsPlayed"], 1);

    let resp = client
        .post(format!("{base}/api/v1/bowling/{id}/roll/3000000000"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["reason"], "InvalidPinCount");

    let resp = client
        .post(format!("{base}/api/v1/bowling/{id}/roll/many"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["reason"], "MalformedRequest");

    let resp = client
        .post(format!("{base}/api/v1/bowling/999/roll/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}
