mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_game_lifecycle() {
    let app = TestApp::spawn().await;
    let token = app.register("steve").await;
    let me = app.me(&token).await;
    let board_game = app.create_game_type(&token, "Board game").await;

    // Create
    let (status, created) = app
        .request(
            "POST",
            "/games",
            Some(&token),
            Some(json!({
                "title": "Clue",
                "maker": "Milton Bradley",
                "skill_level": 5,
                "number_of_players": 6,
                "game_type": board_game
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["title"], "Clue");
    assert_eq!(created["maker"], "Milton Bradley");
    assert_eq!(created["skill_level"], 5);
    assert_eq!(created["number_of_players"], 6);
    assert_eq!(created["game_type"]["id"], board_game);
    assert_eq!(created["game_type"]["label"], "Board game");
    assert_eq!(created["gamer"]["id"], me["id"]);
    assert_eq!(created["gamer"]["user"], me["user"]["id"]);

    let id = created["id"].as_i64().unwrap();

    // Retrieve
    let (status, fetched) = app.get(&format!("/games/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    // Update
    let (status, body) = app
        .request(
            "PUT",
            &format!("/games/{id}"),
            Some(&token),
            Some(json!({
                "title": "Sorry",
                "maker": "Hasbro",
                "skill_level": 2,
                "number_of_players": 4,
                "game_type": board_game
            })),
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (_, fetched) = app.get(&format!("/games/{id}")).await;
    assert_eq!(fetched["title"], "Sorry");
    assert_eq!(fetched["maker"], "Hasbro");
    assert_eq!(fetched["skill_level"], 2);
    assert_eq!(fetched["number_of_players"], 4);
    assert_eq!(fetched["gamer"]["id"], me["id"]);

    // Destroy
    let (status, _) = app
        .request("DELETE", &format!("/games/{id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.get(&format!("/games/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["error_type"], "not_found");
}

#[tokio::test]
async fn test_missing_game_is_not_found() {
    let app = TestApp::spawn().await;
    let token = app.register("steve").await;
    let board_game = app.create_game_type(&token, "Board game").await;

    let (status, _) = app.get("/games/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Existence is checked before the body, so a bad body still yields 404
    let (status, _) = app
        .request("PUT", "/games/999", Some(&token), Some(json!({ "title": 1 })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .request(
            "PUT",
            "/games/999",
            Some(&token),
            Some(json!({
                "title": "Clue",
                "maker": "Milton Bradley",
                "skill_level": 5,
                "number_of_players": 6,
                "game_type": board_game
            })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.request("DELETE", "/games/999", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_only_owner_changes_game() {
    let app = TestApp::spawn().await;
    let owner = app.register("steve").await;
    let other = app.register("joe").await;
    let board_game = app.create_game_type(&owner, "Board game").await;
    let id = app.create_game(&owner, "Clue", board_game).await;

    let (status, body) = app
        .request(
            "PUT",
            &format!("/games/{id}"),
            Some(&other),
            Some(json!({
                "title": "Mine now",
                "maker": "Hasbro",
                "skill_level": 1,
                "number_of_players": 2,
                "game_type": board_game
            })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["error_type"], "permission_denied");

    let (status, _) = app
        .request("DELETE", &format!("/games/{id}"), Some(&other), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, fetched) = app.get(&format!("/games/{id}")).await;
    assert_eq!(fetched["title"], "Clue");
}

#[tokio::test]
async fn test_create_game_rejects_bad_input() {
    let app = TestApp::spawn().await;
    let token = app.register("steve").await;
    let board_game = app.create_game_type(&token, "Board game").await;

    let (status, body) = app
        .request(
            "POST",
            "/games",
            Some(&token),
            Some(json!({
                "title": "Clue",
                "maker": "Milton Bradley",
                "skill_level": 5,
                "number_of_players": 6,
                "game_type": 42
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["error_type"], "validation_error");
    assert_eq!(body["error"]["details"][0]["field"], "game_type");

    let (status, body) = app
        .request(
            "POST",
            "/games",
            Some(&token),
            Some(json!({
                "title": "Clue",
                "maker": "Milton Bradley",
                "skill_level": 11,
                "number_of_players": 6,
                "game_type": board_game
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["details"][0]["field"], "skill_level");

    // Missing required field
    let (status, body) = app
        .request(
            "POST",
            "/games",
            Some(&token),
            Some(json!({ "title": "Clue" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["details"][0]["field"], "body");

    let (_, games) = app.get("/games").await;
    assert_eq!(games, json!([]));
}

#[tokio::test]
async fn test_create_game_requires_token() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .request("POST", "/games", None, Some(json!({ "title": "Clue" })))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["error_type"], "unauthorized");
}

#[tokio::test]
async fn test_list_games_by_type() {
    let app = TestApp::spawn().await;
    let token = app.register("steve").await;
    let board_game = app.create_game_type(&token, "Board game").await;
    let card_game = app.create_game_type(&token, "Card game").await;

    let clue = app.create_game(&token, "Clue", board_game).await;
    let uno = app.create_game(&token, "Uno", card_game).await;
    let risk = app.create_game(&token, "Risk", board_game).await;

    let (status, all) = app.get("/games").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![clue, uno, risk]);

    let (_, boards) = app.get(&format!("/games?type={board_game}")).await;
    let ids: Vec<i64> = boards
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![clue, risk]);

    let (status, none) = app.get("/games?type=999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(none, json!([]));

    let (status, none) = app.get("/games?type=board").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn test_game_type_in_use_cannot_be_deleted() {
    let app = TestApp::spawn().await;
    let token = app.register("steve").await;
    let board_game = app.create_game_type(&token, "Board game").await;
    let unused = app.create_game_type(&token, "Dice game").await;
    app.create_game(&token, "Clue", board_game).await;

    let (status, body) = app
        .request("DELETE", &format!("/gametypes/{board_game}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["error_type"], "conflict");

    let (status, _) = app
        .request("DELETE", &format!("/gametypes/{unused}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&format!("/gametypes/{unused}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_game_type_update() {
    let app = TestApp::spawn().await;
    let token = app.register("steve").await;
    let id = app.create_game_type(&token, "Board game").await;

    let (status, _) = app
        .request(
            "PUT",
            &format!("/gametypes/{id}"),
            Some(&token),
            Some(json!({ "label": "Tabletop" })),
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, fetched) = app.get(&format!("/gametypes/{id}")).await;
    assert_eq!(fetched, json!({ "id": id, "label": "Tabletop" }));

    let (status, _) = app
        .request(
            "PUT",
            "/gametypes/999",
            Some(&token),
            Some(json!({ "label": "Tabletop" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .request(
            "PUT",
            &format!("/gametypes/{id}"),
            Some(&token),
            Some(json!({ "label": "" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, all) = app.get("/gametypes").await;
    assert_eq!(all, json!([{ "id": id, "label": "Tabletop" }]));
}

#[tokio::test]
async fn test_update_game_rejects_bad_input() {
    let app = TestApp::spawn().await;
    let token = app.register("steve").await;
    let board_game = app.create_game_type(&token, "Board game").await;
    let id = app.create_game(&token, "Clue", board_game).await;

    let (status, body) = app
        .request(
            "PUT",
            &format!("/games/{id}"),
            Some(&token),
            Some(json!({
                "title": "Clue",
                "maker": "Milton Bradley",
                "skill_level": 5,
                "number_of_players": 6,
                "game_type": 999
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["details"][0]["field"], "game_type");

    let (status, body) = app
        .request(
            "PUT",
            &format!("/games/{id}"),
            Some(&token),
            Some(json!({
                "title": "Clue",
                "maker": "Milton Bradley",
                "skill_level": 5,
                "number_of_players": 0,
                "game_type": board_game
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["details"][0]["field"], "number_of_players");

    let (_, fetched) = app.get(&format!("/games/{id}")).await;
    assert_eq!(fetched["number_of_players"], 6);
    assert_eq!(fetched["game_type"]["id"], board_game);
}

#[tokio::test]
async fn test_create_game_ignores_owner_in_body() {
    let app = TestApp::spawn().await;
    let token = app.register("steve").await;
    let other = app.register("joe").await;
    let me = app.me(&token).await;
    let other_profile = app.me(&other).await;
    let board_game = app.create_game_type(&token, "Board game").await;

    let (status, created) = app
        .request(
            "POST",
            "/games",
            Some(&token),
            Some(json!({
                "title": "Clue",
                "maker": "Milton Bradley",
                "skill_level": "5",
                "number_of_players": 6,
                "game_type": board_game,
                "gamer": other_profile["id"]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["gamer"]["id"], me["id"]);
    assert_eq!(created["skill_level"], 5);
}

#[tokio::test]
async fn test_list_games_uses_last_type_value() {
    let app = TestApp::spawn().await;
    let token = app.register("steve").await;
    let board_game = app.create_game_type(&token, "Board game").await;
    let card_game = app.create_game_type(&token, "Card game").await;
    app.create_game(&token, "Clue", board_game).await;
    let uno = app.create_game(&token, "Uno", card_game).await;

    let (status, games) = app
        .get(&format!("/games?type={board_game}&type={card_game}"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(games.as_array().unwrap().len(), 1);
    assert_eq!(games[0]["id"], uno);
}

#[tokio::test]
async fn test_unparseable_game_id_is_not_found() {
    let app = TestApp::spawn().await;
    let token = app.register("steve").await;

    let (status, body) = app.get("/games/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["error_type"], "not_found");
    assert!(body["message"].is_string());

    let (status, _) = app.get("/games/99999999999999999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app
        .request("PUT", "/gametypes/abc", Some(&token), Some(json!({ "label": "x" })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["error_type"], "not_found");
}
