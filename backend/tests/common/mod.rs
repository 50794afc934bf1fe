#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use levelup_api::{build_app, config::Config, database::Database};
use serde_json::{Value, json};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub db: Database,
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        acquire_timeout_seconds: 3,
        jwt_secret: "test_secret_key_for_testing_purposes_only".to_string(),
        jwt_expires_in_seconds: 3600,
        server_port: 0,
        bcrypt_cost: 4,
    }
}

impl TestApp {
    pub async fn spawn() -> TestApp {
        let db = Database::in_memory().await.expect("open in-memory database");
        db.migrate().await.expect("apply migrations");

        let router = build_app(db.pool().clone(), test_config());
        TestApp { router, db }
    }

    /// Sends one request and returns the status plus the JSON body
    /// (`Value::Null` when the body is empty).
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("build request"),
            None => builder.body(Body::empty()).expect("build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("body is JSON")
        };

        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None, None).await
    }

    /// Registers a gamer and returns its token.
    pub async fn register(&self, username: &str) -> String {
        let (status, body) = self
            .request(
                "POST",
                "/register",
                None,
                Some(json!({
                    "username": username,
                    "password": "me",
                    "email": format!("{username}@levelup.test"),
                    "first_name": "Test",
                    "last_name": username,
                    "address": "100 Infinity Way",
                    "phone_number": "555-1212",
                    "bio": "Love those gamez!!"
                })),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        body["token"].as_str().expect("token").to_string()
    }

    /// Returns the caller's gamer profile.
    pub async fn me(&self, token: &str) -> Value {
        let (status, body) = self.request("GET", "/me", Some(token), None).await;
        assert_eq!(status, StatusCode::OK);
        body
    }

    pub async fn create_game_type(&self, token: &str, label: &str) -> i64 {
        let (status, body) = self
            .request("POST", "/gametypes", Some(token), Some(json!({ "label": label })))
            .await;

        assert_eq!(status, StatusCode::CREATED, "game type failed: {body}");
        body["id"].as_i64().expect("game type id")
    }

    pub async fn create_game(&self, token: &str, title: &str, game_type: i64) -> i64 {
        let (status, body) = self
            .request(
                "POST",
                "/games",
                Some(token),
                Some(json!({
                    "title": title,
                    "maker": "Milton Bradley",
                    "skill_level": 5,
                    "number_of_players": 6,
                    "game_type": game_type
                })),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED, "game failed: {body}");
        body["id"].as_i64().expect("game id")
    }

    pub async fn create_event(&self, token: &str, game: i64, description: &str) -> i64 {
        let (status, body) = self
            .request(
                "POST",
                "/events",
                Some(token),
                Some(json!({
                    "game": game,
                    "description": description,
                    "date": "2026-12-24",
                    "time": "19:00:00"
                })),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED, "event failed: {body}");
        body["id"].as_i64().expect("event id")
    }
}
