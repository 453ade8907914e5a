//! Shared helpers for router-level tests backed by the in-memory store.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use garage_api::{AppState, config::ApiConfig};
use garage_core::store::MemoryStore;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const SECRET: &str = "test-secret";
pub const ADMIN_EMAIL: &str = "admin@garagem.com";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(
            store.clone(),
            ApiConfig {
                bind_addr: "127.0.0.1:0".into(),
                jwt_secret: SECRET.into(),
                admin_email: ADMIN_EMAIL.into(),
            },
        );
        Self {
            router: garage_api::router(state),
            store,
        }
    }

    /// Send a request and return the status plus parsed JSON body (`Null` if empty).
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let req = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send_raw(req).await
    }

    pub async fn send_raw(&self, req: Request<Body>) -> (StatusCode, Value) {
        let resp = self.router.clone().oneshot(req).await.expect("request");
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("parse JSON")
        };
        (status, json)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> (StatusCode, Value) {
        self.send(
            Method::POST,
            "/register",
            None,
            Some(json!({"name": name, "email": email, "password": password})),
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> (StatusCode, Value) {
        self.send(
            Method::POST,
            "/login",
            None,
            Some(json!({"email": email, "password": password})),
        )
        .await
    }

    /// Register then log in, returning the session token.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> String {
        let (status, body) = self.register(name, email, password).await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        let (status, body) = self.login(email, password).await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["token"].as_str().expect("token").to_string()
    }

    pub async fn add_vehicle(&self, token: &str, plate: &str) -> Value {
        let (status, body) = self
            .send(
                Method::POST,
                "/vehicles",
                Some(token),
                Some(json!({
                    "model": "Civic",
                    "plate": plate,
                    "year": 2019,
                    "color": "blue",
                    "lastServiceDate": "2024-03-01",
                    "nextServiceDate": "2025-03-01"
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create vehicle failed: {body}");
        body
    }
}
