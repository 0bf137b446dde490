//! Shared test helpers for integration tests.

// Each test binary compiles its own copy; not every binary uses every helper.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use chrono::NaiveDateTime;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use pulse_api::router::build_router;
use pulse_api::state::AppState;
use pulse_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application state for direct seeding and inspection
    pub state: AppState,
}

/// A collected response: status plus the full body as a string.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    /// Parse the body as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is not JSON")
    }
}

impl TestApp {
    /// Create a new test application with empty in-memory stores.
    pub fn new() -> Self {
        let state = AppState::new(AppConfig::default());
        let router = build_router(state.clone());
        Self { router, state }
    }

    /// Send a request to the in-process router and collect the response.
    pub async fn request(&self, method: &str, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router call failed");

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("failed to read body")
            .to_bytes();

        TestResponse {
            status,
            body: String::from_utf8(body.to_vec()).expect("body is not UTF-8"),
        }
    }

    /// Register a user through the HTTP interface.
    pub async fn register(&self, user_id: &str, user_name: &str) {
        let response = self
            .request(
                "POST",
                &format!("/register?userId={user_id}&userName={user_name}"),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    /// Record a session through the HTTP interface.
    pub async fn record_session(&self, user_id: &str, login: NaiveDateTime, logout: NaiveDateTime) {
        let response = self
            .request(
                "POST",
                &format!(
                    "/recordSession?userId={user_id}&loginTime={}&logoutTime={}",
                    fmt_time(login),
                    fmt_time(logout)
                ),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    }
}

/// Format a timestamp in the ISO-8601 local date-time wire format.
pub fn fmt_time(t: NaiveDateTime) -> String {
    t.format("%Y-%m-%dT%H:%M:%S").to_string()
}
