//! Shared fixtures for unit and router tests.

use crate::auth::password::PasswordHasher;
use crate::routes;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{
        header::{CONTENT_TYPE, COOKIE, SET_COOKIE},
        Method, Request, StatusCode,
    },
    Router,
};
use serde_json::Value;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;
use tower::ServiceExt;
use tower_sessions::session::{Id, Record};
use tower_sessions::session_store::{self, SessionStore};
use tower_sessions::{MemoryStore, SessionManagerLayer};

/// bcrypt's minimum cost, to keep tests fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// A migrated in-memory database
///
/// Limited to one connection that never expires: every SQLite `:memory:`
/// connection is a separate database.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations apply");
    pool
}

pub async fn user_count(pool: &SqlitePool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("count users");
    count
}

pub async fn test_state() -> AppState {
    AppState::from_parts(memory_pool().await, PasswordHasher::new(TEST_BCRYPT_COST))
}

pub async fn test_app() -> (Router, AppState) {
    test_app_with_store(MemoryStore::default()).await
}

pub async fn test_app_with_store<S>(store: S) -> (Router, AppState)
where
    S: SessionStore + Clone,
{
    let state = test_state().await;
    let app = routes::router(state.clone())
        .layer(SessionManagerLayer::new(store).with_secure(false));
    (app, state)
}

pub fn post_json(uri: &str, body: Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::empty()).expect("valid request")
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    /// `name=value` pair from `Set-Cookie`, ready to send back in a `Cookie` header
    pub cookie: Option<String>,
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.expect("infallible");
    let status = response.status();
    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    TestResponse {
        status,
        body,
        cookie,
    }
}

/// Session store that works normally except that sessions can't be destroyed
#[derive(Debug, Clone, Default)]
pub struct FailingDeleteStore {
    inner: MemoryStore,
}

#[async_trait]
impl SessionStore for FailingDeleteStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        self.inner.create(record).await
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.inner.save(record).await
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        self.inner.load(session_id).await
    }

    async fn delete(&self, _session_id: &Id) -> session_store::Result<()> {
        Err(session_store::Error::Backend("store unavailable".to_string()))
    }
}
