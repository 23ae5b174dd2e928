//! # Health Check Handler
//!
//! Simple endpoint to check if the server is running.
//! Used by load balancers and monitoring systems.

use axum::Json;
use serde_json::{json, Value};

/// Health check endpoint
///
/// ## Route
/// GET /health
///
/// ## Response
/// ```json
/// {
///   "status": "healthy",
///   "service": "session-auth-server"
/// }
/// ```
///
/// Never touches the database or session store, so it always returns 200 OK
/// while the process is serving requests.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "session-auth-server"
    }))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{get, send, test_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn reports_healthy() {
        let (app, _) = test_app().await;

        let res = send(&app, get("/health", None)).await;

        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["status"], "healthy");
    }
}
