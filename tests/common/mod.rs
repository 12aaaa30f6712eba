#![allow(dead_code)]

use api_escola::{create_router, db, AppState};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

/// Aplicação de teste sobre uma base de dados num diretório temporário.
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub database_url: String,
    _dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let database_url = format!("sqlite:{}", dir.path().join("database.db").display());
        let pool = db::create_db_pool(&database_url)
            .await
            .expect("failed to open test database");
        let router = create_router(AppState::new(pool.clone()));
        Self {
            router,
            pool,
            database_url,
            _dir: dir,
        }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, String) {
        match body {
            Some(json) => self.request_raw(method, uri, &json.to_string()).await,
            None => {
                let request = Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .expect("failed to build request");
                self.send(request).await
            }
        }
    }

    /// Envia o texto tal como está, com content-type JSON.
    pub async fn request_raw(&self, method: &str, uri: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("failed to build request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let resp = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let text = String::from_utf8(bytes.to_vec()).expect("response body was not utf-8");
        (status, text)
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, text) = self.request("GET", uri, None).await;
        let json = serde_json::from_str(&text).unwrap_or(Value::String(text));
        (status, json)
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .expect("count failed")
    }

    pub async fn last_id(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT MAX(id) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .expect("max id failed")
    }
}
