#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::AUTHORIZATION;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use orgbot_core::types::DbId;
use orgbot_db::integration::{IntegrationStore, IntegrationTx};
use tower::ServiceExt;

use orgbot_api::auth::jwt::JwtConfig;
use orgbot_api::config::ServerConfig;
use orgbot_api::router::build_app_router;
use orgbot_api::state::AppState;

pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";
pub const DISCONNECT_PATH: &str = orgbot_api::router::WHATSAPP_DISCONNECT_PATH;

/// Build a test `ServerConfig` with a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router around the given integration store.
pub fn build_test_app(store: Arc<dyn IntegrationStore>) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        integrations: store,
    };

    build_app_router(state, &config)
}

/// Send a POST with an optional raw `Authorization` header value.
pub async fn post_with_auth(app: Router, uri: &str, authorization: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Recording integration store
// ---------------------------------------------------------------------------

/// One recorded call against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Begin,
    OrganizationExists(DbId),
    ClearMetaAppCredentials(DbId),
    ClearOrganizationWhatsapp(DbId),
    Commit,
    Rollback,
}

/// Which call, if any, should fail with a simulated database error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Begin,
    OrganizationExists,
    ClearMetaAppCredentials,
    ClearOrganizationWhatsapp,
    Commit,
    Ping,
}

/// In-memory [`IntegrationStore`] that records every call in order.
#[derive(Clone, Default)]
pub struct RecordingStore {
    calls: Arc<Mutex<Vec<Call>>>,
    orgs: Arc<Mutex<HashSet<DbId>>>,
    fail_at: Option<FailAt>,
}

impl RecordingStore {
    pub fn with_orgs(orgs: &[DbId]) -> Self {
        Self {
            orgs: Arc::new(Mutex::new(orgs.iter().copied().collect())),
            ..Self::default()
        }
    }

    pub fn failing_at(mut self, step: FailAt) -> Self {
        self.fail_at = Some(step);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

fn simulated(step: FailAt) -> sqlx::Error {
    sqlx::Error::Protocol(format!("simulated failure at {step:?}"))
}

#[async_trait]
impl IntegrationStore for RecordingStore {
    async fn begin(&self) -> Result<Box<dyn IntegrationTx>, sqlx::Error> {
        self.calls.lock().unwrap().push(Call::Begin);
        if self.fail_at == Some(FailAt::Begin) {
            return Err(simulated(FailAt::Begin));
        }
        Ok(Box::new(RecordingTx {
            store: self.clone(),
            finished: false,
        }))
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        if self.fail_at == Some(FailAt::Ping) {
            return Err(simulated(FailAt::Ping));
        }
        Ok(())
    }
}

/// Mirrors a sqlx transaction: a handle dropped without a successful commit
/// or an explicit rollback records a `Rollback`.
struct RecordingTx {
    store: RecordingStore,
    finished: bool,
}

impl Drop for RecordingTx {
    fn drop(&mut self) {
        if !self.finished {
            self.store.calls.lock().unwrap().push(Call::Rollback);
        }
    }
}

impl RecordingTx {
    fn record(&self, call: Call, step: FailAt) -> Result<(), sqlx::Error> {
        self.store.calls.lock().unwrap().push(call);
        if self.store.fail_at == Some(step) {
            return Err(simulated(step));
        }
        Ok(())
    }
}

#[async_trait]
impl IntegrationTx for RecordingTx {
    async fn organization_exists(&mut self, org_id: DbId) -> Result<bool, sqlx::Error> {
        self.record(Call::OrganizationExists(org_id), FailAt::OrganizationExists)?;
        Ok(self.store.orgs.lock().unwrap().contains(&org_id))
    }

    async fn clear_meta_app_credentials(&mut self, org_id: DbId) -> Result<u64, sqlx::Error> {
        self.record(
            Call::ClearMetaAppCredentials(org_id),
            FailAt::ClearMetaAppCredentials,
        )?;
        Ok(1)
    }

    async fn clear_organization_whatsapp(&mut self, org_id: DbId) -> Result<u64, sqlx::Error> {
        self.record(
            Call::ClearOrganizationWhatsapp(org_id),
            FailAt::ClearOrganizationWhatsapp,
        )?;
        Ok(1)
    }

    async fn commit(self: Box<Self>) -> Result<(), sqlx::Error> {
        let mut tx = self;
        tx.record(Call::Commit, FailAt::Commit)?;
        tx.finished = true;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), sqlx::Error> {
        let mut tx = self;
        tx.store.calls.lock().unwrap().push(Call::Rollback);
        tx.finished = true;
        Ok(())
    }
}
