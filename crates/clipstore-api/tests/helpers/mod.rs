//! Test helpers: build the router against in-memory collaborators.
//!
//! Run with: `cargo test -p clipstore-api`. No Postgres or object storage is
//! needed; the metadata store and storage backend are replaced with in-memory
//! fakes behind the same traits the handlers use in production.

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use clipstore_api::auth::models::SessionClaims;
use clipstore_api::constants;
use clipstore_api::setup::routes;
use clipstore_api::state::AppState;
use clipstore_core::models::{NewVideoRecord, VideoRecord};
use clipstore_core::{AppError, Config};
use clipstore_db::VideoStore;
use clipstore_storage::{Storage, StorageResult};
use jsonwebtoken::{encode, EncodingKey, Header};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// API path prefix for tests (e.g. `/api/v0`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

/// Mint a session token for the given user, valid for one hour.
pub fn token_for(user_id: Uuid) -> String {
    let now = Utc::now().timestamp();
    let claims = SessionClaims {
        sub: user_id,
        exp: now + 3600,
        iat: now,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("encode session token")
}

/// In-memory metadata store. Insertion order stands in for created_at when
/// listing newest-first, since back-to-back inserts can share a timestamp.
#[derive(Default)]
pub struct InMemoryVideoStore {
    records: Mutex<Vec<VideoRecord>>,
}

#[async_trait]
impl VideoStore for InMemoryVideoStore {
    async fn insert(&self, record: NewVideoRecord) -> Result<VideoRecord, AppError> {
        let mut records = self.records.lock().expect("store lock");
        if records
            .iter()
            .any(|existing| existing.storage_key == record.storage_key)
        {
            // Stands in for the unique-violation path of the real repository.
            return Err(AppError::InvalidArgument(format!(
                "a record already exists for key {}",
                record.storage_key
            )));
        }
        let stored = VideoRecord {
            id: Uuid::new_v4(),
            owner_id: record.owner_id,
            storage_key: record.storage_key,
            filename: record.filename,
            content_type: record.content_type,
            size_bytes: record.size_bytes,
            status: record.status,
            created_at: Utc::now(),
        };
        records.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_storage_key(
        &self,
        storage_key: &str,
    ) -> Result<Option<VideoRecord>, AppError> {
        let records = self.records.lock().expect("store lock");
        Ok(records
            .iter()
            .find(|record| record.storage_key == storage_key)
            .cloned())
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<VideoRecord>, AppError> {
        let records = self.records.lock().expect("store lock");
        Ok(records
            .iter()
            .filter(|record| record.owner_id == owner_id)
            .rev()
            .cloned()
            .collect())
    }
}

/// Fake object storage: deterministic signed URLs, explicit object set.
#[derive(Default)]
pub struct FakeStorage {
    objects: Mutex<HashSet<String>>,
}

impl FakeStorage {
    /// Simulate a completed direct upload for the given key.
    pub fn put_object(&self, storage_key: &str) {
        self.objects
            .lock()
            .expect("objects lock")
            .insert(storage_key.to_string());
    }
}

#[async_trait]
impl Storage for FakeStorage {
    async fn presigned_put_url(
        &self,
        storage_key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        Ok(format!(
            "https://storage.test/{}?method=PUT&content-type={}&expires={}",
            storage_key,
            content_type,
            expires_in.as_secs()
        ))
    }

    async fn presigned_get_url(
        &self,
        storage_key: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        Ok(format!(
            "https://storage.test/{}?method=GET&expires={}",
            storage_key,
            expires_in.as_secs()
        ))
    }

    async fn exists(&self, storage_key: &str) -> StorageResult<bool> {
        Ok(self.objects.lock().expect("objects lock").contains(storage_key))
    }
}

fn test_config() -> Config {
    Config {
        server_port: 0,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
        database_url: "postgresql://unused/clipstore".to_string(),
        db_max_connections: 1,
        db_acquire_timeout_seconds: 5,
        jwt_secret: TEST_JWT_SECRET.to_string(),
        s3_bucket: "clipstore-test".to_string(),
        s3_region: "auto".to_string(),
        s3_endpoint: None,
        max_video_size_bytes: 250 * 1024 * 1024,
        upload_url_expiry_secs: 3600,
        download_url_expiry_secs: 600,
        dependency_timeout_secs: 5,
    }
}

/// Test application: server plus a handle to the fake storage for seeding
/// uploaded objects.
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<FakeStorage>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Setup a test app over the in-memory fakes.
pub fn setup_test_app() -> TestApp {
    let config = test_config();
    let videos = Arc::new(InMemoryVideoStore::default());
    let storage = Arc::new(FakeStorage::default());

    let state = Arc::new(AppState::new(config.clone(), videos, storage.clone()));
    let router = routes::setup_routes(&config, state).expect("build router");
    let server = TestServer::new(router).expect("start test server");

    TestApp { server, storage }
}
