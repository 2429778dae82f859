use async_trait::async_trait;
use chrono::{DateTime, Utc};
use clipstore_core::models::{NewVideoRecord, VideoRecord, VideoStatus};
use clipstore_core::AppError;
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Durable mapping from storage key to owning identity.
///
/// Behind a trait so the issuers can be exercised against an in-memory fake;
/// the ownership invariant itself lives in `clipstore_core::authz`, not here.
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Insert a record; the storage key is unique across all owners.
    async fn insert(&self, record: NewVideoRecord) -> Result<VideoRecord, AppError>;

    /// Point lookup by storage key, owner included for the ownership check.
    async fn find_by_storage_key(&self, storage_key: &str)
        -> Result<Option<VideoRecord>, AppError>;

    /// All records for one owner, newest first.
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<VideoRecord>, AppError>;
}

/// Postgres-backed video repository
#[derive(Clone)]
pub struct VideoRepository {
    pool: PgPool,
}

impl VideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoStore for VideoRepository {
    async fn insert(&self, record: NewVideoRecord) -> Result<VideoRecord, AppError> {
        // Dynamic SQLx queries to avoid requiring DATABASE_URL/sqlx prepare
        let row = sqlx::query_as::<_, VideoRow>(
            r#"
            INSERT INTO videos (id, owner_id, storage_key, filename, content_type, size_bytes, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, owner_id, storage_key, filename, content_type, size_bytes, status, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(record.owner_id)
        .bind(&record.storage_key)
        .bind(&record.filename)
        .bind(&record.content_type)
        .bind(record.size_bytes)
        .bind(record.status.to_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_by_storage_key(
        &self,
        storage_key: &str,
    ) -> Result<Option<VideoRecord>, AppError> {
        let row = sqlx::query_as::<_, VideoRow>(
            r#"
            SELECT id, owner_id, storage_key, filename, content_type, size_bytes, status, created_at
            FROM videos
            WHERE storage_key = $1
            "#,
        )
        .bind(storage_key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<VideoRecord>, AppError> {
        let rows = sqlx::query_as::<_, VideoRow>(
            r#"
            SELECT id, owner_id, storage_key, filename, content_type, size_bytes, status, created_at
            FROM videos
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

/// Row shape as stored; status is text in the table.
#[derive(Debug)]
struct VideoRow {
    id: Uuid,
    owner_id: Uuid,
    storage_key: String,
    filename: String,
    content_type: String,
    size_bytes: i64,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for VideoRow {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        Ok(VideoRow {
            id: row.try_get("id")?,
            owner_id: row.try_get("owner_id")?,
            storage_key: row.try_get("storage_key")?,
            filename: row.try_get("filename")?,
            content_type: row.try_get("content_type")?,
            size_bytes: row.try_get("size_bytes")?,
            status: row.try_get("status")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl From<VideoRow> for VideoRecord {
    fn from(row: VideoRow) -> Self {
        VideoRecord {
            id: row.id,
            owner_id: row.owner_id,
            storage_key: row.storage_key,
            filename: row.filename,
            content_type: row.content_type,
            size_bytes: row.size_bytes,
            // Unknown statuses cannot appear through this crate's insert path;
            // treat any as uploaded rather than failing the whole read.
            status: row.status.parse().unwrap_or(VideoStatus::Uploaded),
            created_at: row.created_at,
        }
    }
}
