use chrono::{DateTime, Utc};
use sqlx::{
    migrate::MigrateDatabase, query, query_as, sqlite::SqlitePoolOptions, FromRow, Pool, Sqlite,
    SqlitePool,
};

#[derive(Debug, FromRow)]
pub struct CacheEntry {
    pub key: String,
    pub payload: String,
    pub captured_at: DateTime<Utc>,
}

pub struct Storage {
    pool: Pool<Sqlite>,
}

impl Storage {
    pub async fn initialize(db_url: &str) -> sqlx::Result<Self> {
        if !Sqlite::database_exists(db_url).await.unwrap_or(false) {
            Sqlite::create_database(db_url).await?;
        }
        let pool = SqlitePool::connect(db_url).await?;
        Self::migrate(pool).await
    }

    /// Private database that lives as long as the returned value.
    pub async fn in_memory() -> sqlx::Result<Self> {
        // every connection to :memory: is its own database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Self::migrate(pool).await
    }

    async fn migrate(pool: SqlitePool) -> sqlx::Result<Self> {
        sqlx::migrate!().run(&pool).await?;
        Ok(Self { pool })
    }
}

impl Storage {
    pub async fn load_entry(&self, key: &str) -> sqlx::Result<Option<CacheEntry>> {
        query_as("SELECT key, payload, captured_at FROM daily_cache WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
    }

    /// Inserts or overwrites the entry for `key`.
    pub async fn store_entry(
        &self,
        key: &str,
        payload: &str,
        captured_at: DateTime<Utc>,
    ) -> sqlx::Result<()> {
        query(
            "INSERT INTO daily_cache(key, payload, captured_at) VALUES(?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET payload = excluded.payload, captured_at = excluded.captured_at",
        )
        .bind(key)
        .bind(payload)
        .bind(captured_at)
        .execute(&self.pool)
        .await
        .map(|_| ())
    }

    /// Attempt to remove an entry, returns true if it existed
    pub async fn remove_entry(&self, key: &str) -> sqlx::Result<bool> {
        let result = query("DELETE FROM daily_cache WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
