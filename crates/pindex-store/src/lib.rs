//! SQLite persistence for the pinyin lookup table.
//!
//! The table is rebuilt from scratch on every [`build`]: any existing
//! database file is deleted first and the whole insert batch runs inside a
//! single transaction. There is no merge or migration path; re-running the
//! build is the recovery mechanism.

pub mod schema;

use std::path::Path;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, SqliteConnection};

use pindex_dict::MapRow;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

async fn connect(path: &Path, create: bool) -> Result<SqliteConnection, StoreError> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(create);
    Ok(SqliteConnection::connect_with(&options).await?)
}

/// Rebuild the lookup table and return the number of rows inserted.
pub async fn build(path: impl AsRef<Path>, rows: &[MapRow]) -> Result<u64, StoreError> {
    let path = path.as_ref();
    if path.exists() {
        std::fs::remove_file(path)?;
    }

    let mut conn = connect(path, true).await?;
    sqlx::query(schema::CREATE_PINYIN_MAP).execute(&mut conn).await?;
    sqlx::query(schema::CREATE_PINYIN_INDEX).execute(&mut conn).await?;

    let mut tx = conn.begin().await?;
    let mut count = 0u64;
    for row in rows {
        sqlx::query(schema::INSERT_ROW)
            .bind(&row.pinyin)
            .bind(&row.hanzi)
            .execute(&mut *tx)
            .await?;
        count += 1;
    }
    tx.commit().await?;

    tracing::debug!("inserted {} rows into {}", count, path.display());
    conn.close().await?;
    Ok(count)
}

/// Total rows in an existing lookup table.
pub async fn row_count(path: impl AsRef<Path>) -> Result<i64, StoreError> {
    let mut conn = connect(path.as_ref(), false).await?;
    let count: i64 = sqlx::query_scalar(schema::COUNT_ROWS)
        .fetch_one(&mut conn)
        .await?;
    conn.close().await?;
    Ok(count)
}

/// Up to `limit` rows whose pinyin starts with `prefix`, in insertion
/// order (which preserves the source file's homophone ordering).
pub async fn lookup_prefix(
    path: impl AsRef<Path>,
    prefix: &str,
    limit: u32,
) -> Result<Vec<MapRow>, StoreError> {
    let mut conn = connect(path.as_ref(), false).await?;
    let rows: Vec<(String, String)> = sqlx::query_as(schema::SELECT_BY_PREFIX)
        .bind(prefix)
        .bind(limit)
        .fetch_all(&mut conn)
        .await?;
    conn.close().await?;

    Ok(rows
        .into_iter()
        .map(|(pinyin, hanzi)| MapRow { pinyin, hanzi })
        .collect())
}
