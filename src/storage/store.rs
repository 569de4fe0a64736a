//! Pooled message store with transactional append and cursor reads.
//!
//! Uses r2d2 with r2d2_sqlite for pooled access. SQLite WAL mode allows
//! concurrent readers alongside the single writer, so one read-write pool
//! serves both operations. Every operation runs inside its own
//! transaction: appends commit explicitly and roll back when dropped on an
//! error path, reads roll back unconditionally.

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::schema;

/// Seed returned when the store holds no messages.
///
/// Matches the bootstrap contract: an empty store seeds the allocator with
/// 1, so the first message ever appended gets id 2.
pub const SEED_FLOOR: i64 = 1;

const INSERT_MESSAGE: &str = "INSERT INTO messages (id, from_name, body) VALUES (?1, ?2, ?3)";

const SELECT_SINCE: &str = r#"
    SELECT id, from_name, body
    FROM messages
    WHERE id > ?1
    ORDER BY id ASC
    LIMIT ?2
"#;

/// A chat message as stored and as serialized on the wire.
///
/// `id` is assigned by the allocator immediately before the append; a
/// client-supplied id in a POST body is ignored, hence the serde default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: i64,
    pub from_name: String,
    pub body: String,
}

/// Error type for store operations.
///
/// Query failures carry the operation name and the offending statement so
/// callers can diagnose without parsing the message text.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to get connection from pool: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("{op} failed in statement `{statement}`: {source}")]
    Query {
        op: &'static str,
        statement: &'static str,
        source: rusqlite::Error,
    },
}

impl StoreError {
    fn query(op: &'static str, statement: &'static str, source: rusqlite::Error) -> Self {
        Self::Query {
            op,
            statement,
            source,
        }
    }
}

/// Message store over a pooled SQLite database.
#[derive(Clone)]
pub struct MessageStore {
    pool: Pool<SqliteConnectionManager>,
}

impl MessageStore {
    /// Open the store at the given database path.
    ///
    /// Ensures the messages table exists, then returns the store together
    /// with the allocator seed: the highest stored id, or [`SEED_FLOOR`]
    /// when the table is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be created, the table cannot be
    /// created, or the seed lookup fails. Callers treat these as fatal.
    pub fn open<P: AsRef<Path>>(db_path: P, pool_size: u32) -> Result<(Self, i64), StoreError> {
        let manager =
            SqliteConnectionManager::file(db_path).with_init(|conn| schema::apply_pragmas(conn));

        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        let conn = pool.get()?;
        schema::initialize_schema(&conn)
            .map_err(|e| StoreError::query("initialize", "CREATE TABLE messages", e))?;

        let seed = schema::max_message_id(&conn)
            .map_err(|e| StoreError::query("seed lookup", "SELECT MAX(id) FROM messages", e))?
            .unwrap_or(SEED_FLOOR);

        Ok((Self { pool }, seed))
    }

    /// Append one message inside its own transaction.
    ///
    /// Commits on success; any failure (duplicate id, connectivity loss)
    /// rolls the transaction back when it drops, leaving the store
    /// unchanged. Never retried.
    pub fn append(&self, message: &Message) -> Result<(), StoreError> {
        let mut conn = self.pool.get()?;
        let tx = conn
            .transaction()
            .map_err(|e| StoreError::query("append", "BEGIN", e))?;

        tx.execute(
            INSERT_MESSAGE,
            rusqlite::params![message.id, message.from_name, message.body],
        )
        .map_err(|e| StoreError::query("append", INSERT_MESSAGE, e))?;

        tx.commit()
            .map_err(|e| StoreError::query("append", "COMMIT", e))
    }

    /// Fetch up to `limit` messages with id strictly greater than `cursor`,
    /// ascending by id.
    ///
    /// Runs in a read transaction that is rolled back unconditionally.
    /// An empty result is not an error.
    pub fn fetch_since(&self, cursor: i64, limit: u32) -> Result<Vec<Message>, StoreError> {
        let mut conn = self.pool.get()?;
        let tx = conn
            .transaction()
            .map_err(|e| StoreError::query("fetch", "BEGIN", e))?;

        let messages = {
            let mut stmt = tx
                .prepare(SELECT_SINCE)
                .map_err(|e| StoreError::query("fetch", SELECT_SINCE, e))?;

            stmt.query_map(rusqlite::params![cursor, limit], |row| {
                Ok(Message {
                    id: row.get(0)?,
                    from_name: row.get(1)?,
                    body: row.get(2)?,
                })
            })
            .and_then(|rows| rows.collect::<Result<Vec<_>, _>>())
            .map_err(|e| StoreError::query("fetch", SELECT_SINCE, e))?
        };

        tx.rollback()
            .map_err(|e| StoreError::query("fetch", "ROLLBACK", e))?;

        Ok(messages)
    }
}
