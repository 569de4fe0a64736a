//! Schema definition and pragmas for the message store.
//!
//! The schema is a single `messages` table, created if absent at startup.
//! `id INTEGER PRIMARY KEY` is a rowid alias: uniqueness is enforced
//! without an extra index, and a duplicate id fails the insert instead of
//! silently shadowing an existing message.

use rusqlite::Connection;
use std::time::Duration;

/// DDL for the messages table.
const CREATE_MESSAGES: &str = r#"
    CREATE TABLE IF NOT EXISTS messages (
        id        INTEGER PRIMARY KEY,
        from_name TEXT NOT NULL,
        body      TEXT NOT NULL
    )
"#;

/// Apply connection pragmas.
///
/// WAL mode allows concurrent readers alongside a writer; the busy
/// timeout covers brief writer contention between pooled connections.
pub fn apply_pragmas(conn: &Connection) -> rusqlite::Result<()> {
    // journal_mode reports the resulting mode as a row, so it cannot go
    // through pragma_update.
    conn.pragma_update_and_check(None, "journal_mode", "WAL", |_| Ok(()))?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    conn.busy_timeout(Duration::from_millis(5000))?;
    Ok(())
}

/// Create the messages table if it does not exist.
pub fn initialize_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(CREATE_MESSAGES)
}

/// Highest message id currently stored, or `None` for an empty table.
pub fn max_message_id(conn: &Connection) -> rusqlite::Result<Option<i64>> {
    conn.query_row("SELECT MAX(id) FROM messages", [], |row| row.get(0))
}
