use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::{debug, info};

/// Open (or create) the SQLite file at `path`, make sure the schema exists,
/// and return the live connection. The caller owns it for the rest of the
/// process and hands it back to [`close_store`] on shutdown.
pub fn open_store(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    let conn = Connection::open(path).context("failed to open SQLite database")?;
    ensure_schema(&conn)?;
    info!(path = %path.display(), "credential store opened");
    Ok(conn)
}

/// Create the `passwords` table when it is missing. Safe to run on every
/// startup: an existing table and its rows are left untouched.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS passwords (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            domain TEXT NOT NULL,
            username TEXT NOT NULL,
            password TEXT NOT NULL,
            notes TEXT
        )",
        [],
    )
    .context("failed to create passwords table")?;

    debug!("passwords schema ensured");
    Ok(())
}

/// Release the connection, reporting any error SQLite raises while flushing.
pub fn close_store(conn: Connection) -> Result<()> {
    conn.close()
        .map_err(|(_, err)| err)
        .context("failed to close SQLite database")?;
    info!("credential store closed");
    Ok(())
}
