//! Schema migrations, applied in order and guarded by `user_version`.

pub mod v001_initial;

use citemap_core::errors::StorageError;
use rusqlite::Connection;
use tracing::debug;

/// All migrations in application order.
const MIGRATIONS: &[(u32, &str)] = &[(1, v001_initial::MIGRATION_SQL)];

/// Apply every migration newer than the database's `user_version`.
/// Each migration runs in its own transaction; re-running is a no-op.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current: u32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    for &(version, sql) in MIGRATIONS {
        if version <= current {
            continue;
        }
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| StorageError::MigrationFailed {
                version,
                reason: e.to_string(),
            })?;
        tx.execute_batch(sql).map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;
        tx.pragma_update(None, "user_version", version)
            .map_err(|e| StorageError::MigrationFailed {
                version,
                reason: e.to_string(),
            })?;
        tx.commit().map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;
        debug!(version, "migration applied");
    }

    Ok(())
}
