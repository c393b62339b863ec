use crate::error::ClientError;
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

/// TCC service name for camera access.
pub(crate) const CAMERA_SERVICE: &str = "kTCCServiceCamera";

/// Location of the TCC database relative to the simulator's data directory.
pub(crate) fn database_path(data_dir: &Path) -> PathBuf {
    data_dir.join("Library").join("TCC").join("TCC.db")
}

/// Mark `service` as allowed for `bundle_id` in the TCC database at `db_path`.
///
/// Handles both the current schema (`auth_value`) and the legacy one
/// (`allowed`/`prompt_count`). Re-granting replaces the existing row.
pub(crate) async fn grant(
    db_path: &Path,
    service: &str,
    bundle_id: &str,
) -> Result<(), ClientError> {
    if !db_path.exists() {
        return Err(ClientError::TccDatabaseMissing {
            path: db_path.to_path_buf(),
        });
    }
    let db_err = |source: sqlx::Error| ClientError::TccDatabase {
        path: db_path.to_path_buf(),
        source,
    };

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::new().filename(db_path))
        .await
        .map_err(db_err)?;

    let columns: Vec<String> = sqlx::query("PRAGMA table_info(access)")
        .fetch_all(&pool)
        .await
        .map_err(db_err)?
        .iter()
        .map(|row| row.get::<String, _>("name"))
        .collect();

    let statement = if columns.iter().any(|c| c == "auth_value") {
        "INSERT OR REPLACE INTO access (service, client, client_type, auth_value, auth_reason, auth_version) VALUES (?, ?, 0, 2, 2, 1)"
    } else {
        "INSERT OR REPLACE INTO access (service, client, client_type, allowed, prompt_count) VALUES (?, ?, 0, 1, 1)"
    };
    debug!(db = %db_path.display(), service, bundle_id, "writing TCC grant");

    let result = sqlx::query(statement)
        .bind(service)
        .bind(bundle_id)
        .execute(&pool)
        .await
        .map(|_| ())
        .map_err(db_err);
    pool.close().await;
    result
}
