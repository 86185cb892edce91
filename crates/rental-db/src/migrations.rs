//! # Schema Bootstrap
//!
//! Embedded SQL applied on pool creation.
//!
//! ## How This Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Bootstrap Process                                  │
//! │                                                                         │
//! │  Server / seed / test startup                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Check _sqlx_migrations table                                          │
//! │       │                                                                 │
//! │       ├── Table doesn't exist? Create it                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Compare embedded files vs applied                                     │
//! │       │                                                                 │
//! │       ├── 001_initial_schema.sql ✓                                     │
//! │       └── 002_indexes.sql        ✓                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Run pending files in order, record checksums                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Schema *evolution* is out of scope for this service; the embedded files
//! exist to bring an empty SQLite file (or an in-memory test database) up to
//! the rental schema. They are idempotent and safe to apply repeatedly.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

/// Embedded schema files from the `migrations/sqlite` directory.
///
/// The `sqlx::migrate!()` macro embeds all SQL files from the specified
/// directory into the binary at compile time. No runtime file access needed.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Applies any pending schema files.
///
/// ## Safety
/// - Idempotent: safe to run multiple times
/// - Transactional: each file runs in a transaction
/// - Ordered: files run in filename order (001, 002, ...)
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!("Checking for pending schema files");

    MIGRATOR.run(pool).await?;

    info!("Schema up to date");
    Ok(())
}

/// Returns (total embedded files, applied files).
///
/// ## Usage
/// For diagnostics and health checks.
pub async fn migration_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    let total = MIGRATOR.migrations.len();

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await
        .unwrap_or(0);

    Ok((total, applied as usize))
}
