// sqlx::Error -> AppError mapping (orphan rule keeps this out of core)

use jobboard_core::error::AppError;

/// Convert sqlx::Error to AppError with structured information
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.code() {
            // SQLite result codes: https://www.sqlite.org/rescode.html
            Some(code) => match code.as_ref() {
                "2067" | "1555" => AppError::Database(format!(
                    "Unique constraint violation: {} ({})",
                    db_err.message(),
                    code
                )),
                "1299" => AppError::Database(format!(
                    "NOT NULL constraint violation: {} ({})",
                    db_err.message(),
                    code
                )),
                "5" | "517" => {
                    AppError::Database(format!("Database locked (SQLITE_BUSY): {}", db_err.message()))
                }
                "13" => AppError::Database(format!("Database full: {}", db_err.message())),
                other => AppError::Database(format!(
                    "Database error [{}]: {}",
                    other,
                    db_err.message()
                )),
            },
            None => AppError::Database(format!("Database error: {}", db_err.message())),
        },
        sqlx::Error::RowNotFound => AppError::Database("Row not found".to_string()),
        sqlx::Error::ColumnNotFound(col) => AppError::Database(format!("Column not found: {}", col)),
        sqlx::Error::Configuration(e) => AppError::Config(e.to_string()),
        // Connection, pool, protocol errors
        _ => AppError::Database(err.to_string()),
    }
}

pub(crate) fn map_migrate_error(err: sqlx::Error, version: i64) -> AppError {
    match map_sqlx_error(err) {
        AppError::Database(msg) => {
            AppError::Database(format!("Migration {:03} failed: {}", version, msg))
        }
        other => other,
    }
}
