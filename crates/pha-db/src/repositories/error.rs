//! Error handling utilities for repositories
//!
//! Driver errors are translated here, once, into `DomainError`. Constraint
//! violations become a structured [`ConstraintViolation`] naming the
//! offending column, so callers never look at SQLSTATE codes or messages.

use pha_core::error::{ConstraintViolation, DomainError};
use sqlx::error::ErrorKind;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    if let Some(violation) = constraint_violation(&e) {
        return DomainError::ConstraintViolation(violation);
    }
    DomainError::DatabaseError(e.to_string())
}

/// Extract a structured constraint violation from a driver error
fn constraint_violation(e: &SqlxError) -> Option<ConstraintViolation> {
    let db_err = e.as_database_error()?;
    let constraint = db_err.constraint()?;
    let field = field_from_constraint(constraint, db_err.table());

    match db_err.kind() {
        ErrorKind::UniqueViolation => Some(ConstraintViolation::unique(field)),
        ErrorKind::ForeignKeyViolation => Some(ConstraintViolation::foreign_key(field)),
        _ => None,
    }
}

/// Derive the column name from a PostgreSQL-style constraint name
///
/// `users_phone_number_key` on table `users` yields `phone_number`, and
/// `sessions_user_id_fkey` yields `user_id`.
pub fn field_from_constraint(constraint: &str, table: Option<&str>) -> String {
    let without_suffix = ["_fkey", "_pkey", "_key"]
        .iter()
        .find_map(|suffix| constraint.strip_suffix(suffix))
        .unwrap_or(constraint);

    let without_table = match table {
        Some(table) => without_suffix
            .strip_prefix(table)
            .and_then(|rest| rest.strip_prefix('_')),
        None => None,
    };

    without_table
        .or_else(|| without_suffix.split_once('_').map(|(_, rest)| rest))
        .filter(|field| !field.is_empty())
        .unwrap_or(without_suffix)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_constraint_field() {
        assert_eq!(
            field_from_constraint("users_phone_number_key", Some("users")),
            "phone_number"
        );
    }

    #[test]
    fn test_foreign_key_constraint_field() {
        assert_eq!(
            field_from_constraint("sessions_user_id_fkey", Some("sessions")),
            "user_id"
        );
    }

    #[test]
    fn test_constraint_field_without_table() {
        assert_eq!(field_from_constraint("users_phone_number_key", None), "phone_number");
        assert_eq!(field_from_constraint("sessions_pkey", None), "sessions");
    }

    #[test]
    fn test_table_with_underscores() {
        assert_eq!(
            field_from_constraint("user_devices_device_token_key", Some("user_devices")),
            "device_token"
        );
    }

    #[test]
    fn test_non_database_error_is_database_error() {
        let err = map_db_error(SqlxError::RowNotFound);
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }
}
