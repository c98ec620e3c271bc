use crate::domain::errors::DomainError;

/// Maps sqlx failures onto domain errors. A slug uniqueness violation is a
/// `Conflict` so the persistence gateway can retry; everything else is a
/// storage fault.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                return DomainError::Conflict("slug already exists".into());
            }
            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
