//! PostgreSQL implementations of the repository ports.

mod directory;
mod time_record;

pub use directory::*;
pub use time_record::*;

use crate::domain::StorageError;

fn storage_error(err: sqlx::Error) -> StorageError {
    StorageError::new(err.to_string())
}
