//! Shared helpers for Diesel repository implementations.

use tracing::debug;

use crate::domain::ports::StoreError;

use super::pool::PoolError;

/// Map pool failures into the store error the ports expose.
pub(crate) fn map_pool_error(error: PoolError) -> StoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            StoreError::connection(message)
        }
    }
}

/// Map Diesel errors into the store error, emitting debug context.
pub(crate) fn map_diesel_error(error: diesel::result::Error, operation: &str) -> StoreError {
    let error_message = error.to_string();
    debug!(%error_message, %operation, "diesel operation failed");
    StoreError::query(error_message)
}
