//! Topic resource representation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A discussion topic. Rows are owned by migrations/seeding; this service
/// only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Topic {
    /// Unique, URL-safe identifier.
    #[schema(example = "coding")]
    pub slug: String,
    /// Human-readable description.
    #[schema(example = "All things code")]
    pub description: String,
}
