//! User resource representation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A registered author. Read-only in this service; comment creation merely
/// references an existing username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique login name referenced by articles and comments.
    #[schema(example = "butter_bridge")]
    pub username: String,
    /// Display name.
    #[schema(example = "Jonny")]
    pub name: String,
    /// Avatar image URL.
    #[schema(example = "https://example.com/avatar.png")]
    pub avatar_url: String,
}
