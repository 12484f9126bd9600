use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::reference::types::Gender;

/// A family member. Immutable once added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
