use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

/// Public view of a user; the password hash never leaves the server.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: OffsetDateTime,
}
