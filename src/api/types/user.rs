//! User wire types

use serde::{Deserialize, Serialize};

use crate::domain::user::{User, UserRecord};

/// Body of create and replace requests
///
/// Absent fields decode as empty strings so that validation, not the
/// decoder, decides what is missing. Capitalised field names are accepted
/// for clients of the earlier API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPayload {
    #[serde(alias = "FirstName")]
    pub first_name: String,
    #[serde(alias = "LastName")]
    pub last_name: String,
    #[serde(alias = "Biography")]
    pub biography: String,
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        User::new(payload.first_name, payload.last_name, payload.biography)
    }
}

/// User as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub biography: String,
}

impl From<&UserRecord> for UserResponse {
    fn from(record: &UserRecord) -> Self {
        let user = record.user();

        Self {
            id: record.id().to_string(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            biography: user.biography().to_string(),
        }
    }
}
