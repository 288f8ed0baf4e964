//! User entity and related types

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User identifier, minted by the store when a user is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // hyphenated lowercase form
        write!(f, "{}", self.0)
    }
}

/// User value: the data a caller supplies, without identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    first_name: String,
    last_name: String,
    biography: String,
}

impl User {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        biography: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            biography: biography.into(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn biography(&self) -> &str {
        &self.biography
    }
}

/// A stored user together with its identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    id: UserId,
    #[serde(flatten)]
    user: User,
}

impl UserRecord {
    pub fn new(id: UserId, user: User) -> Self {
        Self { id, user }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn into_parts(self) -> (UserId, User) {
        (self.id, self.user)
    }
}
