//! User records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use agrostock_core::{DomainResult, Entity, validate};

use crate::Role;

// ─────────────────────────────────────────────────────────────────────────────
// User ID
// ─────────────────────────────────────────────────────────────────────────────

/// Unique identifier for a user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Uses UUIDv7 (time-ordered). Prefer `from_uuid` in tests for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User
// ─────────────────────────────────────────────────────────────────────────────

/// A person operating the system.
///
/// # Invariants
/// - `name` and `username` are non-blank.
/// - The role is a record only; it grants or denies nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    username: String,
    #[serde(flatten)]
    role: Role,
}

impl User {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        username: impl Into<String>,
        role: Role,
    ) -> DomainResult<Self> {
        let name = name.into();
        let username = username.into();
        validate::non_blank("user name", &name)?;
        validate::non_blank("username", &username)?;
        Ok(Self {
            id,
            name,
            username,
            role,
        })
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn role_mut(&mut self) -> &mut Role {
        &mut self.role
    }

    pub fn rename(&mut self, new_name: impl Into<String>) -> DomainResult<()> {
        let new_name = new_name.into();
        validate::non_blank("user name", &new_name)?;
        self.name = new_name;
        Ok(())
    }

    pub fn is_administrator(&self) -> bool {
        matches!(self.role, Role::Administrator { .. })
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for User {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({}) - Role: {}", self.name, self.username, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AccessLevel;

    fn test_user_id() -> UserId {
        UserId::from_uuid(Uuid::nil())
    }

    #[test]
    fn new_rejects_blank_names() {
        assert!(User::new(test_user_id(), "", "ana", Role::cashier()).is_err());
        assert!(User::new(test_user_id(), "Ana", "  ", Role::cashier()).is_err());
    }

    #[test]
    fn rename_keeps_old_name_on_failure() {
        let mut user = User::new(test_user_id(), "Ana", "ana", Role::cashier()).unwrap();
        assert!(user.rename("").is_err());
        assert_eq!(user.name(), "Ana");
        user.rename("Ana María").unwrap();
        assert_eq!(user.name(), "Ana María");
    }

    #[test]
    fn role_data_is_editable_through_the_user() {
        let mut user = User::new(test_user_id(), "Luis", "luis", Role::administrator()).unwrap();
        assert!(user.is_administrator());
        user.role_mut().set_access_level(AccessLevel::Limited);
        assert_eq!(
            user.role(),
            &Role::Administrator {
                access_level: AccessLevel::Limited
            }
        );
    }

    #[test]
    fn serializes_role_inline() {
        let user = User::new(test_user_id(), "Ana", "ana", Role::cashier()).unwrap();
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "cashier");
        assert_eq!(json["till"], "Till 1");
        assert_eq!(json["username"], "ana");

        let back: User = serde_json::from_value(json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn display_names_the_role() {
        let user = User::new(test_user_id(), "Ana", "ana", Role::cashier()).unwrap();
        assert_eq!(user.to_string(), "Ana (ana) - Role: cashier");
    }
}
