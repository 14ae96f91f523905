use serde::{Deserialize, Serialize};

use agrostock_core::{DomainResult, validate};

/// Till assigned to a cashier when none is given.
pub const DEFAULT_TILL: &str = "Till 1";

/// How much of the system an administrator may touch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    #[default]
    Full,
    Limited,
    ReadOnly,
}

/// Role of a user, carrying the role-specific data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Role {
    Cashier { till: String },
    Administrator { access_level: AccessLevel },
}

impl Role {
    pub fn cashier() -> Self {
        Role::Cashier {
            till: DEFAULT_TILL.to_string(),
        }
    }

    pub fn administrator() -> Self {
        Role::Administrator {
            access_level: AccessLevel::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Cashier { .. } => "cashier",
            Role::Administrator { .. } => "administrator",
        }
    }

    /// Reassign a cashier's till. No-op for other roles.
    pub fn set_till(&mut self, new_till: impl Into<String>) -> DomainResult<()> {
        let new_till = new_till.into();
        validate::non_blank("till", &new_till)?;
        if let Role::Cashier { till } = self {
            *till = new_till;
        }
        Ok(())
    }

    /// Change an administrator's access level. No-op for other roles.
    pub fn set_access_level(&mut self, level: AccessLevel) {
        if let Role::Administrator { access_level } = self {
            *access_level = level;
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
