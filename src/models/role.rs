//! User roles shown in the header selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::wizard::WizardError;

/// Cosmetic user category. Selecting a role does not gate any operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
    Department,
    Faculty,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Department, Role::Faculty];

    /// Stable identifier used in config files.
    pub fn id(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Department => "department",
            Role::Faculty => "faculty",
        }
    }

    /// Get the display name for the role.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Department => "Department Head",
            Role::Faculty => "Faculty",
        }
    }
}

impl FromStr for Role {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.id() == s)
            .ok_or_else(|| WizardError::InvalidRole(s.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
