//! VANO identifiers and generated user records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::roles::Role;

/// Column header of every generated roster, in field order.
pub const CSV_HEADER: [&str; 5] = ["name", "email", "password", "role", "department"];

/// Sequential numeric identifier of a generated user.
///
/// The VANO is both the user's name and the local part of their email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vano(pub u64);

impl Vano {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Builds `<vano>@<domain>`.
    pub fn email(&self, domain: &str) -> String {
        format!("{}@{}", self.0, domain)
    }
}

impl fmt::Display for Vano {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Vano {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// One generated account. Lives only until the CSV text is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub vano: Vano,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub department: String,
}

impl UserRecord {
    pub fn name(&self) -> String {
        self.vano.to_string()
    }

    /// Fields in [`CSV_HEADER`] order.
    pub fn to_row(&self) -> [String; 5] {
        [
            self.name(),
            self.email.clone(),
            self.password.clone(),
            self.role.to_string(),
            self.department.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vano_email() {
        assert_eq!(Vano::new(610).email("velsrscollege.com"), "610@velsrscollege.com");
    }

    #[test]
    fn test_record_row_order() {
        let record = UserRecord {
            vano: Vano::new(7),
            email: "7@example.com".to_string(),
            password: "Abc123!@#x".to_string(),
            role: Role::Student,
            department: "BSC".to_string(),
        };

        assert_eq!(
            record.to_row(),
            [
                "7".to_string(),
                "7@example.com".to_string(),
                "Abc123!@#x".to_string(),
                "student".to_string(),
                "BSC".to_string(),
            ]
        );
    }
}
