//! Caller principal and role model
//!
//! Authentication happens at the boundary; by the time a request reaches
//! the resource handler it carries a resolved principal with a role set.
//! Authorization here is a plain capability check against that set.

use serde::{Deserialize, Serialize};

/// Role required for all mutating catalog operations
pub const ADMIN_ROLE: &str = "admin";

/// An authenticated caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Stable subject identifier (user id)
    pub subject: String,
    /// Roles granted to this caller
    pub roles: Vec<String>,
}

impl Principal {
    /// Creates a principal with the given subject and roles
    pub fn new(subject: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            subject: subject.into(),
            roles,
        }
    }

    /// A principal holding the admin role, for tests and tooling
    pub fn admin(subject: impl Into<String>) -> Self {
        Self::new(subject, vec![ADMIN_ROLE.to_string()])
    }

    /// A principal with no roles beyond being authenticated
    pub fn reader(subject: impl Into<String>) -> Self {
        Self::new(subject, Vec::new())
    }

    /// Checks whether this caller holds the given role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_has_admin_role() {
        assert!(Principal::admin("u1").has_role(ADMIN_ROLE));
    }

    #[test]
    fn test_reader_has_no_roles() {
        assert!(!Principal::reader("u2").has_role(ADMIN_ROLE));
    }
}
