//! Module `state`
//!
//! Defines the `Session` opened at sign-in and the `Role` it carries.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::identity::LoginId;

/// Access level of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Employee,
    Hr,
    Admin,
}

impl Role {
    /// Infers a role from the login ID alone.
    ///
    /// Generated employee IDs are always `Employee`, whatever letters their
    /// name segments happen to spell. For any other ID, `admin` anywhere
    /// (case-insensitive) is an administrator and `hr` is HR staff.
    pub fn from_login_id(login_id: &str) -> Self {
        if LoginId::parse(login_id).is_ok() {
            return Role::Employee;
        }

        let id = login_id.to_ascii_lowercase();
        if id.contains("admin") {
            Role::Admin
        } else if id.contains("hr") {
            Role::Hr
        } else {
            Role::Employee
        }
    }

    /// HR and administrators may manage other employees.
    pub fn is_privileged(&self) -> bool {
        matches!(self, Role::Hr | Role::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Hr => "hr",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    login_id: String,
    name: String,
    email: String,
    role: Role,
    opened_at: DateTime<Utc>,
}

impl Session {
    pub fn new(
        login_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            login_id: login_id.into(),
            name: name.into(),
            email: email.into(),
            role,
            opened_at: Utc::now(),
        }
    }

    pub fn login_id(&self) -> &str {
        &self.login_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// When the user signed in
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }
}
