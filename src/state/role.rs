//! Portal roles and the route sections they unlock.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Role::resolve` is the only place a backend role claim is interpreted.
//! Guards, the router and the sidebar all work with `Role` and `Section`.
//! The role comes from the user-editable session cookie, so it only selects
//! which screens to show; the backend authorizes every request on its own.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use crate::net::types::UserRecord;

/// Who the current visitor is acting as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    /// Not signed in, or signed in with a role this portal does not know.
    #[default]
    Anonymous,
    Customer,
    Employee,
    Admin,
}

impl Role {
    /// Map a backend role claim (`ROLE_USER`, `ROLE_EMPLOYEE`, `ROLE_ADMIN`).
    pub fn from_claim(claim: &str) -> Option<Self> {
        match claim {
            "ROLE_USER" => Some(Self::Customer),
            "ROLE_EMPLOYEE" => Some(Self::Employee),
            "ROLE_ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Role for a signed-in user, from the first role claim only.
    pub fn resolve(user: Option<&UserRecord>) -> Self {
        user.and_then(|user| user.roles.first())
            .and_then(|claim| Self::from_claim(claim))
            .unwrap_or_default()
    }

    /// Landing route after sign-in.
    pub fn home(self) -> &'static str {
        self.section().map_or("/", Section::root)
    }

    /// Route section this role may enter.
    pub fn section(self) -> Option<Section> {
        match self {
            Self::Anonymous => None,
            Self::Customer => Some(Section::Customer),
            Self::Employee => Some(Section::Employee),
            Self::Admin => Some(Section::Admin),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Anonymous => "Guest",
            Self::Customer => "Customer",
            Self::Employee => "Employee",
            Self::Admin => "Administrator",
        }
    }
}

/// A role-restricted route subtree, each rendered inside its own layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Customer,
    Employee,
    Admin,
}

impl Section {
    pub const ALL: [Self; 3] = [Self::Customer, Self::Employee, Self::Admin];

    /// Path prefix of the subtree.
    pub fn root(self) -> &'static str {
        match self {
            Self::Customer => "/customer",
            Self::Employee => "/employee",
            Self::Admin => "/admin",
        }
    }

    /// Role required to enter the subtree.
    pub fn role(self) -> Role {
        match self {
            Self::Customer => Role::Customer,
            Self::Employee => Role::Employee,
            Self::Admin => Role::Admin,
        }
    }

    /// Section owning `path`, matching whole path segments only.
    pub fn for_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| {
            path.strip_prefix(section.root())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }
}
