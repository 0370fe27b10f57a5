//! In-memory user registry.
//!
//! Holds the `User` record, its id type and the crate error. The registry
//! itself lives in [`manager::UserManager`]. There is no storage or IO here;
//! wrappers that expose users over HTTP or persist them belong elsewhere.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Identifier assigned to a user by the manager that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered user. Only a [`UserManager`](manager::UserManager) creates these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    pub(crate) fn new(id: UserId, name: String, email: String) -> Self {
        Self { id, name, email }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stored verbatim; never validated.
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Errors surfaced by the fallible registry helpers.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("user not found: {0}")]
    NotFound(UserId),
}

/// Return a short about/version line.
pub fn about() -> String {
    let pkg = env!("CARGO_PKG_NAME");
    let ver = env!("CARGO_PKG_VERSION");
    format!("{} v{}", pkg, ver)
}

pub mod config;
pub mod manager;

pub use config::ManagerConfig;
pub use manager::UserManager;
