use tracing::{debug, trace};

use crate::{ManagerConfig, RegistryError, User, UserId};

/// Owns a set of users and the counter that hands out their ids.
///
/// Ids start at 1 and only ever go up; a deleted user's id is never handed
/// out again. Users are kept in insertion order. Each manager is independent,
/// there is no shared or static state between instances.
#[derive(Debug)]
pub struct UserManager {
    users: Vec<User>,
    next_id: u64,
}

impl UserManager {
    pub fn new() -> Self {
        Self::with_config(ManagerConfig::default())
    }

    pub fn with_config(config: ManagerConfig) -> Self {
        Self {
            users: Vec::with_capacity(config.initial_capacity),
            next_id: 1,
        }
    }

    /// Register a new user and return a copy of the stored record.
    ///
    /// Name and email are stored as given; nothing is validated and duplicate
    /// emails are allowed.
    pub fn add_user(&mut self, name: impl Into<String>, email: impl Into<String>) -> User {
        let id = UserId::new(self.next_id);
        self.next_id += 1;

        let user = User::new(id, name.into(), email.into());
        self.users.push(user.clone());
        debug!(user_id = %id, "user added");
        user
    }

    /// Look a user up by id. Unknown ids are a normal outcome and give `None`.
    pub fn find_user_by_id(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id() == id)
    }

    /// Like [`find_user_by_id`](Self::find_user_by_id), for callers that want
    /// to propagate absence with `?`.
    pub fn get_user(&self, id: UserId) -> Result<&User, RegistryError> {
        self.find_user_by_id(id).ok_or(RegistryError::NotFound(id))
    }

    /// Remove a user. Returns `false` if no user has this id.
    pub fn delete_user(&mut self, id: UserId) -> bool {
        match self.users.iter().position(|u| u.id() == id) {
            Some(idx) => {
                // `remove`, not `swap_remove`: the rest must keep their order.
                self.users.remove(idx);
                debug!(user_id = %id, "user deleted");
                true
            }
            None => {
                trace!(user_id = %id, "delete: no such user");
                false
            }
        }
    }

    /// All stored users in insertion order.
    pub fn get_all_users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// The id the next call to [`add_user`](Self::add_user) will assign.
    pub fn next_id(&self) -> UserId {
        UserId::new(self.next_id)
    }
}

impl Default for UserManager {
    fn default() -> Self {
        Self::new()
    }
}
