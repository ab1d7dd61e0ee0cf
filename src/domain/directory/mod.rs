//! In-memory user directory keyed by email.

use crate::domain::model::User;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("user already exists")]
    AlreadyExists(String),

    #[error("user not found")]
    NotFound(String),
}

/// Registered users. Reads and writes share one exclusive lock, so a reader
/// never sees a half-inserted record and duplicate adds race to exactly one
/// winner.
#[derive(Default)]
pub struct DirectoryStore {
    users: Mutex<HashMap<String, User>>,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_user(&self, user: User) -> Result<(), DirectoryError> {
        let mut users = self.lock();
        if users.contains_key(&user.email) {
            return Err(DirectoryError::AlreadyExists(user.email));
        }
        users.insert(user.email.clone(), user);
        Ok(())
    }

    pub fn get_user(&self, email: &str) -> Result<User, DirectoryError> {
        self.lock()
            .get(email)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(email.to_string()))
    }
}
