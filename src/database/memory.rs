use async_trait::async_trait;
use std::collections::HashMap;

use super::UserStore;
use crate::models::User;
use crate::utils::AppError;

/// HashMap-backed store for tests.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: HashMap<String, User>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, id: &str, name: &str, friends: &[&str], interests: &[&str]) -> Self {
        self.users.insert(
            id.to_string(),
            User {
                id: id.to_string(),
                name: name.to_string(),
                friends: friends.iter().map(|s| s.to_string()).collect(),
                interests: interests.iter().map(|s| s.to_string()).collect(),
            },
        );
        self
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<User>, AppError> {
        Ok(ids.iter().filter_map(|id| self.users.get(id).cloned()).collect())
    }
}

/// Store whose every call fails, for exercising the server-error path.
pub struct UnavailableUserStore;

#[async_trait]
impl UserStore for UnavailableUserStore {
    async fn find_by_id(&self, _id: &str) -> Result<Option<User>, AppError> {
        Err(AppError::DatabaseError("connection refused".to_string()))
    }

    async fn find_by_ids(&self, _ids: &[String]) -> Result<Vec<User>, AppError> {
        Err(AppError::DatabaseError("connection refused".to_string()))
    }
}
