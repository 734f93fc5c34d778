//! In-memory user store
//!
//! Demo-grade account handling: plain-text credential matching and a
//! role inferred from the email address. Real authentication and
//! authorization are out of scope for this system.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Account role, inferred at signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Officer,
}

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
}

/// In-memory user store; accounts are lost on restart.
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Register a new user. Returns `None` when the email is taken.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Option<User> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == email) {
            return None;
        }

        let user = User {
            id: format!("user-{}", Uuid::new_v4()),
            email: email.to_string(),
            password: password.to_string(),
            full_name: full_name.to_string(),
            role: if email.contains("officer") {
                Role::Officer
            } else {
                Role::Student
            },
        };
        users.push(user.clone());
        Some(user)
    }

    /// Find a user with matching credentials.
    pub async fn authenticate(&self, email: &str, password: &str) -> Option<User> {
        let users = self.users.read().await;
        users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_register_and_authenticate() {
        let store = UserStore::new();

        let user = store
            .register("student@example.com", "hunter2", "A Student")
            .await
            .unwrap();
        assert_eq!(user.role, Role::Student);

        let found = store.authenticate("student@example.com", "hunter2").await;
        assert!(found.is_some());

        let wrong = store.authenticate("student@example.com", "wrong").await;
        assert!(wrong.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = UserStore::new();
        store.register("a@example.com", "x", "A").await.unwrap();

        assert!(store.register("a@example.com", "y", "B").await.is_none());
    }

    #[tokio::test]
    async fn test_officer_role_inferred_from_email() {
        let store = UserStore::new();
        let user = store
            .register("loan.officer@example.com", "x", "An Officer")
            .await
            .unwrap();
        assert_eq!(user.role, Role::Officer);
    }
}
