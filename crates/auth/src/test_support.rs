//! Shared fixtures for this crate's tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use dashboard_core::auth::User;
use dashboard_core::storage::{RepositoryError, Result, UserRepository};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{hash_password, AuthConfig, AuthState, MemorySessionStore};

pub const DEMO_EMAIL: &str = "user@nextmail.com";
pub const DEMO_PASSWORD: &str = "123456";

#[derive(Default)]
pub struct MemoryUsers {
    users: RwLock<HashMap<Uuid, User>>,
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "User",
                id: user.email.clone(),
            });
        }
        users.insert(user.id, user.clone());
        Ok(())
    }
}

/// Auth state with one demo user, plain-HTTP cookies and in-memory stores.
pub async fn auth_state() -> (AuthState, User) {
    let users = MemoryUsers::default();
    let hash = hash_password(DEMO_PASSWORD.to_string(), 4).await.unwrap();
    let user = User::new("User", DEMO_EMAIL, hash);
    users.create_user(&user).await.unwrap();

    let config = AuthConfig {
        cookie_secure: false,
        ..AuthConfig::default()
    };

    let state = AuthState::new(
        Arc::new(MemorySessionStore::new()),
        Arc::new(users),
        config,
    );
    (state, user)
}
