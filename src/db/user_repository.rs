// src/db/user_repository.rs
// DOCUMENTATION: User data access over the in-memory store
// PURPOSE: Lookup by id/username/email, registration and profile updates

use crate::db::Store;
use crate::errors::ToddleError;
use crate::models::{RegisterRequest, UpdateUserRequest, User};
use chrono::{DateTime, Utc};

pub struct UserRepository;

impl UserRepository {
    pub async fn get_by_id(store: &Store, id: i32) -> Option<User> {
        store.read().await.users.get(&id).cloned()
    }

    /// Case-insensitive username lookup
    pub async fn get_by_username(store: &Store, username: &str) -> Option<User> {
        let wanted = username.to_lowercase();
        store
            .read()
            .await
            .users
            .values()
            .find(|u| u.username.to_lowercase() == wanted)
            .cloned()
    }

    /// Case-insensitive email lookup
    pub async fn get_by_email(store: &Store, email: &str) -> Option<User> {
        let wanted = email.to_lowercase();
        store
            .read()
            .await
            .users
            .values()
            .find(|u| u.email.to_lowercase() == wanted)
            .cloned()
    }

    /// Create a user
    /// DOCUMENTATION: Uniqueness of username and email is checked under the
    /// same write lock as the insert
    pub async fn create_user(store: &Store, req: RegisterRequest) -> Result<User, ToddleError> {
        let mut state = store.write().await;

        let username = req.username.to_lowercase();
        let email = req.email.to_lowercase();

        if state.users.values().any(|u| u.username.to_lowercase() == username) {
            return Err(ToddleError::AlreadyExists("Username already exists".to_string()));
        }
        if state.users.values().any(|u| u.email.to_lowercase() == email) {
            return Err(ToddleError::AlreadyExists("Email already exists".to_string()));
        }

        let id = state.next_user_id();
        let user = User::from_request(id, req, Utc::now());
        state.users.insert(id, user.clone());
        log::debug!("Registered user {} ({})", id, user.username);
        Ok(user)
    }

    pub async fn update_user(
        store: &Store,
        id: i32,
        req: UpdateUserRequest,
    ) -> Result<User, ToddleError> {
        let mut state = store.write().await;
        let user = state
            .users
            .get_mut(&id)
            .ok_or_else(|| ToddleError::NotFound("User not found".to_string()))?;

        user.apply_update(req);
        Ok(user.clone())
    }

    pub async fn touch_last_login(
        store: &Store,
        id: i32,
        at: DateTime<Utc>,
    ) -> Result<User, ToddleError> {
        let mut state = store.write().await;
        let user = state
            .users
            .get_mut(&id)
            .ok_or_else(|| ToddleError::NotFound("User not found".to_string()))?;

        user.last_login = Some(at);
        Ok(user.clone())
    }
}
