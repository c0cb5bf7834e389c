// src/services/user_service.rs
// DOCUMENTATION: Business logic for users
// PURPOSE: Registration, plain login and the mock "current user"

use crate::db::{Store, UserRepository};
use crate::errors::ToddleError;
use crate::models::{LoginRequest, RegisterRequest, UpdateUserRequest, User};
use chrono::Utc;
use validator::Validate;

pub struct UserService;

impl UserService {
    pub async fn register(store: &Store, req: RegisterRequest) -> Result<User, ToddleError> {
        req.validate()?;
        let user = UserRepository::create_user(store, req).await?;
        log::info!("User {} registered", user.id);
        Ok(user)
    }

    /// Check credentials and stamp the login time
    /// DOCUMENTATION: Passwords are compared as stored; session handling is out of scope
    pub async fn login(store: &Store, req: LoginRequest) -> Result<User, ToddleError> {
        let (username, password) = match (req.username, req.password) {
            (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
            _ => {
                return Err(ToddleError::InvalidInput(
                    "Username and password are required".to_string(),
                ))
            }
        };

        let user = UserRepository::get_by_username(store, &username)
            .await
            .filter(|u| u.password == password)
            .ok_or_else(|| {
                log::warn!("Failed login for {}", username);
                ToddleError::InvalidCredentials
            })?;

        UserRepository::touch_last_login(store, user.id, Utc::now()).await
    }

    /// The user the request acts as; 401 when that user does not exist yet
    pub async fn current_user(store: &Store, user_id: i32) -> Result<User, ToddleError> {
        UserRepository::get_by_id(store, user_id)
            .await
            .ok_or(ToddleError::Unauthorized)
    }

    pub async fn update_profile(
        store: &Store,
        user_id: i32,
        req: UpdateUserRequest,
    ) -> Result<User, ToddleError> {
        req.validate()?;
        Self::current_user(store, user_id).await?;
        UserRepository::update_user(store, user_id, req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::user_repository::tests::register_request;

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_login_flow() {
        let store = Store::new();
        let registered = UserService::register(&store, register_request("maya", "maya@example.com"))
            .await
            .unwrap();

        let user = UserService::login(&store, login("MAYA", "hunter2")).await.unwrap();
        assert_eq!(user.id, registered.id);
        assert!(user.last_login >= registered.last_login);

        let err = UserService::login(&store, login("maya", "wrong")).await.unwrap_err();
        assert!(matches!(err, ToddleError::InvalidCredentials));

        let err = UserService::login(&store, login("nobody", "hunter2")).await.unwrap_err();
        assert!(matches!(err, ToddleError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_requires_both_fields() {
        let store = Store::new();
        let err = UserService::login(
            &store,
            LoginRequest {
                username: Some("maya".to_string()),
                password: None,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ToddleError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_current_user_missing_is_unauthorized() {
        let store = Store::new();
        let err = UserService::current_user(&store, 1).await.unwrap_err();
        assert!(matches!(err, ToddleError::Unauthorized));
    }
}
