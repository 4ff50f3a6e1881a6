//! Identity and credential gate.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Service for registering users and verifying Basic credentials.
///
/// Passwords are hashed with HMAC-SHA256 (keyed by `signing_secret`) before
/// storage and comparison. An attacker with read-only access to the database
/// cannot verify or forge credentials without the server-side secret.
///
/// Successful authentication yields the verified user id; nothing downstream
/// ever sees a raw password.
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
    signing_secret: String,
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - user repository for DB operations
    /// - `signing_secret` - HMAC key; must match the value used when existing
    ///   accounts were registered
    pub fn new(repository: Arc<R>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Hashes a raw password with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn hash_password(&self, password: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(password.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        let new_user = NewUser {
            username: username.to_string(),
            password_hash: self.hash_password(password),
        };

        self.repository.create(new_user).await.map_err(|e| match e {
            AppError::Conflict { .. } => {
                AppError::conflict("Username already taken", json!({ "username": username }))
            }
            other => other,
        })
    }

    /// Authenticates a username/password pair, returning the verified user id.
    ///
    /// An unknown username and a wrong password produce the same error, so a
    /// caller cannot probe which usernames exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on invalid credentials.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<i64, AppError> {
        let user = self.repository.find_by_username(username).await?;

        match user {
            Some(user) if user.password_hash == self.hash_password(password) => Ok(user.id),
            _ => Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid credentials" }),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;

    fn test_secret() -> String {
        "test-signing-secret".to_string()
    }

    fn compute_expected_hash(password: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(test_secret().as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(password.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    fn test_user(id: i64, username: &str, password: &str) -> User {
        User {
            id,
            username: username.to_string(),
            password_hash: compute_expected_hash(password),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut mock_repo = MockUserRepository::new();

        let expected_hash = compute_expected_hash("pw1");
        mock_repo
            .expect_create()
            .withf(move |new_user| {
                new_user.username == "alice" && new_user.password_hash == expected_hash
            })
            .times(1)
            .returning(|_| Ok(test_user(1, "alice", "pw1")));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let user = service.register("alice", "pw1").await.unwrap();
        assert_eq!(user.id, 1);
        assert_ne!(user.password_hash, "pw1");
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_create().times(1).returning(|_| {
            Err(AppError::conflict(
                "Unique constraint violation",
                serde_json::json!({}),
            ))
        });

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let err = service.register("alice", "pw1").await.unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
        assert!(err.to_string().contains("already taken"));
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .withf(|username| username == "alice")
            .times(1)
            .returning(|_| Ok(Some(test_user(7, "alice", "pw1"))));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let user_id = service.authenticate("alice", "pw1").await.unwrap();
        assert_eq!(user_id, 7);
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(test_user(7, "alice", "pw1"))));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let err = service.authenticate("alice", "wrong").await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_user() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let err = service.authenticate("nobody", "pw1").await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_hash_password_secret_matters() {
        let svc1 = AuthService::new(Arc::new(MockUserRepository::new()), "secret-a".to_string());
        let svc2 = AuthService::new(Arc::new(MockUserRepository::new()), "secret-b".to_string());

        assert_ne!(svc1.hash_password("pw"), svc2.hash_password("pw"));
    }

    #[tokio::test]
    async fn test_hash_password_consistency() {
        let service = AuthService::new(Arc::new(MockUserRepository::new()), test_secret());

        let hash1 = service.hash_password("pw");
        let hash2 = service.hash_password("pw");

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }
}
