//! # Auth Service
//!
//! Registration, login, password reset, and profile updates, delegating
//! persistence to the user repository and token work to the JWT manager.
//! Access tokens are stateless, so logout is an acknowledgement.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::observability::logger::{Logger, Severity};
use crate::store::DocumentStore;

use super::crypto::{constant_time_str_eq, generate_token, hash_token};
use super::errors::{AuthError, AuthResult};
use super::jwt::{JwtConfig, JwtManager};
use super::user::{User, UserRepository};

/// One pending password-reset token
#[derive(Debug, Clone)]
struct ResetTokenEntry {
    token_hash: String,
    user_id: Uuid,
    expires_at: DateTime<Utc>,
}

/// In-memory store of hashed one-shot reset tokens
pub struct ResetTokenStore {
    tokens: RwLock<HashMap<Uuid, ResetTokenEntry>>,
    ttl: Duration,
}

impl Default for ResetTokenStore {
    fn default() -> Self {
        Self {
            tokens: RwLock::new(HashMap::new()),
            ttl: Duration::hours(1),
        }
    }
}

impl ResetTokenStore {
    /// Issue a token for a user; only the hash is retained
    pub fn issue(&self, user_id: Uuid) -> String {
        let raw_token = generate_token();
        let entry = ResetTokenEntry {
            token_hash: hash_token(&raw_token),
            user_id,
            expires_at: Utc::now() + self.ttl,
        };

        // One outstanding token per user; a new request replaces the old
        self.tokens.write().unwrap().insert(user_id, entry);
        raw_token
    }

    /// Validate and consume a token, returning the user it belongs to
    pub fn consume(&self, raw_token: &str) -> Option<Uuid> {
        let token_hash = hash_token(raw_token);
        let mut tokens = self.tokens.write().unwrap();

        let user_id = tokens
            .values()
            .find(|entry| {
                constant_time_str_eq(&entry.token_hash, &token_hash)
                    && entry.expires_at > Utc::now()
            })
            .map(|entry| entry.user_id)?;

        tokens.remove(&user_id);
        Some(user_id)
    }
}

/// The authenticated-user view returned by auth endpoints
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub uid: String,
    pub email: String,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "emailVerified")]
    pub email_verified: bool,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            uid: user.id.to_string(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            email_verified: user.email_verified,
        }
    }
}

/// Successful login payload
#[derive(Debug, Clone, Serialize)]
pub struct LoginOutcome {
    #[serde(flatten)]
    pub user: UserProfile,
    pub token: String,
}

/// Authentication service
pub struct AuthService {
    users: UserRepository,
    jwt: JwtManager,
    reset_tokens: ResetTokenStore,
}

impl AuthService {
    pub fn new(store: Arc<dyn DocumentStore>, jwt_config: JwtConfig) -> Self {
        Self {
            users: UserRepository::new(store),
            jwt: JwtManager::new(jwt_config),
            reset_tokens: ResetTokenStore::default(),
        }
    }

    /// Register a new user and return their profile
    pub fn register(
        &self,
        email: &str,
        password: &str,
        name: Option<String>,
    ) -> AuthResult<UserProfile> {
        if self.users.email_exists(email)? {
            return Err(AuthError::EmailAlreadyExists);
        }

        let user = User::new(email.to_string(), password, name)?;
        self.users.save(&user)?;
        Ok(UserProfile::from(&user))
    }

    /// Verify credentials and mint an access token
    pub fn login(&self, email: &str, password: &str) -> AuthResult<LoginOutcome> {
        let user = self
            .users
            .find_by_email(email)?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.verify_password(password)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.jwt.issue_token(&user)?;
        Ok(LoginOutcome {
            user: UserProfile::from(&user),
            token,
        })
    }

    /// Start a password reset. Always succeeds from the caller's point of
    /// view so the endpoint does not reveal which emails are registered;
    /// the raw token goes to the operator log in place of email delivery.
    pub fn reset_password(&self, email: &str) -> AuthResult<()> {
        if let Some(user) = self.users.find_by_email(email)? {
            let token = self.reset_tokens.issue(user.id);
            Logger::log(
                Severity::Info,
                "password_reset_issued",
                &[("email", email), ("token", &token)],
            );
        }
        Ok(())
    }

    /// Complete a password reset with a previously issued token
    pub fn confirm_reset(&self, raw_token: &str, new_password: &str) -> AuthResult<()> {
        let user_id = self
            .reset_tokens
            .consume(raw_token)
            .ok_or(AuthError::InvalidResetToken)?;

        let mut user = self
            .users
            .find_by_id(user_id)?
            .ok_or(AuthError::InvalidResetToken)?;
        user.update_password(new_password)?;
        self.users.save(&user)?;
        Ok(())
    }

    /// Update the display name of the token's user
    pub fn update_profile(&self, token: &str, display_name: String) -> AuthResult<UserProfile> {
        let mut user = self.user_from_token(token)?;
        user.display_name = Some(display_name);
        user.updated_at = Utc::now();
        self.users.save(&user)?;
        Ok(UserProfile::from(&user))
    }

    /// Resolve a bearer token to its user's profile
    pub fn current_user(&self, token: &str) -> AuthResult<UserProfile> {
        let user = self.user_from_token(token)?;
        Ok(UserProfile::from(&user))
    }

    /// Re-issue a fresh access token for a still-valid bearer token
    pub fn refresh(&self, token: &str) -> AuthResult<LoginOutcome> {
        let user = self.user_from_token(token)?;
        let token = self.jwt.issue_token(&user)?;
        Ok(LoginOutcome {
            user: UserProfile::from(&user),
            token,
        })
    }

    fn user_from_token(&self, token: &str) -> AuthResult<User> {
        let claims = self.jwt.validate_token(token)?;
        let user_id: Uuid = claims.sub.parse().map_err(|_| AuthError::InvalidToken)?;
        self.users
            .find_by_id(user_id)?
            .ok_or(AuthError::InvalidToken)
    }
}
