//! # User Management
//!
//! User model plus a repository over the `_users` collection of the
//! document store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::store::{Document, DocumentStore, Filter, FindQuery};

use super::crypto::{hash_password, validate_password, verify_password};
use super::errors::{AuthError, AuthResult};

/// Collection name for users
pub const USERS: &str = "_users";

/// User model
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,

    /// Email address (unique)
    pub email: String,

    /// Optional display name
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,

    /// Whether email has been verified
    #[serde(rename = "emailVerified")]
    pub email_verified: bool,

    /// Argon2id hash, never plaintext
    #[serde(skip_serializing)]
    pub password_hash: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user, validating and hashing the password
    pub fn new(email: String, password: &str, display_name: Option<String>) -> AuthResult<Self> {
        validate_password(password)?;
        let password_hash = hash_password(password)?;
        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4(),
            email,
            display_name,
            email_verified: false,
            password_hash,
            created_at: now,
            updated_at: now,
        })
    }

    /// Verify a password against this user's stored hash
    pub fn verify_password(&self, password: &str) -> AuthResult<bool> {
        verify_password(password, &self.password_hash)
    }

    /// Replace the password, re-validating the policy
    pub fn update_password(&mut self, new_password: &str) -> AuthResult<()> {
        validate_password(new_password)?;
        self.password_hash = hash_password(new_password)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Field map for persistence, including the hash
    fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("email".into(), json!(self.email));
        fields.insert("displayName".into(), json!(self.display_name));
        fields.insert("emailVerified".into(), json!(self.email_verified));
        fields.insert("passwordHash".into(), json!(self.password_hash));
        fields.insert("createdAt".into(), json!(self.created_at));
        fields.insert("updatedAt".into(), json!(self.updated_at));
        fields
    }

    fn from_document(doc: &Document) -> AuthResult<Self> {
        let parse_time = |field: &str| {
            doc.get(field)
                .cloned()
                .and_then(|v| serde_json::from_value::<DateTime<Utc>>(v).ok())
        };

        Ok(Self {
            id: doc
                .id
                .parse()
                .map_err(|_| StoreDecode::bad_field("id"))?,
            email: doc
                .get_str("email")
                .ok_or(StoreDecode::bad_field("email"))?
                .to_string(),
            display_name: doc.get_str("displayName").map(str::to_string),
            email_verified: doc
                .get("emailVerified")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            password_hash: doc
                .get_str("passwordHash")
                .ok_or(StoreDecode::bad_field("passwordHash"))?
                .to_string(),
            created_at: parse_time("createdAt").unwrap_or_else(Utc::now),
            updated_at: parse_time("updatedAt").unwrap_or_else(Utc::now),
        })
    }
}

// Decode failures of persisted users surface as store errors
struct StoreDecode;

impl StoreDecode {
    fn bad_field(field: &str) -> AuthError {
        AuthError::Store {
            source: crate::store::StoreError::Internal(format!(
                "Malformed user document: missing or invalid '{}'",
                field
            )),
        }
    }
}

/// User repository over the document store
pub struct UserRepository {
    store: Arc<dyn DocumentStore>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Find a user by id
    pub fn find_by_id(&self, id: Uuid) -> AuthResult<Option<User>> {
        match self.store.get(USERS, &id.to_string())? {
            Some(doc) => Ok(Some(User::from_document(&doc)?)),
            None => Ok(None),
        }
    }

    /// Find a user by email
    pub fn find_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        let query = FindQuery::filtered(vec![Filter::eq("email", email.into())]).limit(1);
        let docs = self.store.find(USERS, &query)?;
        match docs.first() {
            Some(doc) => Ok(Some(User::from_document(doc)?)),
            None => Ok(None),
        }
    }

    /// Check whether an email is already registered
    pub fn email_exists(&self, email: &str) -> AuthResult<bool> {
        Ok(self.find_by_email(email)?.is_some())
    }

    /// Persist a user (insert or full overwrite by id)
    pub fn save(&self, user: &User) -> AuthResult<()> {
        self.store
            .merge_update(USERS, &user.id.to_string(), user.to_fields())?;
        Ok(())
    }
}
