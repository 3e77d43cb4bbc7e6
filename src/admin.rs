//! Admin Bootstrap
//!
//! Creates the initial superuser record in a [`DocumentStore`], once.

use argon2::password_hash::rand_core::OsRng;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::docstore::{DocumentStore, Record};
use crate::error::{FixtureError, Result};
use crate::schemas::is_valid_email;

/// Collection holding user records
pub const USERS_COLLECTION: &str = "users";

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Details for the admin account to create.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub password_confirm: String,
}

impl AdminRequest {
    /// Builds a request whose confirmation equals the password.
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let password = password.into();
        Self {
            email: email.into().trim().to_string(),
            username: username.into().trim().to_string(),
            password_confirm: password.clone(),
            password,
        }
    }

    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if !is_valid_email(&self.email) {
            return Some("Invalid email format".to_string());
        }
        if self.username.chars().count() < MIN_USERNAME_LENGTH {
            return Some(format!(
                "Username must be at least {} characters long",
                MIN_USERNAME_LENGTH
            ));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Some(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            ));
        }
        if self.password != self.password_confirm {
            return Some("Passwords don't match".to_string());
        }
        None
    }
}

/// Result of a bootstrap attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminOutcome {
    /// A new superuser was inserted under this id
    Created(String),
    /// A superuser already existed; nothing changed
    AlreadyExists,
}

// == Bootstrap ==
/// Inserts a superuser unless one already exists.
///
/// # Errors
/// `Validation` if the request breaks a rule or its email or username is
/// taken; `PasswordHash` if hashing fails.
pub fn bootstrap_admin(store: &mut DocumentStore, request: &AdminRequest) -> Result<AdminOutcome> {
    if store
        .find_one(USERS_COLLECTION, &field("is_superuser", json!(true)))
        .is_some()
    {
        info!("Admin user already exists");
        return Ok(AdminOutcome::AlreadyExists);
    }

    if let Some(reason) = request.validate() {
        return Err(FixtureError::Validation(reason));
    }
    if store
        .find_one(USERS_COLLECTION, &field("email", json!(request.email)))
        .is_some()
    {
        warn!(email = %request.email, "admin email already in use");
        return Err(FixtureError::Validation(
            "User with this email already exists".to_string(),
        ));
    }
    if store
        .find_one(USERS_COLLECTION, &field("username", json!(request.username)))
        .is_some()
    {
        return Err(FixtureError::Validation("Username already taken".to_string()));
    }

    let mut record = Record::new();
    record.insert("email".to_string(), json!(request.email));
    record.insert("username".to_string(), json!(request.username));
    record.insert(
        "password_hash".to_string(),
        Value::String(hash_password(&request.password)?),
    );
    record.insert("role".to_string(), json!("admin"));
    record.insert("is_superuser".to_string(), json!(true));
    record.insert("is_active".to_string(), json!(true));

    let id = store.insert(USERS_COLLECTION, record);
    info!(username = %request.username, id = %id, "Created admin user");
    Ok(AdminOutcome::Created(id))
}

fn field(name: &str, value: Value) -> Record {
    let mut query = Record::new();
    query.insert(name.to_string(), value);
    query
}

/// Hashes a password with Argon2 default parameters.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| FixtureError::PasswordHash(e.to_string()))
}

/// Checks a password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| FixtureError::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AdminRequest {
        AdminRequest::new("admin@example.com", "admin", "s3cretpass")
    }

    #[test]
    fn test_validate_valid_request() {
        assert!(request().validate().is_none());
    }

    #[test]
    fn test_validate_rules() {
        let mut req = request();
        req.email = "not-an-email".to_string();
        assert_eq!(req.validate().unwrap(), "Invalid email format");

        let mut req = request();
        req.username = "ab".to_string();
        assert!(req.validate().unwrap().contains("Username"));

        let req = AdminRequest::new("admin@example.com", "admin", "short");
        assert!(req.validate().unwrap().contains("Password"));

        let mut req = request();
        req.password_confirm = "different1".to_string();
        assert_eq!(req.validate().unwrap(), "Passwords don't match");
    }

    #[test]
    fn test_new_trims_identity_fields() {
        let req = AdminRequest::new("  admin@example.com ", " admin ", "s3cretpass");
        assert_eq!(req.email, "admin@example.com");
        assert_eq!(req.username, "admin");
    }

    #[test]
    fn test_bootstrap_creates_superuser() {
        let mut store = DocumentStore::new();

        let outcome = bootstrap_admin(&mut store, &request()).unwrap();
        let AdminOutcome::Created(id) = outcome else {
            panic!("expected a new admin");
        };

        let user = store.find_one(USERS_COLLECTION, &field("_id", json!(id))).unwrap();
        assert_eq!(user["username"], "admin");
        assert_eq!(user["is_superuser"], true);
        assert_ne!(user["password_hash"], "s3cretpass");
        assert!(verify_password("s3cretpass", user["password_hash"].as_str().unwrap()).unwrap());
        assert!(!verify_password("wrongpass", user["password_hash"].as_str().unwrap()).unwrap());
    }

    #[test]
    fn test_bootstrap_is_noop_when_admin_exists() {
        let mut store = DocumentStore::new();
        bootstrap_admin(&mut store, &request()).unwrap();

        let other = AdminRequest::new("other@example.com", "other", "anotherpass");
        assert_eq!(
            bootstrap_admin(&mut store, &other).unwrap(),
            AdminOutcome::AlreadyExists
        );
        assert_eq!(store.count(USERS_COLLECTION), 1);
    }

    #[test]
    fn test_bootstrap_rejects_taken_email() {
        let mut store = DocumentStore::new();
        store.insert(
            USERS_COLLECTION,
            field("email", json!("admin@example.com")),
        );

        let result = bootstrap_admin(&mut store, &request());
        assert!(matches!(result, Err(FixtureError::Validation(_))));
        assert_eq!(store.count(USERS_COLLECTION), 1);
    }

    #[test]
    fn test_bootstrap_rejects_taken_username() {
        let mut store = DocumentStore::new();
        store.insert(USERS_COLLECTION, field("username", json!("admin")));

        let result = bootstrap_admin(&mut store, &request());
        assert!(matches!(result, Err(FixtureError::Validation(msg)) if msg.contains("Username")));
    }

    #[test]
    fn test_bootstrap_rejects_invalid_request() {
        let mut store = DocumentStore::new();
        let req = AdminRequest::new("bad", "admin", "s3cretpass");

        assert!(bootstrap_admin(&mut store, &req).is_err());
        assert!(store.is_empty());
    }
}
