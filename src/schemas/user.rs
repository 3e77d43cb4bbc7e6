//! User records.

use serde::{Deserialize, Serialize};

use super::{check_length, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    Guest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Schema for User {
    const KIND: &'static str = "users";

    fn validate(&self) -> Option<String> {
        if self.id.trim().is_empty() {
            return Some("id cannot be empty".to_string());
        }
        if !is_valid_email(&self.email) {
            return Some(format!("invalid email address: '{}'", self.email));
        }
        check_length("name", &self.name, 3, 50)
    }
}

/// Accepts `local@domain.tld` where local is `[A-Za-z0-9_.+-]+` and the
/// domain is dot-separated `[A-Za-z0-9-]` labels with at least one dot.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_.+-".contains(c));

    let labels: Vec<&str> = domain.split('.').collect();
    let domain_ok = labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });

    local_ok && domain_ok
}
