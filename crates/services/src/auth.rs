//! Account signup and login.

use std::sync::Arc;

use chrono::Utc;
use domains::models::User;
use domains::{ids, DomainError, RecordStore, Result};
use tracing::{debug, info};

/// Credential checks and account creation.
///
/// Passwords are compared verbatim against what signup stored; there is no
/// hashing and no session state. Callers get the full user record back and
/// the serializer keeps the password out of responses.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn RecordStore>,
}

impl AuthService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Verifies the email/password pair. The error never reveals whether
    /// the email exists.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        match self.store.find_user_by_email(email).await? {
            Some(user) if user.password == password => {
                info!(user = %user.id, "login");
                Ok(user)
            }
            _ => {
                debug!(%email, "login rejected");
                Err(DomainError::Unauthorized("Invalid credentials".into()))
            }
        }
    }

    /// Registers a new account. The store enforces email uniqueness; the
    /// avatar is derived from the email so every account gets a stable one.
    pub async fn signup(&self, email: &str, password: &str, name: &str) -> Result<User> {
        let user = User {
            id: ids::user(),
            email: email.to_owned(),
            password: password.to_owned(),
            name: name.to_owned(),
            avatar: avatar_for(email),
            bio: None,
            joined_date: Utc::now(),
        };
        let created = self.store.create_user(user).await?;
        info!(user = %created.id, "account created");
        Ok(created)
    }
}

fn avatar_for(email: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={email}")
}
