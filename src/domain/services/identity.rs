use std::sync::Arc;
use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::models::{account::Account, auth::{Identity, Role}};
use crate::domain::ports::{AccountRepository, IdentityProvider};
use crate::error::AppError;

/// Credential shortcuts checked before the delegated provider. Each is optional.
#[derive(Debug, Clone, Default)]
pub struct FixedCredentials {
    pub admin_email: Option<String>,
    pub admin_secret: Option<String>,
    pub staff_secret: Option<String>,
}

/// Maps a login attempt to an identity with an explicit role.
///
/// Order: the administrator pair, then the shared staff secret (any email,
/// identity taken from the email's local part), then the delegated provider.
/// Not a security boundary.
pub struct IdentityResolver {
    fixed: FixedCredentials,
    delegate: Arc<dyn IdentityProvider>,
}

impl IdentityResolver {
    pub fn new(fixed: FixedCredentials, delegate: Arc<dyn IdentityProvider>) -> Self {
        Self { fixed, delegate }
    }

    /// `None` means the credentials were rejected. Delegate errors count as a rejection.
    pub async fn login(&self, email: &str, password: &str) -> Option<Identity> {
        if let (Some(admin_email), Some(admin_secret)) = (&self.fixed.admin_email, &self.fixed.admin_secret)
            && email == admin_email
            && password == admin_secret {
            info!("administrator signed in");
            return Some(Identity {
                uid: "admin".to_string(),
                email: email.to_string(),
                display_name: "Administrador".to_string(),
                role: Role::Admin,
            });
        }

        if let Some(staff_secret) = &self.fixed.staff_secret
            && password == staff_secret {
            let local = email.split('@').next().unwrap_or_default().to_string();
            info!(email, "staff signed in with shared secret");
            return Some(Identity {
                uid: local.clone(),
                email: email.to_string(),
                display_name: local,
                role: Role::Staff,
            });
        }

        match self.delegate.authenticate(email, password).await {
            Ok(identity) => identity,
            Err(e) => {
                error!(email, "delegated authentication failed: {}", e);
                None
            }
        }
    }
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|_| AppError::Internal)
}

/// Delegated provider backed by the `accounts` collection and argon2 hashes.
pub struct AccountIdentityProvider {
    repo: Arc<dyn AccountRepository>,
}

impl AccountIdentityProvider {
    pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
        Self { repo }
    }

    pub async fn register(&self, email: &str, display_name: &str, password: &str, role: Role) -> Result<Account, AppError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::Validation("Email and password are required".into()));
        }
        let account = Account::new(email.to_string(), display_name.trim().to_string(), hash_password(password)?, role);
        let created = self.repo.create(&account).await?;
        info!(account_id = %created.id, role = created.role.as_str(), "account registered");
        Ok(created)
    }
}

#[async_trait]
impl IdentityProvider for AccountIdentityProvider {
    async fn authenticate(&self, email: &str, password: &str) -> Result<Option<Identity>, AppError> {
        let Some(account) = self.repo.find_by_email(email).await? else {
            return Ok(None);
        };

        let parsed_hash = PasswordHash::new(&account.password_hash)
            .map_err(|_| AppError::Internal)?;

        if Argon2::default().verify_password(password.as_bytes(), &parsed_hash).is_err() {
            return Ok(None);
        }

        Ok(Some(Identity {
            uid: account.id,
            email: account.email,
            display_name: account.display_name,
            role: account.role,
        }))
    }
}
