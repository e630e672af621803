use crate::domain::models::{
    account::Account,
    appointment::{Appointment, AppointmentPatch},
    auth::Identity,
    business::{Business, BusinessPatch},
    professional::{Professional, ProfessionalPatch},
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait BusinessRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Business>, AppError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Business>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Business>, AppError>;
    async fn create(&self, business: &Business) -> Result<Business, AppError>;
    async fn update(&self, id: &str, patch: &BusinessPatch) -> Result<(), AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ProfessionalRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Professional>, AppError>;
    async fn list_by_business(&self, business_id: &str) -> Result<Vec<Professional>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Professional>, AppError>;
    async fn create(&self, professional: &Professional) -> Result<Professional, AppError>;
    async fn update(&self, id: &str, patch: &ProfessionalPatch) -> Result<(), AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Appointment>, AppError>;
    async fn list_by_professional(&self, professional_id: &str) -> Result<Vec<Appointment>, AppError>;
    async fn list_by_business(&self, business_id: &str) -> Result<Vec<Appointment>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Appointment>, AppError>;
    async fn create(&self, appointment: &Appointment) -> Result<Appointment, AppError>;
    async fn update(&self, id: &str, patch: &AppointmentPatch) -> Result<(), AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create(&self, account: &Account) -> Result<Account, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError>;
}

/// External credential check. `Ok(None)` means the credentials were rejected.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn authenticate(&self, email: &str, password: &str) -> Result<Option<Identity>, AppError>;
}
