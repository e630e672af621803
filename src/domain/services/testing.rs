//! Repository doubles for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;

use crate::domain::models::{
    appointment::{Appointment, AppointmentPatch},
    business::{Business, BusinessPatch},
    professional::{Professional, ProfessionalPatch},
};
use crate::domain::ports::{AppointmentRepository, BusinessRepository, ProfessionalRepository};
use crate::error::AppError;

/// A store that rejects every call and counts how many it received.
#[derive(Default)]
pub struct OfflineStore {
    calls: AtomicUsize,
}

impl OfflineStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::InternalWithMsg("store unreachable".into()))
    }
}

#[async_trait]
impl BusinessRepository for OfflineStore {
    async fn list(&self) -> Result<Vec<Business>, AppError> { self.fail() }
    async fn find_by_slug(&self, _slug: &str) -> Result<Option<Business>, AppError> { self.fail() }
    async fn find_by_id(&self, _id: &str) -> Result<Option<Business>, AppError> { self.fail() }
    async fn create(&self, _business: &Business) -> Result<Business, AppError> { self.fail() }
    async fn update(&self, _id: &str, _patch: &BusinessPatch) -> Result<(), AppError> { self.fail() }
    async fn delete(&self, _id: &str) -> Result<(), AppError> { self.fail() }
}

#[async_trait]
impl ProfessionalRepository for OfflineStore {
    async fn list(&self) -> Result<Vec<Professional>, AppError> { self.fail() }
    async fn list_by_business(&self, _business_id: &str) -> Result<Vec<Professional>, AppError> { self.fail() }
    async fn find_by_id(&self, _id: &str) -> Result<Option<Professional>, AppError> { self.fail() }
    async fn create(&self, _professional: &Professional) -> Result<Professional, AppError> { self.fail() }
    async fn update(&self, _id: &str, _patch: &ProfessionalPatch) -> Result<(), AppError> { self.fail() }
    async fn delete(&self, _id: &str) -> Result<(), AppError> { self.fail() }
}

#[async_trait]
impl AppointmentRepository for OfflineStore {
    async fn list(&self) -> Result<Vec<Appointment>, AppError> { self.fail() }
    async fn list_by_professional(&self, _professional_id: &str) -> Result<Vec<Appointment>, AppError> { self.fail() }
    async fn list_by_business(&self, _business_id: &str) -> Result<Vec<Appointment>, AppError> { self.fail() }
    async fn find_by_id(&self, _id: &str) -> Result<Option<Appointment>, AppError> { self.fail() }
    async fn create(&self, _appointment: &Appointment) -> Result<Appointment, AppError> { self.fail() }
    async fn update(&self, _id: &str, _patch: &AppointmentPatch) -> Result<(), AppError> { self.fail() }
    async fn delete(&self, _id: &str) -> Result<(), AppError> { self.fail() }
}
