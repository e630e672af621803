pub mod sqlite_account_repo;
pub mod sqlite_appointment_repo;
pub mod sqlite_business_repo;
pub mod sqlite_professional_repo;

pub mod postgres_account_repo;
pub mod postgres_appointment_repo;
pub mod postgres_business_repo;
pub mod postgres_professional_repo;
