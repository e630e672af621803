pub mod admin;
pub mod auth;
pub mod booking;
pub mod dashboard;
pub mod health;
pub mod session;
pub mod storefront;
