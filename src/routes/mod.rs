pub mod admin;
pub mod admissions;
pub mod auth;
pub mod files;
pub mod health;
pub mod notifications;
pub mod students;
pub mod teachers;
