pub mod admission_repository;
pub mod notification_repository;
pub mod user_repository;

pub use admission_repository::{AdmissionRepository, NewAdmission};
pub use notification_repository::NotificationRepository;
pub use user_repository::UserRepository;
