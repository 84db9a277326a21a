pub mod admission;
pub mod notification;
pub mod sea_orm_active_enums;
pub mod user;
