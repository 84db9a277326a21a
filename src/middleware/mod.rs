pub mod http_logger;
pub mod permission;
