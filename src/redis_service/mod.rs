pub mod redis_service;

pub use redis_service::{OtpStore, get_redis, init_redis_connection};
