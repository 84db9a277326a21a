pub mod rabbitmq_service;

pub use rabbitmq_service::{RabbitMQService, get_rabbitmq_connection};
