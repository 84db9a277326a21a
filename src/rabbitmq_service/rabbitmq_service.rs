use lapin::{BasicProperties, Connection, ConnectionProperties, options::*};
use serde_json::json;
use tokio::sync::OnceCell;

use crate::config::APP_CONFIG;

pub const MAIL_QUEUE: &str = "mail_service";

pub static RABBITMQ_CONNECTION: OnceCell<Connection> = OnceCell::const_new();

pub async fn get_rabbitmq_connection() -> &'static Connection {
    RABBITMQ_CONNECTION
        .get_or_init(|| async {
            Connection::connect(&APP_CONFIG.rabbitmq_uri, ConnectionProperties::default())
                .await
                .expect("Failed to connect to RabbitMQ")
        })
        .await
}

pub struct RabbitMQService;

impl RabbitMQService {
    pub async fn create_mail_queue(connection: &Connection) -> Result<(), anyhow::Error> {
        let channel = connection
            .create_channel()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create RabbitMQ channel: {}", e))?;

        channel
            .queue_declare(
                MAIL_QUEUE,
                QueueDeclareOptions::default(),
                Default::default(),
            )
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create RabbitMQ queue: {}", e))?;

        Ok(())
    }

    /// Hands an outbound mail to the delivery service. A publish failure is
    /// surfaced to the caller; the mail is not retried here.
    pub async fn publish_to_mail_queue(
        connection: &Connection,
        to: &str,
        subject: &str,
        email_data: &str,
    ) -> Result<(), anyhow::Error> {
        let standard_msg = json!({
            "pattern": "send-email",
            "data": {
                "to": to,
                "subject": subject,
                "text": email_data
            }
        });

        let channel = connection.create_channel().await?;

        channel
            .basic_publish(
                "",
                MAIL_QUEUE,
                BasicPublishOptions::default(),
                standard_msg.to_string().as_bytes(),
                BasicProperties::default(),
            )
            .await?;

        Ok(())
    }
}
