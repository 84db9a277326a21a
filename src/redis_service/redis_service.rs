use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use crate::config::{APP_CONFIG, OTP_TTL_SECONDS};

pub static REDIS_CLIENT: Lazy<redis::Client> = Lazy::new(|| {
    redis::Client::open(APP_CONFIG.redis_url.as_str()).expect("Failed to create Redis client")
});

pub async fn init_redis_connection() -> Result<()> {
    // Test connection
    let mut conn = REDIS_CLIENT
        .get_connection_manager()
        .await
        .context("Failed to get Redis connection")?;

    let _: String = redis::cmd("PING")
        .query_async(&mut conn)
        .await
        .context("Failed to ping Redis")?;

    Ok(())
}

pub async fn get_redis() -> Result<ConnectionManager> {
    REDIS_CLIENT
        .get_connection_manager()
        .await
        .context("Failed to get Redis connection")
}

/// Pending registration OTPs, keyed by email.
///
/// Expiry is enforced by the store itself: codes are written with a TTL, so
/// an expired code is simply absent on read. Re-issuing overwrites the
/// previous code, and a successful verification deletes the key, which makes
/// every code single-use.
pub struct OtpStore;

impl OtpStore {
    fn key(email: &str) -> String {
        format!("otp:register:{}", email)
    }

    pub async fn store_code(email: &str, code: &str) -> Result<()> {
        let mut redis = get_redis().await?;
        let _: () = redis
            .set_ex(Self::key(email), code, OTP_TTL_SECONDS)
            .await?;
        Ok(())
    }

    pub async fn fetch_code(email: &str) -> Result<Option<String>> {
        let mut redis = get_redis().await?;
        let code: Option<String> = redis.get(Self::key(email)).await?;
        Ok(code)
    }

    pub async fn consume(email: &str) -> Result<()> {
        let mut redis = get_redis().await?;
        let _: () = redis.del(Self::key(email)).await?;
        Ok(())
    }
}
