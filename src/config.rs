use clap::Parser;
use once_cell::sync::Lazy;

/// Session tokens are valid for one hour; expiry requires a fresh login.
pub const JWT_EXPIRED_TIME: i64 = 3600i64;

/// Registration OTP codes live in Redis for 10 minutes.
pub const OTP_TTL_SECONDS: u64 = 600;
pub const OTP_CODE_LENGTH: usize = 6;

/// Signed identity-document URLs expire after one hour.
pub const SIGNED_URL_TTL_SECONDS: i64 = 3600i64;

pub const NOTIFICATION_LIST_LIMIT: u64 = 5;

pub static APP_CONFIG: Lazy<Config> = Lazy::new(Config::parse);

#[derive(Debug, Parser, Clone)]
pub struct Config {
    #[clap(long, env, default_value_t = 8080)]
    pub port: u16,

    #[clap(long, env, default_value_t = true)]
    pub swagger_enabled: bool,

    #[clap(long, env)]
    pub log_level: String,

    #[clap(long, env)]
    pub database_url: String,

    #[clap(long, env)]
    pub jwt_secret: String,

    #[clap(long, env, default_value = "redis://127.0.0.1:6379")]
    pub redis_url: String,

    #[clap(long, env)]
    pub rabbitmq_uri: String,

    #[clap(long, env, default_value = "./uploads")]
    pub upload_dir: String,

    #[clap(long, env, default_value = "http://localhost:8080")]
    pub public_base_url: String,

    #[clap(long, env)]
    pub admin_email: String,

    #[clap(long, env)]
    pub admin_password: String,

    #[clap(long, env, default_value = "*")]
    pub cors_allowed_origins: String,

    #[clap(long, env, default_value = "local")]
    pub app_env: String,
}
