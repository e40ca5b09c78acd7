//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ServerConfig;
use crate::services::jwt::JwtKeys;
use crate::services::sms::{LogSmsSender, SmsSender};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the database pool, token keys, and the OTP
/// delivery seam.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    pool: PgPool,
    jwt: JwtKeys,
    sms: Arc<dyn SmsSender>,
}

impl AppState {
    /// Create a new application state with the log-backed OTP sender.
    #[must_use]
    pub fn new(config: ServerConfig, pool: PgPool) -> Self {
        Self::with_sms(config, pool, Arc::new(LogSmsSender))
    }

    /// Create a new application state with a specific OTP sender.
    #[must_use]
    pub fn with_sms(config: ServerConfig, pool: PgPool, sms: Arc<dyn SmsSender>) -> Self {
        let jwt = JwtKeys::new(&config.jwt_secret, config.token_ttl_hours);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                jwt,
                sms,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the token signing keys.
    #[must_use]
    pub fn jwt(&self) -> &JwtKeys {
        &self.inner.jwt
    }

    /// Get a reference to the OTP delivery seam.
    #[must_use]
    pub fn sms(&self) -> &dyn SmsSender {
        self.inner.sms.as_ref()
    }
}
