//! Session storage implementation
//!
//! Sessions live behind the [`SessionStore`] trait so the dialogue logic does
//! not care where they are kept. The in-memory store is the default; the
//! Redis store keeps sessions across restarts.

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::config::{RedisConfig, SessionBackend, Settings};
use crate::utils::errors::Result;
use super::session::Session;

/// Minimum TTL handed to Redis, in seconds
const MIN_REDIS_TTL_SECONDS: u64 = 60;

/// Key-value access to sessions by user id
#[async_trait]
pub trait SessionStore: Send + Sync + std::fmt::Debug {
    /// Load a live session; expired sessions read as absent
    async fn get(&self, user_id: i64) -> Result<Option<Session>>;

    /// Insert or replace the session of `session.user_id`
    async fn set(&self, session: &Session) -> Result<()>;

    /// Remove a user's session, if any
    async fn clear(&self, user_id: i64) -> Result<()>;

    /// Drop every expired session, returning how many were removed.
    ///
    /// Stores whose entries expire on their own keep the default.
    async fn purge_expired(&self) -> Result<usize> {
        Ok(0)
    }
}

/// Process-memory session store; contents are lost on restart
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<i64, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions, expired ones included
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: i64) -> Result<Option<Session>> {
        let session = self.sessions.read().await.get(&user_id).cloned();

        match session {
            Some(session) if session.is_expired() => {
                debug!(user_id = user_id, expires_at = ?session.expires_at, "Session has expired, removing");
                self.sessions.write().await.remove(&user_id);
                Ok(None)
            }
            other => Ok(other),
        }
    }

    async fn set(&self, session: &Session) -> Result<()> {
        debug!(user_id = session.user_id, step = ?session.step, "Saving session in memory");
        self.sessions.write().await.insert(session.user_id, session.clone());
        Ok(())
    }

    async fn clear(&self, user_id: i64) -> Result<()> {
        if self.sessions.write().await.remove(&user_id).is_some() {
            debug!(user_id = user_id, "Cleared session");
        }
        Ok(())
    }

    async fn purge_expired(&self) -> Result<usize> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired());
        Ok(before - sessions.len())
    }
}

/// Redis-based session store
#[derive(Clone)]
pub struct RedisSessionStore {
    /// Redis connection manager
    connection_manager: redis::aio::ConnectionManager,
    /// Redis configuration
    config: RedisConfig,
    /// TTL for sessions without an explicit expiry
    default_ttl_seconds: u64,
}

impl RedisSessionStore {
    /// Connect to Redis
    pub async fn new(config: RedisConfig, default_ttl_seconds: u64) -> Result<Self> {
        let client = redis::Client::open(config.url.as_str())?;
        let connection_manager = redis::aio::ConnectionManager::new(client).await?;

        Ok(Self {
            connection_manager,
            config,
            default_ttl_seconds,
        })
    }

    /// Test Redis connection
    pub async fn test_connection(&self) -> Result<()> {
        let mut conn = self.connection_manager.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn get(&self, user_id: i64) -> Result<Option<Session>> {
        let key = session_key(&self.config.prefix, user_id);
        let mut conn = self.connection_manager.clone();

        let serialized: Option<String> = match conn.get(&key).await {
            Ok(data) => data,
            Err(e) => {
                error!(user_id = user_id, error = %e, "Failed to get session from Redis");
                return Err(e.into());
            }
        };

        let Some(data) = serialized else {
            debug!(user_id = user_id, "No session found in Redis");
            return Ok(None);
        };

        let session: Session = serde_json::from_str(&data)?;
        if session.is_expired() {
            warn!(user_id = user_id, expires_at = ?session.expires_at, "Session has expired, removing");
            self.clear(user_id).await?;
            return Ok(None);
        }

        Ok(Some(session))
    }

    async fn set(&self, session: &Session) -> Result<()> {
        let key = session_key(&self.config.prefix, session.user_id);
        let serialized = serde_json::to_string(session)?;
        let ttl_seconds = redis_ttl_seconds(session.expires_at, Utc::now(), self.default_ttl_seconds);
        let mut conn = self.connection_manager.clone();

        conn.set_ex::<_, _, ()>(&key, serialized, ttl_seconds).await?;
        debug!(user_id = session.user_id, ttl_seconds = ttl_seconds, "Session saved to Redis");
        Ok(())
    }

    async fn clear(&self, user_id: i64) -> Result<()> {
        let key = session_key(&self.config.prefix, user_id);
        let mut conn = self.connection_manager.clone();

        let deleted: u32 = conn.del(&key).await?;
        debug!(user_id = user_id, deleted = deleted, "Cleared session in Redis");
        Ok(())
    }
}

impl std::fmt::Debug for RedisSessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSessionStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Seconds a session should live in Redis, never below the floor
pub fn redis_ttl_seconds(expires_at: Option<DateTime<Utc>>, now: DateTime<Utc>, default_ttl_seconds: u64) -> u64 {
    match expires_at {
        Some(expires_at) => {
            let remaining = (expires_at - now).num_seconds();
            remaining.max(MIN_REDIS_TTL_SECONDS as i64) as u64
        }
        None => default_ttl_seconds,
    }
}

/// Periodically sweep expired sessions out of `store`
pub fn start_cleanup(store: Arc<dyn SessionStore>, every: std::time::Duration) -> JoinHandle<()> {
    info!("Started session cleanup task with interval {:?}", every);

    tokio::spawn(async move {
        let mut cleanup_interval = tokio::time::interval(every);

        loop {
            cleanup_interval.tick().await;

            match store.purge_expired().await {
                Ok(count) => {
                    if count > 0 {
                        info!("Cleanup task removed {} expired sessions", count);
                    }
                }
                Err(e) => {
                    error!("Session cleanup failed: {}", e);
                }
            }
        }
    })
}

/// Redis key holding a user's session
pub fn session_key(prefix: &str, user_id: i64) -> String {
    format!("{}session:{}", prefix, user_id)
}

/// Create the session store selected in the settings
pub async fn build_session_store(settings: &Settings) -> Result<Arc<dyn SessionStore>> {
    match settings.session.backend {
        SessionBackend::Memory => {
            info!("Using in-memory session store");
            Ok(Arc::new(InMemorySessionStore::new()))
        }
        SessionBackend::Redis => {
            info!(url = %settings.redis.url, "Using Redis session store");
            let store = RedisSessionStore::new(settings.redis.clone(), settings.session.ttl_seconds).await?;
            store.test_connection().await?;
            Ok(Arc::new(store))
        }
    }
}
