//! # Redis 세션 스토어 구현
//!
//! `ConnectionManager`를 사용하여 단일 멀티플렉싱 연결을 모든 워커가 공유하고,
//! 연결이 끊기면 자동으로 재연결합니다.
//!
//! ## 명령 매핑
//!
//! | 연산 | Redis 명령 |
//! |------|-----------|
//! | `set` | `SET key value PX ttl` |
//! | `set_if_absent` | `SET key value NX PX ttl` |
//! | `get` | `GET key` |
//! | `delete` | `DEL key...` |
//! | `exec` | `MULTI` / ... / `EXEC` 파이프라인 |
//! | `ping` | `PING` |

use std::time::Duration;

use async_trait::async_trait;
use log::info;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use super::{SessionStore, StoreBatch, StoreOp};
use crate::errors::StoreError;

/// Redis 기반 세션 스토어
///
/// `ConnectionManager`는 clone 비용이 낮으므로 호출마다 복제해서 사용합니다.
#[derive(Clone)]
pub struct RedisSessionStore {
    manager: ConnectionManager,
}

impl RedisSessionStore {
    /// Redis에 연결하고 `PING`으로 가용성을 확인합니다.
    ///
    /// # Arguments
    ///
    /// * `redis_url` - `redis://host:6379`, `rediss://...` 형식의 URL
    /// * `startup_timeout` - 연결과 PING 전체에 적용되는 데드라인
    ///
    /// # Errors
    ///
    /// * `StoreError::Connection` - 잘못된 URL, 연결 실패
    /// * `StoreError::Timeout` - 데드라인 초과
    pub async fn connect(redis_url: &str, startup_timeout: Duration) -> Result<Self, StoreError> {
        let client =
            Client::open(redis_url).map_err(|e| StoreError::Connection(e.to_string()))?;

        let manager = tokio::time::timeout(startup_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| StoreError::Timeout)??;

        let store = Self { manager };
        tokio::time::timeout(startup_timeout, store.ping())
            .await
            .map_err(|_| StoreError::Timeout)??;

        info!("✅ Redis 연결 성공");
        Ok(store)
    }
}

fn ttl_millis(ttl: Duration) -> u64 {
    // PX 0은 Redis가 거부하므로 최소 1ms
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1)
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        let mut conn = self.manager.clone();
        conn.pset_ex::<_, _, ()>(key, value, ttl_millis(ttl)).await?;
        Ok(())
    }

    async fn set_if_absent(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<bool, StoreError> {
        let mut conn = self.manager.clone();
        let reply: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("NX")
            .arg("PX")
            .arg(ttl_millis(ttl))
            .query_async(&mut conn)
            .await?;
        Ok(reply.is_some())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn delete(&self, keys: &[String]) -> Result<(), StoreError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.manager.clone();
        conn.del::<_, ()>(keys).await?;
        Ok(())
    }

    async fn exec(&self, batch: StoreBatch) -> Result<(), StoreError> {
        if batch.is_empty() {
            return Ok(());
        }

        let mut pipe = redis::pipe();
        pipe.atomic();
        for op in batch.ops() {
            match op {
                StoreOp::Set { key, value, ttl } => {
                    pipe.cmd("SET")
                        .arg(key)
                        .arg(value)
                        .arg("PX")
                        .arg(ttl_millis(*ttl))
                        .ignore();
                }
                StoreOp::Delete { keys } => {
                    pipe.cmd("DEL").arg(keys).ignore();
                }
            }
        }

        let mut conn = self.manager.clone();
        pipe.query_async::<()>(&mut conn).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.manager.clone();
        redis::cmd("PING").query_async::<()>(&mut conn).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_millis_never_zero() {
        assert_eq!(ttl_millis(Duration::from_secs(2)), 2000);
        assert_eq!(ttl_millis(Duration::from_micros(10)), 1);
        assert_eq!(ttl_millis(Duration::ZERO), 1);
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_url() {
        let result = RedisSessionStore::connect("not a url", Duration::from_millis(100)).await;
        assert!(matches!(result, Err(StoreError::Connection(_))));
    }
}
