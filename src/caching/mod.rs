//! 세션 스토어 계층
//!
//! 인증 코어가 사용하는 키-값 저장소 추상화입니다. 두 가지 키 공간을 관리합니다.
//!
//! - 활성 세션 인덱스: `<access_token> → <user_id>`
//! - 블랙리스트: `blacklist:<token> → "true"`
//!
//! # 구현체
//!
//! - [`redis::RedisSessionStore`] - 운영 환경 (`ConnectionManager` 기반)
//! - [`memory::MemorySessionStore`] - 테스트 및 로컬 개발용 인메모리 구현
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::{SessionStore, StoreBatch, blacklist_key};
//!
//! store.set(&access, &user_id, Duration::from_secs(86_400)).await?;
//!
//! let batch = StoreBatch::new()
//!     .set(blacklist_key(&access), "true", Duration::from_secs(86_400))
//!     .set(blacklist_key(&refresh), "true", Duration::from_secs(172_800))
//!     .delete(access.clone());
//! store.exec(batch).await?;
//! ```

pub mod memory;
pub mod redis;

use std::time::Duration;

use async_trait::async_trait;

use crate::errors::StoreError;

pub use memory::MemorySessionStore;
pub use redis::RedisSessionStore;

/// 블랙리스트 키 접두사
pub const BLACKLIST_PREFIX: &str = "blacklist:";

/// 블랙리스트 항목의 값
pub const BLACKLIST_MARKER: &str = "true";

/// 토큰의 블랙리스트 키를 만듭니다.
pub fn blacklist_key(token: &str) -> String {
    format!("{}{}", BLACKLIST_PREFIX, token)
}

/// 배치에 담기는 단일 쓰기 연산
#[derive(Debug, Clone, PartialEq)]
pub enum StoreOp {
    Set {
        key: String,
        value: String,
        ttl: Duration,
    },
    Delete {
        keys: Vec<String>,
    },
}

/// 순서가 보존되는 쓰기 연산 묶음
///
/// 한 번의 왕복으로 전송되며, 전부 적용되거나 전부 실패합니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreBatch {
    ops: Vec<StoreOp>,
}

impl StoreBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>, ttl: Duration) -> Self {
        self.ops.push(StoreOp::Set {
            key: key.into(),
            value: value.into(),
            ttl,
        });
        self
    }

    pub fn delete(mut self, key: impl Into<String>) -> Self {
        self.ops.push(StoreOp::Delete {
            keys: vec![key.into()],
        });
        self
    }

    pub fn ops(&self) -> &[StoreOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// 키별 만료 시간을 지원하는 키-값 저장소
///
/// 키가 없는 것은 에러가 아니라 `Ok(None)`입니다. 호출자는 이 결과로 분기합니다
/// (예: 블랙리스트에 없으면 "폐기되지 않음").
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// 만료 시간과 함께 값을 저장합니다 (upsert).
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError>;

    /// 키가 없을 때만 저장합니다. 저장했으면 `true`.
    async fn set_if_absent(&self, key: &str, value: &str, ttl: Duration)
    -> Result<bool, StoreError>;

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// 없는 키를 지워도 에러가 아닙니다.
    async fn delete(&self, keys: &[String]) -> Result<(), StoreError>;

    /// 배치를 한 단위로 실행합니다.
    async fn exec(&self, batch: StoreBatch) -> Result<(), StoreError>;

    /// 연결 확인
    async fn ping(&self) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blacklist_key_format() {
        assert_eq!(blacklist_key("abc.def"), "blacklist:abc.def");
    }

    #[test]
    fn test_batch_preserves_order() {
        let ttl = Duration::from_secs(10);
        let batch = StoreBatch::new().set("a", "1", ttl).delete("b").set("c", "3", ttl);

        let keys: Vec<&str> = batch
            .ops()
            .iter()
            .map(|op| match op {
                StoreOp::Set { key, .. } => key.as_str(),
                StoreOp::Delete { keys } => keys[0].as_str(),
            })
            .collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }
}
