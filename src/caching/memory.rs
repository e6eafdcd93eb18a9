//! 인메모리 세션 스토어
//!
//! Redis와 같은 의미(키별 TTL, `SET NX`, 원자적 배치)를 프로세스 내부에서
//! 제공합니다. 만료된 항목은 조회 시점에 지연 삭제됩니다.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use async_trait::async_trait;

use super::{SessionStore, StoreBatch, StoreOp};
use crate::errors::StoreError;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        // 패닉으로 잠금이 오염돼도 맵 자체는 일관된 상태
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn live_value(entries: &mut HashMap<String, Entry>, key: &str, now: Instant) -> Option<String> {
        match entries.get(key) {
            Some(entry) if entry.expires_at > now => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn insert(entries: &mut HashMap<String, Entry>, key: &str, value: &str, ttl: Duration) {
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );
    }

    /// 아직 만료되지 않은 키의 개수
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.lock().values().filter(|e| e.expires_at > now).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        Self::insert(&mut self.lock(), key, value, ttl);
        Ok(())
    }

    async fn set_if_absent(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<bool, StoreError> {
        let mut entries = self.lock();
        if Self::live_value(&mut entries, key, Instant::now()).is_some() {
            return Ok(false);
        }
        Self::insert(&mut entries, key, value, ttl);
        Ok(true)
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(Self::live_value(&mut self.lock(), key, Instant::now()))
    }

    async fn delete(&self, keys: &[String]) -> Result<(), StoreError> {
        let mut entries = self.lock();
        for key in keys {
            entries.remove(key);
        }
        Ok(())
    }

    async fn exec(&self, batch: StoreBatch) -> Result<(), StoreError> {
        let mut entries = self.lock();
        for op in batch.ops() {
            match op {
                StoreOp::Set { key, value, ttl } => Self::insert(&mut entries, key, value, *ttl),
                StoreOp::Delete { keys } => {
                    for key in keys {
                        entries.remove(key);
                    }
                }
            }
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
