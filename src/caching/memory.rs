//! # 인메모리 TTL 캐시
//!
//! Redis 없이 구동하거나 테스트할 때 쓰는 프로세스 로컬 키-값 캐시입니다.
//! 만료된 항목은 조회 시점에 지연 삭제되고, 새 값을 쓸 때 한꺼번에 정리됩니다.
//! 현재 시각은 주입된 [`Clock`]에서 얻습니다.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use chrono::{DateTime, Utc};
use crate::core::errors::{AppError, AppResult};
use crate::utils::clock::{Clock, SystemClock};

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// 만료 시간을 갖는 인메모리 캐시
#[derive(Clone)]
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
    clock: Arc<dyn Clock>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }

    pub fn set_with_expiry(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| AppError::StoreError(format!("TTL 변환 실패: {}", e)))?;
        let now = self.clock.now();
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::StoreError("만료 시각 계산 실패".to_string()))?;

        let mut entries = self
            .entries
            .write()
            .map_err(|_| AppError::StoreError("인메모리 캐시 잠금 실패".to_string()))?;
        entries.retain(|_, entry| now < entry.expires_at);
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    /// 살아있는 값을 조회합니다. 만료된 항목은 이 시점에 제거됩니다.
    pub fn get(&self, key: &str) -> AppResult<Option<String>> {
        let now = self.clock.now();
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AppError::StoreError("인메모리 캐시 잠금 실패".to_string()))?;

        match entries.get(key) {
            Some(entry) if now < entry.expires_at => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    pub fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AppError::StoreError("인메모리 캐시 잠금 실패".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}
