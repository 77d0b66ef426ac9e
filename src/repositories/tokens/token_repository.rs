//! # 리프레시 토큰 저장소
//!
//! 신원(이메일)별로 "현재 유효한" 리프레시 토큰 하나만 보관합니다.
//! 저장소에 남아 있는 값과 정확히 일치하는 리프레시 토큰만 재발급에 쓸 수 있으므로,
//! 로그아웃이나 회전(rotation)으로 값이 지워지거나 바뀌면 예전 토큰은 즉시 무효가 됩니다.
//!
//! ## 백엔드
//!
//! | 구현체 | 용도 |
//! |--------|------|
//! | [`RedisRevocationStore`] | 운영 환경, 여러 인스턴스가 공유 |
//! | [`InMemoryRevocationStore`] | 단독 구동, 테스트 |
//!
//! 두 구현체 모두 키 형식 `refresh_token:{identity}`를 사용하고,
//! 항목은 저장 시 지정한 TTL이 지나면 사라집니다.

use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use crate::caching::{MemoryCache, RedisClient};
use crate::core::errors::AppResult;
use crate::utils::clock::Clock;

const KEY_PREFIX: &str = "refresh_token";

fn refresh_key(identity: &str) -> String {
    format!("{}:{}", KEY_PREFIX, identity)
}

/// 신원별 현재 리프레시 토큰 저장소
///
/// 백엔드 장애는 `AppError::StoreError`로 보고하며, 인증 실패로 바꾸지 않습니다.
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// 신원의 현재 리프레시 토큰을 저장하거나 교체합니다.
    async fn put(&self, identity: &str, refresh_token: &str, ttl: Duration) -> AppResult<()>;

    /// 살아있는 항목이 있으면 그 값을 반환합니다.
    async fn get(&self, identity: &str) -> AppResult<Option<String>>;

    async fn exists(&self, identity: &str) -> AppResult<bool>;

    /// 항목을 제거합니다. 없는 항목을 지워도 성공입니다.
    async fn delete(&self, identity: &str) -> AppResult<()>;
}

/// Redis 기반 저장소
#[derive(Clone)]
pub struct RedisRevocationStore {
    redis: Arc<RedisClient>,
}

impl RedisRevocationStore {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn put(&self, identity: &str, refresh_token: &str, ttl: Duration) -> AppResult<()> {
        let millis = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1);
        self.redis
            .set_with_expiry_millis(&refresh_key(identity), refresh_token, millis)
            .await?;

        log::debug!("리프레시 토큰 저장 완료 - identity: {}, ttl: {}ms", identity, millis);
        Ok(())
    }

    async fn get(&self, identity: &str) -> AppResult<Option<String>> {
        self.redis.get_string(&refresh_key(identity)).await
    }

    async fn exists(&self, identity: &str) -> AppResult<bool> {
        self.redis.exists(&refresh_key(identity)).await
    }

    async fn delete(&self, identity: &str) -> AppResult<()> {
        self.redis.del(&refresh_key(identity)).await?;
        log::debug!("리프레시 토큰 삭제 - identity: {}", identity);
        Ok(())
    }
}

/// 인메모리 저장소
///
/// 만료 판정은 주입된 [`Clock`]을 따르므로 테스트에서 시간 경과를 재현할 수 있습니다.
#[derive(Clone, Default)]
pub struct InMemoryRevocationStore {
    cache: MemoryCache,
}

impl InMemoryRevocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            cache: MemoryCache::with_clock(clock),
        }
    }
}

#[async_trait]
impl RevocationStore for InMemoryRevocationStore {
    async fn put(&self, identity: &str, refresh_token: &str, ttl: Duration) -> AppResult<()> {
        self.cache.set_with_expiry(&refresh_key(identity), refresh_token, ttl)
    }

    async fn get(&self, identity: &str) -> AppResult<Option<String>> {
        self.cache.get(&refresh_key(identity))
    }

    async fn exists(&self, identity: &str) -> AppResult<bool> {
        Ok(self.cache.get(&refresh_key(identity))?.is_some())
    }

    async fn delete(&self, identity: &str) -> AppResult<()> {
        self.cache.remove(&refresh_key(identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clock::ManualClock;

    const TTL: Duration = Duration::from_secs(14 * 24 * 60 * 60);

    #[actix_web::test]
    async fn test_put_then_get_and_exists() {
        let store = InMemoryRevocationStore::new();

        store.put("example@friendy.com", "refresh-1", TTL).await.unwrap();

        assert_eq!(
            store.get("example@friendy.com").await.unwrap(),
            Some("refresh-1".to_string())
        );
        assert!(store.exists("example@friendy.com").await.unwrap());
        assert!(!store.exists("other@friendy.com").await.unwrap());
    }

    #[actix_web::test]
    async fn test_put_replaces_previous_value() {
        let store = InMemoryRevocationStore::new();

        store.put("example@friendy.com", "refresh-1", TTL).await.unwrap();
        store.put("example@friendy.com", "refresh-2", TTL).await.unwrap();

        assert_eq!(
            store.get("example@friendy.com").await.unwrap(),
            Some("refresh-2".to_string())
        );
    }

    #[actix_web::test]
    async fn test_delete_is_idempotent() {
        let store = InMemoryRevocationStore::new();

        store.put("example@friendy.com", "refresh-1", TTL).await.unwrap();
        store.delete("example@friendy.com").await.unwrap();
        store.delete("example@friendy.com").await.unwrap();

        assert!(!store.exists("example@friendy.com").await.unwrap());
        assert_eq!(store.get("example@friendy.com").await.unwrap(), None);
    }

    #[actix_web::test]
    async fn test_entry_disappears_after_ttl() {
        let clock = ManualClock::starting_now();
        let store = InMemoryRevocationStore::with_clock(Arc::new(clock.clone()));

        store.put("example@friendy.com", "refresh-1", TTL).await.unwrap();
        clock.advance(chrono::Duration::days(14));

        assert!(!store.exists("example@friendy.com").await.unwrap());
    }
}
