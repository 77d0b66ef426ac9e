//! # Redis 클라이언트 래퍼
//!
//! 리프레시 토큰 저장소가 사용하는 최소한의 Redis 명령(SET PX, GET, EXISTS, DEL)을
//! 감싸고, 드라이버 오류를 [`AppError::StoreError`]로 변환합니다.
//! Spring의 `StringRedisTemplate`과 비슷한 위치에 있습니다.
//!
//! ## 연결 관리
//!
//! 멀티플렉싱 연결을 사용하므로 단일 TCP 연결에서 여러 동시 요청을 처리합니다.

use redis::{AsyncCommands, Client, RedisError};
use crate::core::errors::{AppError, AppResult};

/// Redis 클라이언트 래퍼
#[derive(Clone)]
pub struct RedisClient {
    client: Client,
}

impl RedisClient {
    /// 새 Redis 클라이언트를 생성하고 PING으로 연결을 확인합니다.
    ///
    /// ## 예제
    ///
    /// ```rust,ignore
    /// let redis = RedisClient::new(&StoreConfig::redis_url()).await?;
    /// ```
    pub async fn new(redis_url: &str) -> AppResult<Self> {
        let client = Client::open(redis_url).map_err(store_error)?;

        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(store_error)?;
        redis::cmd("PING")
            .query_async::<()>(&mut conn)
            .await
            .map_err(store_error)?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    /// 밀리초 단위 만료 시간과 함께 문자열 값을 저장합니다. 기존 값은 덮어씁니다.
    pub async fn set_with_expiry_millis(&self, key: &str, value: &str, millis: u64) -> AppResult<()> {
        let mut conn = self.connection().await?;
        conn.pset_ex::<_, _, ()>(key, value, millis)
            .await
            .map_err(store_error)
    }

    pub async fn get_string(&self, key: &str) -> AppResult<Option<String>> {
        let mut conn = self.connection().await?;
        conn.get(key).await.map_err(store_error)
    }

    pub async fn exists(&self, key: &str) -> AppResult<bool> {
        let mut conn = self.connection().await?;
        conn.exists(key).await.map_err(store_error)
    }

    /// 키를 삭제합니다. 키가 없어도 성공입니다.
    pub async fn del(&self, key: &str) -> AppResult<()> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(key).await.map_err(store_error)
    }

    async fn connection(&self) -> AppResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(store_error)
    }
}

fn store_error(e: RedisError) -> AppError {
    AppError::StoreError(format!("Redis 명령 실패: {}", e))
}
