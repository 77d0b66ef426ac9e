//! 캐싱 계층 모듈
//!
//! 리프레시 토큰 저장소의 두 가지 백엔드를 제공합니다.
//!
//! - [`redis`] - Redis 클라이언트 래퍼 (운영 환경)
//! - [`memory`] - 프로세스 로컬 TTL 캐시 (단독 구동, 테스트)
//!
//! # 환경 설정
//!
//! ```bash
//! REVOCATION_STORE=redis            # redis | memory, 기본값 redis
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
pub mod memory;

pub use self::redis::RedisClient;
pub use self::memory::MemoryCache;
