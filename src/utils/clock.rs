//! 시각 공급자
//!
//! 토큰 만료 판정과 인메모리 저장소 TTL은 모두 `Clock`을 통해 현재 시각을 얻습니다.
//! 운영 환경에서는 [`SystemClock`]을, 테스트에서는 [`ManualClock`]을 주입해
//! 실제로 기다리지 않고 시간 경과를 재현합니다.

use std::sync::{Arc, RwLock};
use chrono::{DateTime, Duration, Utc};

/// 현재 시각 공급 trait
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 프로세스 벽시계
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 수동으로 전진시키는 시계
///
/// 복제본끼리 같은 시각을 공유하므로, 토큰 발급기와 저장소에
/// 동일한 인스턴스를 나눠 주면 두 쪽의 시간이 함께 흐릅니다.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<RwLock<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(RwLock::new(start)),
        }
    }

    /// 현재 시각에서 시작하는 시계
    pub fn starting_now() -> Self {
        Self::new(Utc::now())
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *now += by;
    }

    pub fn set(&self, at: DateTime<Utc>) {
        let mut now = self.now.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *now = at;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shares_time_between_clones() {
        let clock = ManualClock::starting_now();
        let other = clock.clone();
        let before = clock.now();

        other.advance(Duration::seconds(30));

        assert_eq!(clock.now() - before, Duration::seconds(30));
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();

        assert!(second >= first);
    }
}
