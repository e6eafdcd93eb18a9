//! 슬라이딩 윈도우 Rate Limiter
//!
//! 키(보통 클라이언트 IP)마다 최근 허용된 요청의 시각을 순서대로 보관하고,
//! `[now - interval, now]` 구간 안의 개수가 `rate` 미만일 때만 요청을 허용합니다.
//! 거부된 요청은 기록하지 않습니다.
//!
//! 읽기-정리-추가는 하나의 잠금 안에서 수행됩니다. 오래 쓰지 않은 키는
//! [`RateLimiter::sweep`]으로 제거되며, [`RateLimiter::spawn_sweeper`]가 이를
//! 주기적으로 실행합니다.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use log::debug;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::config::LimiterSettings;

#[derive(Debug)]
pub struct RateLimiter {
    rate: usize,
    interval: Duration,
    windows: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl RateLimiter {
    pub fn new(rate: usize, interval: Duration) -> Self {
        Self {
            rate,
            interval,
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_settings(settings: &LimiterSettings) -> Self {
        Self::new(settings.rate, settings.interval)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, VecDeque<Instant>>> {
        self.windows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 현재 시각 기준으로 요청 허용 여부를 판단합니다.
    pub fn allow(&self, key: &str) -> bool {
        self.allow_at(key, Instant::now())
    }

    /// `now` 시각 기준으로 요청 허용 여부를 판단합니다.
    pub fn allow_at(&self, key: &str, now: Instant) -> bool {
        let window_start = now.checked_sub(self.interval);
        let mut windows = self.lock();
        let window = windows.entry(key.to_string()).or_default();

        if let Some(start) = window_start {
            while window.front().is_some_and(|ts| *ts < start) {
                window.pop_front();
            }
        }

        if window.len() < self.rate {
            window.push_back(now);
            true
        } else {
            false
        }
    }

    /// 윈도우를 벗어난 키를 제거하고 제거한 개수를 반환합니다.
    pub fn sweep(&self) -> usize {
        self.sweep_at(Instant::now())
    }

    pub fn sweep_at(&self, now: Instant) -> usize {
        let Some(window_start) = now.checked_sub(self.interval) else {
            return 0;
        };

        let mut windows = self.lock();
        let before = windows.len();
        windows.retain(|_, window| window.back().is_some_and(|newest| *newest >= window_start));
        before - windows.len()
    }

    /// 현재 추적 중인 키 개수
    pub fn tracked_keys(&self) -> usize {
        self.lock().len()
    }

    /// `every` 주기로 [`sweep`](Self::sweep)을 실행하는 백그라운드 작업을 띄웁니다.
    ///
    /// 리미터가 모두 drop되면 작업도 종료됩니다.
    pub fn spawn_sweeper(self: &Arc<Self>, every: Duration) -> JoinHandle<()> {
        let limiter = Arc::downgrade(self);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            // 첫 tick은 즉시 완료됨
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let Some(limiter) = limiter.upgrade() else {
                    break;
                };
                let evicted = limiter.sweep();
                if evicted > 0 {
                    debug!(
                        "🧹 rate limiter sweep: {}개 키 제거, {}개 유지",
                        evicted,
                        limiter.tracked_keys()
                    );
                }
            }
        })
    }
}
