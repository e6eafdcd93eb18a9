//! 호출 단위 데드라인
//!
//! 외부 호출(세션 스토어, 사용자 저장소)은 모두 고정 데드라인 안에서 끝나야 합니다.
//! 데드라인 초과는 일시적 장애로 취급되며, 인증 판단(폐기/무효)으로 바뀌지 않습니다.

use std::future::Future;
use std::time::Duration;

use crate::errors::{AppError, AuthError, StoreError};

/// 데드라인 초과를 자기 에러 타입으로 표현할 수 있는 타입
pub trait TimedOut {
    fn timed_out() -> Self;
}

impl TimedOut for StoreError {
    fn timed_out() -> Self {
        StoreError::Timeout
    }
}

impl TimedOut for AuthError {
    fn timed_out() -> Self {
        AuthError::Timeout
    }
}

impl TimedOut for AppError {
    fn timed_out() -> Self {
        AppError::Timeout
    }
}

/// `fut`를 `limit` 안에 완료시키고, 넘기면 `E::timed_out()`을 반환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let value = with_deadline(Duration::from_secs(5), store.get(&key)).await?;
/// ```
pub async fn with_deadline<F, T, E>(limit: Duration, fut: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: TimedOut,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(E::timed_out()),
    }
}
