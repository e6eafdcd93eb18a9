//! 기간 리터럴 파서
//!
//! `"24h"`, `"168h"`, `"1h30m"`, `"1.5h"`, `"500ms"`, `"-1s"` 형식을 지원합니다.
//! 부호는 선택이며, 그 뒤로 `<숫자><단위>` 그룹이 하나 이상 와야 합니다.
//! 단위: `ns`, `us`/`µs`, `ms`, `s`, `m`, `h`. 단위 없는 값은 `"0"`만 허용합니다.

use chrono::Duration;

use super::ConfigError;

const NANOS_PER_MICRO: i128 = 1_000;
const NANOS_PER_MILLI: i128 = 1_000_000;
const NANOS_PER_SECOND: i128 = 1_000_000_000;

fn unit_nanos(unit: &str) -> Option<i128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(60 * NANOS_PER_SECOND),
        "h" => Some(3600 * NANOS_PER_SECOND),
        _ => None,
    }
}

/// 기간 리터럴을 `chrono::Duration`으로 변환합니다.
///
/// 음수 기간도 표현할 수 있어야 하므로 `std::time::Duration` 대신
/// `chrono::Duration`을 반환합니다.
///
/// # Errors
///
/// * `ConfigError::InvalidDuration` - 형식 오류, 알 수 없는 단위, 범위 초과
///
/// # Examples
///
/// ```rust
/// use session_gate::config::parse_duration;
///
/// assert_eq!(parse_duration("24h").unwrap().num_hours(), 24);
/// assert_eq!(parse_duration("1h30m").unwrap().num_minutes(), 90);
/// assert_eq!(parse_duration("-1s").unwrap().num_seconds(), -1);
/// ```
pub fn parse_duration(literal: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidDuration(literal.to_string());
    let input = literal.trim();

    let (negative, mut rest) = match input.strip_prefix('-') {
        Some(tail) => (true, tail),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    if rest == "0" {
        return Ok(Duration::zero());
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: i128 = 0;
    while !rest.is_empty() {
        let int_len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        let (int_part, after) = rest.split_at(int_len);

        let (frac_part, after) = match after.strip_prefix('.') {
            Some(tail) => {
                let frac_len = tail.find(|c: char| !c.is_ascii_digit()).unwrap_or(tail.len());
                tail.split_at(frac_len)
            }
            None => ("", after),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }

        let unit_len = after
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(after.len());
        let (unit, tail) = after.split_at(unit_len);
        let scale = unit_nanos(unit).ok_or_else(invalid)?;

        let whole: i128 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| invalid())?
        };
        let mut value = whole.checked_mul(scale).ok_or_else(invalid)?;

        if !frac_part.is_empty() {
            // 18자리 이후는 나노초 정밀도에 영향이 없음
            let digits = &frac_part[..frac_part.len().min(18)];
            let frac: i128 = digits.parse().map_err(|_| invalid())?;
            value += frac * scale / 10i128.pow(digits.len() as u32);
        }

        total = total.checked_add(value).ok_or_else(invalid)?;
        if total > i64::MAX as i128 {
            return Err(invalid());
        }
        rest = tail;
    }

    let nanos = if negative { -total } else { total };
    Ok(Duration::nanoseconds(nanos as i64))
}

/// 양수 기간만 허용하는 변환 (스토어 TTL, 타임아웃 용)
///
/// # Errors
///
/// * `ConfigError::InvalidValue` - 0 이하의 기간
pub fn positive_std(
    name: &'static str,
    literal: &str,
) -> Result<std::time::Duration, ConfigError> {
    let parsed = parse_duration(literal)?;
    if parsed <= Duration::zero() {
        return Err(ConfigError::InvalidValue {
            name,
            value: literal.to_string(),
        });
    }
    parsed.to_std().map_err(|_| ConfigError::InvalidValue {
        name,
        value: literal.to_string(),
    })
}
