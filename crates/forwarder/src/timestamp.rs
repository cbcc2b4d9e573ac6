//! 타임스탬프 및 호스트명 해석
//!
//! 이벤트에 포함된 epoch 필드에서 표시용 타임스탬프와 호스트명을 끌어냅니다.
//! 모든 실패는 지역적으로 복구됩니다 -- 에러 로그를 남기고 현재 벽시계
//! 시각 또는 센티널 호스트명으로 대체하며, 절대 호출자에게 전파하지
//! 않습니다. 필터를 통과한 모든 이벤트는 반드시 라인을 만들어야 하기
//! 때문입니다.

use chrono::{Local, TimeZone, Utc};
use metrics::counter;
use tracing::error;

use logward_core::metrics as m;

use crate::dialect::Dialect;
use crate::error::ForwarderError;

/// 호스트명 추출이 실패했거나 비활성화되었을 때 사용하는 센티널 값
pub use logward_core::config::SENTINEL_HOSTNAME;

/// 고정 타임스탬프 출력 형식
///
/// 실제 서브초 정밀도와 무관하게 항상 리터럴 ".00Z" 접미사로 렌더링합니다.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.00Z";

/// 호스트명 추출 대상 필드
const HOSTNAME_FIELD: &str = "sourceServiceName=";

/// 이벤트의 표시용 타임스탬프를 해석합니다.
///
/// 방언을 감지해 `end=` 값을 밀리초 epoch로 파싱하고 1000으로 나눕니다.
/// 결과가 정확히 0이면 `start=` 필드로 대체합니다 (진행 중인 공격 이벤트는
/// 종료 시각이 0으로 기록되는 업스트림 특성이 있음). 해석된 초 단위 epoch를
/// 로컬 시간으로 변환해 고정 형식으로 렌더링합니다.
///
/// 방언 마커가 없는 이벤트는 조용히, 필드 누락/파싱 실패는 에러 로그를
/// 남기고 현재 벽시계 시각으로 대체합니다.
pub fn resolve_timestamp(message: &str) -> String {
    match timestamp_from_epoch_fields(message) {
        Ok(Some(rendered)) => rendered,
        Ok(None) => now_string(),
        Err(err) => {
            error!(%err, "failed to derive timestamp from event, using wall clock");
            counter!(m::FORWARDER_PARSE_FALLBACKS_TOTAL, m::LABEL_FIELD => "end").increment(1);
            now_string()
        }
    }
}

/// `end=`/`start=` 필드에서 타임스탬프를 계산합니다.
///
/// 반환값: 방언 마커가 없으면 `Ok(None)`, 성공하면 렌더링된 문자열.
fn timestamp_from_epoch_fields(message: &str) -> Result<Option<String>, ForwarderError> {
    let Some(dialect) = Dialect::detect(message) else {
        return Ok(None);
    };

    let mut epoch = epoch_field(dialect, message, "end=")? / 1000;
    if epoch == 0 {
        epoch = epoch_field(dialect, message, "start=")? / 1000;
    }
    Ok(Some(render_epoch(epoch)))
}

/// 방언 구분자를 사용해 정수 epoch 필드를 추출합니다.
fn epoch_field(dialect: Dialect, message: &str, key: &str) -> Result<i64, ForwarderError> {
    let value = dialect
        .field_value(message, key)
        .ok_or_else(|| ForwarderError::Extract {
            field: key.to_owned(),
            reason: "field not present in event".to_owned(),
        })?;
    value.parse::<i64>().map_err(|e| ForwarderError::Extract {
        field: key.to_owned(),
        reason: format!("invalid epoch value '{value}': {e}"),
    })
}

/// 초 단위 epoch를 로컬 시간의 고정 형식 문자열로 렌더링합니다.
///
/// 로컬 타임존으로 표현 불가능한 epoch는 현재 시각으로 대체합니다.
fn render_epoch(epoch: i64) -> String {
    match Local.timestamp_opt(epoch, 0).earliest() {
        Some(dt) => dt.format(TIMESTAMP_FORMAT).to_string(),
        None => now_string(),
    }
}

/// 현재 벽시계 시각을 고정 형식으로 렌더링합니다.
pub fn now_string() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// 임의 필드에서 원시 epoch 값을 추출합니다 (밀리초 나눗셈 없음).
///
/// 종료 시각 보정에서 `start=` epoch를 재계산할 때 사용합니다.
/// 방언 마커가 없으면 현재 벽시계 epoch를 조용히 반환하고, 추출 실패는
/// 에러 로그 후 역시 현재 벽시계 epoch로 대체합니다.
pub fn raw_epoch(message: &str, key: &str) -> i64 {
    let Some(dialect) = Dialect::detect(message) else {
        return Utc::now().timestamp();
    };

    match epoch_field(dialect, message, key) {
        Ok(epoch) => epoch,
        Err(err) => {
            error!(%err, "failed to extract raw epoch, using wall clock");
            counter!(m::FORWARDER_PARSE_FALLBACKS_TOTAL, m::LABEL_FIELD => "start").increment(1);
            Utc::now().timestamp()
        }
    }
}

/// 이벤트 본문에서 표시용 호스트명을 추출합니다.
///
/// `sourceServiceName=` 값을 방언 구분자 기준으로 잘라냅니다. 방언 마커가
/// 없거나 값이 비어 있으면 조용히, 필드가 아예 없으면 에러 로그를 남기고
/// 센티널([`SENTINEL_HOSTNAME`])을 반환합니다.
pub fn resolve_hostname(message: &str) -> String {
    let Some(dialect) = Dialect::detect(message) else {
        return SENTINEL_HOSTNAME.to_owned();
    };

    match dialect.field_value(message, HOSTNAME_FIELD) {
        Some(value) if !value.is_empty() => value.to_owned(),
        Some(_) => SENTINEL_HOSTNAME.to_owned(),
        None => {
            error!("event has no sourceServiceName field, using sentinel hostname");
            counter!(m::FORWARDER_PARSE_FALLBACKS_TOTAL, m::LABEL_FIELD => "sourceServiceName")
                .increment(1);
            SENTINEL_HOSTNAME.to_owned()
        }
    }
}
