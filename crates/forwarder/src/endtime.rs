//! 종료 시각 보정
//!
//! 업스트림 특성상 진행 중인 이벤트(예: 아직 끝나지 않은 DDoS 공격)는
//! `end=0`으로 기록됩니다. 다운스트림 SIEM은 종료 시각 0을 거부하거나
//! 잘못 정렬하므로, 시작 시각 epoch로 종료 시각을 다시 채웁니다.
//!
//! 이 보정은 connectionless(UDP) 전송 경로에서만 적용됩니다.

use tracing::debug;

use crate::timestamp;

/// 필드 재작성이 끝난 이벤트의 `end=0`을 시작 시각으로 보정합니다.
///
/// 리터럴 부분 문자열 `end=0`이 있으면 `start=` 필드의 원시 epoch를
/// 재계산해 첫 번째 등장만 `end=<start-epoch>`로 치환합니다.
/// `end=0`이 없으면 이벤트를 그대로 반환합니다.
pub fn correct_end_time(message: &str) -> String {
    if !message.contains("end=0") {
        return message.to_owned();
    }

    let start_epoch = timestamp::raw_epoch(message, "start=");
    let replacement = format!("end={start_epoch}");
    debug!(%replacement, "zero end time corrected to event start time");
    message.replacen("end=0", &replacement, 1)
}
