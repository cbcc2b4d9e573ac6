//! 메트릭 상수 및 설명 등록
//!
//! 모든 Prometheus 메트릭의 이름과 설명을 중앙에서 정의합니다.
//! 각 모듈은 이 상수를 사용하여 `metrics::counter!()` 매크로를 호출합니다.
//!
//! # 네이밍 컨벤션
//!
//! - 접두어: `logward_`
//! - 모듈명: `forwarder_`
//! - 접미어: `_total` (counter)
//!
//! # 사용 예시
//!
//! ```ignore
//! use metrics::counter;
//!
//! counter!(logward_core::metrics::FORWARDER_EVENTS_SENT_TOTAL).increment(1);
//! ```

// ─── 레이블 키 상수 ────────────────────────────────────────────────

/// 전송 프로토콜 레이블 키 (tcp, udp)
pub const LABEL_TRANSPORT: &str = "transport";

/// 추출 대상 필드 레이블 키 (end, start, sourceServiceName)
pub const LABEL_FIELD: &str = "field";

// ─── Forwarder 메트릭 ──────────────────────────────────────────────

/// Forwarder: 전송된 이벤트 라인 수 (counter, label: transport)
pub const FORWARDER_EVENTS_SENT_TOTAL: &str = "logward_forwarder_events_sent_total";

/// Forwarder: `|Normal|` 필터로 건너뛴 이벤트 수 (counter)
pub const FORWARDER_EVENTS_SKIPPED_TOTAL: &str = "logward_forwarder_events_skipped_total";

/// Forwarder: 전송 실패 수 (counter, label: transport)
pub const FORWARDER_SEND_FAILURES_TOTAL: &str = "logward_forwarder_send_failures_total";

/// Forwarder: 필드 추출 실패로 기본값으로 대체한 횟수 (counter, label: field)
pub const FORWARDER_PARSE_FALLBACKS_TOTAL: &str = "logward_forwarder_parse_fallbacks_total";

// ─── 설명 등록 함수 ─────────────────────────────────────────────────

/// 모든 메트릭의 설명(description)을 등록합니다.
///
/// `metrics::describe_counter!()`를 호출하여 Prometheus HELP 텍스트를
/// 설정합니다. 전역 레코더 설치 후 호스트 프로세스 시작 시점에서 한 번만
/// 호출해야 합니다.
pub fn describe_all() {
    use metrics::describe_counter;

    describe_counter!(
        FORWARDER_EVENTS_SENT_TOTAL,
        "Total number of normalized event lines handed to the transport"
    );
    describe_counter!(
        FORWARDER_EVENTS_SKIPPED_TOTAL,
        "Total number of events skipped by the |Normal| filter"
    );
    describe_counter!(
        FORWARDER_SEND_FAILURES_TOTAL,
        "Total number of failed transport sends"
    );
    describe_counter!(
        FORWARDER_PARSE_FALLBACKS_TOTAL,
        "Total number of field extraction failures recovered with a default"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_METRIC_NAMES: &[&str] = &[
        FORWARDER_EVENTS_SENT_TOTAL,
        FORWARDER_EVENTS_SKIPPED_TOTAL,
        FORWARDER_SEND_FAILURES_TOTAL,
        FORWARDER_PARSE_FALLBACKS_TOTAL,
    ];

    #[test]
    fn all_metrics_start_with_logward_prefix() {
        for name in ALL_METRIC_NAMES {
            assert!(
                name.starts_with("logward_"),
                "Metric '{}' does not start with 'logward_' prefix",
                name
            );
        }
    }

    #[test]
    fn counters_end_with_total_suffix() {
        for name in ALL_METRIC_NAMES {
            assert!(
                name.ends_with("_total"),
                "Counter '{}' does not end with '_total' suffix",
                name
            );
        }
    }

    #[test]
    fn describe_all_does_not_panic() {
        // 레코더가 설치되지 않은 상태에서도 패닉하지 않아야 함
        describe_all();
    }

    #[test]
    fn label_keys_are_lowercase() {
        for label in [LABEL_TRANSPORT, LABEL_FIELD] {
            assert_eq!(
                label.to_lowercase(),
                label,
                "Label key '{}' should be lowercase",
                label
            );
        }
    }
}
