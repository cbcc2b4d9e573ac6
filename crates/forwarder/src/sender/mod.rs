//! Syslog 전달기
//!
//! 정규화된 이벤트 배치를 원격 syslog 수집기로 전달합니다.
//! 전송 프로토콜에 따라 서브모듈로 분기합니다:
//!
//! - [`tcp`]: 배치 전체를 하나의 페이로드로 조립해 단일 연결로 전송
//!   (all-or-nothing)
//! - [`udp`]: 이벤트마다 데이터그램 하나를 best-effort 전송
//!
//! 두 경로 모두 `|Normal|` 이벤트를 건너뛰고, 라인 조립은 항상 원본
//! 이벤트(필드 재작성 전)에서 타임스탬프와 호스트명을 끌어냅니다 --
//! 재작성이 `sourceServiceName=`을 `cs3=`로 바꾸기 때문입니다.

mod tcp;
mod udp;

use tracing::debug;

use crate::config::{ForwarderConfig, TransportKind};
use crate::error::ForwarderError;
use crate::priority::WIRE_PRIORITY;
use crate::timestamp;

/// 전송 라인에 기록되는 고정 애플리케이션 태그
pub const APPLICATION: &str = "cwaf";

/// 정보성 이벤트 필터 마커 -- 경보만 전달
const NORMAL_MARKER: &str = "|Normal|";

/// 이벤트가 필터 대상인지 확인합니다.
fn is_filtered(message: &str) -> bool {
    message.contains(NORMAL_MARKER)
}

/// 전송 라인 하나를 조립합니다.
///
/// `raw`는 필드 재작성 전의 원본 이벤트, `body`는 재작성이 끝난 본문입니다.
/// 호스트명 오버라이드가 설정되어 있으면 배치 전체에 고정값을 쓰고,
/// 아니면 원본 이벤트에서 추출합니다.
fn wire_line(config: &ForwarderConfig, raw: &str, body: &str) -> String {
    let hostname = match config.hostname_override() {
        Some(fixed) => fixed.to_owned(),
        None => timestamp::resolve_hostname(raw),
    };
    let stamp = timestamp::resolve_timestamp(raw);
    format!("<{WIRE_PRIORITY}> {stamp} {hostname} {APPLICATION} {body}\n")
}

/// Syslog 전달기
///
/// 설정된 전송 프로토콜로 이벤트 배치를 전달합니다.
/// 내부 상태를 갖지 않으므로 배치마다 재사용할 수 있습니다.
pub struct SyslogForwarder {
    config: ForwarderConfig,
}

impl SyslogForwarder {
    /// 새 전달기를 생성합니다.
    pub fn new(config: ForwarderConfig) -> Self {
        debug!(
            host = %config.host,
            port = config.port,
            transport = %config.transport,
            log_hostname = %config.log_hostname,
            "syslog forwarder created"
        );
        Self { config }
    }

    /// 현재 설정을 반환합니다.
    pub fn config(&self) -> &ForwarderConfig {
        &self.config
    }

    /// 이벤트 배치를 전달합니다.
    ///
    /// `source_label`은 각 라인에 `oldFileName=` 출처 필드로 부착됩니다.
    /// 반환값은 실제로 전송된 라인 수입니다. TCP는 배치 전체가 하나의
    /// 페이로드로 성공하거나 실패하고, UDP는 데이터그램별로 실패를
    /// 기록한 뒤 계속 진행합니다.
    pub async fn send(&self, events: &[String], source_label: &str) -> Result<usize, ForwarderError> {
        match self.config.transport {
            TransportKind::Tcp => tcp::send(&self.config, events, source_label).await,
            TransportKind::Udp => udp::send(&self.config, events, source_label).await,
        }
    }
}
