//! UDP 전송 경로
//!
//! 이벤트마다 데이터그램 하나를 전송합니다. 데이터그램 하나가 실패해도
//! (예: 65,507바이트 한도를 넘는 과대 이벤트) 에러 로그와 메트릭만
//! 남기고 나머지 배치는 계속 전송합니다.
//!
//! 종료 시각 보정(`end=0`)은 이 경로에서만 적용됩니다.

use metrics::counter;
use tokio::net::UdpSocket;
use tracing::{debug, error};

use logward_core::metrics as m;

use super::{is_filtered, wire_line};
use crate::config::ForwarderConfig;
use crate::endtime;
use crate::error::ForwarderError;
use crate::mapper;

/// 이벤트 배치를 이벤트별 UDP 데이터그램으로 전송합니다.
pub(super) async fn send(
    config: &ForwarderConfig,
    events: &[String],
    source_label: &str,
) -> Result<usize, ForwarderError> {
    // 로컬 바인드 실패는 배치 이전의 환경 문제이므로 호출자에게 전파
    let socket = UdpSocket::bind("0.0.0.0:0").await?;
    let addr = (config.host.as_str(), config.port);
    let mut sent = 0usize;

    for event in events {
        if is_filtered(event) {
            counter!(m::FORWARDER_EVENTS_SKIPPED_TOTAL, m::LABEL_TRANSPORT => "udp").increment(1);
            continue;
        }

        let mut body = mapper::remap_fields(event, source_label);
        if body.contains("end=0") {
            body = endtime::correct_end_time(&body);
        }

        let line = wire_line(config, event, &body);
        match socket.send_to(line.as_bytes(), addr).await {
            Ok(_) => {
                counter!(m::FORWARDER_EVENTS_SENT_TOTAL, m::LABEL_TRANSPORT => "udp").increment(1);
                sent += 1;
            }
            Err(e) => {
                error!(
                    host = %config.host,
                    port = config.port,
                    bytes = line.len(),
                    error = %e,
                    "udp datagram send failed, continuing with batch"
                );
                counter!(m::FORWARDER_SEND_FAILURES_TOTAL, m::LABEL_TRANSPORT => "udp")
                    .increment(1);
            }
        }
    }

    debug!(host = %config.host, port = config.port, sent, "udp batch delivered");
    Ok(sent)
}
