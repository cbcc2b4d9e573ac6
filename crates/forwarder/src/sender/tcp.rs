//! TCP 전송 경로
//!
//! 배치의 모든 라인을 하나의 페이로드로 조립한 뒤 단일 연결로
//! 전송합니다. 연결이나 쓰기가 실패하면 배치 전체가 실패합니다 --
//! 부분 전송 성공은 보고되지 않습니다.
//!
//! 종료 시각 보정(`end=0`)은 이 경로에 적용되지 않습니다.

use metrics::counter;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{debug, error};

use logward_core::metrics as m;

use super::{is_filtered, wire_line};
use crate::config::ForwarderConfig;
use crate::error::ForwarderError;
use crate::mapper;

/// 이벤트 배치를 단일 TCP 페이로드로 전송합니다.
pub(super) async fn send(
    config: &ForwarderConfig,
    events: &[String],
    source_label: &str,
) -> Result<usize, ForwarderError> {
    let mut payload = String::new();
    let mut lines = 0usize;

    for event in events {
        if is_filtered(event) {
            counter!(m::FORWARDER_EVENTS_SKIPPED_TOTAL, m::LABEL_TRANSPORT => "tcp").increment(1);
            continue;
        }

        let body = mapper::remap_fields(event, source_label);
        payload.push_str(&wire_line(config, event, &body));
        lines += 1;
    }

    let addr = format!("{}:{}", config.host, config.port);
    let mut stream = TcpStream::connect(&addr).await.map_err(|e| {
        error!(%addr, error = %e, "tcp connect failed");
        counter!(m::FORWARDER_SEND_FAILURES_TOTAL, m::LABEL_TRANSPORT => "tcp").increment(1);
        ForwarderError::Connect {
            addr: addr.clone(),
            reason: e.to_string(),
        }
    })?;

    if let Err(e) = stream.write_all(payload.as_bytes()).await {
        error!(%addr, error = %e, "tcp send failed");
        counter!(m::FORWARDER_SEND_FAILURES_TOTAL, m::LABEL_TRANSPORT => "tcp").increment(1);
        return Err(ForwarderError::Send {
            transport: "tcp".to_owned(),
            reason: e.to_string(),
        });
    }

    // flush 후 연결 종료 -- 수집기가 EOF로 배치 끝을 인식
    stream.shutdown().await?;

    counter!(m::FORWARDER_EVENTS_SENT_TOTAL, m::LABEL_TRANSPORT => "tcp").increment(lines as u64);
    debug!(%addr, lines, "tcp batch delivered");
    Ok(lines)
}
