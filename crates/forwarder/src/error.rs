//! 전달 파이프라인 에러 타입
//!
//! [`ForwarderError`]는 전달 파이프라인 내부에서 발생하는 모든 에러를
//! 표현합니다. `From<ForwarderError> for LogwardError` 변환이 구현되어 있어
//! 상위 레이어에서 `?` 연산자로 자연스럽게 전파할 수 있습니다.

use logward_core::error::{ConfigError, LogwardError, ParseError, TransportError};

/// 전달 파이프라인 도메인 에러
///
/// 필드 추출, 설정, 연결, 전송 등 파이프라인 내부의 에러 상황을 포괄합니다.
/// 필드 추출 에러는 파이프라인 내부에서 기본값으로 복구되며 호출자에게
/// 전파되지 않습니다 -- 전파되는 것은 설정/전송 에러뿐입니다.
#[derive(Debug, thiserror::Error)]
pub enum ForwarderError {
    /// 이벤트에서 기대한 필드를 추출하지 못함
    #[error("extract error: field '{field}': {reason}")]
    Extract {
        /// 추출 대상 필드 키 (end=, start=, sourceServiceName= 등)
        field: String,
        /// 실패 사유
        reason: String,
    },

    /// 설정 에러
    #[error("config error: {field}: {reason}")]
    Config {
        /// 설정 필드명
        field: String,
        /// 에러 사유
        reason: String,
    },

    /// 원격 수집기 연결 실패
    #[error("connect to {addr} failed: {reason}")]
    Connect {
        /// 목적지 주소
        addr: String,
        /// 실패 사유
        reason: String,
    },

    /// 전송 실패
    #[error("{transport} send failed: {reason}")]
    Send {
        /// 전송 프로토콜 (tcp, udp)
        transport: String,
        /// 실패 사유
        reason: String,
    },

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ForwarderError> for LogwardError {
    fn from(err: ForwarderError) -> Self {
        match err {
            ForwarderError::Extract { field, reason } => {
                LogwardError::Parse(ParseError::Field { field, reason })
            }
            ForwarderError::Config { field, reason } => {
                LogwardError::Config(ConfigError::InvalidValue { field, reason })
            }
            ForwarderError::Connect { addr, reason } => {
                LogwardError::Transport(TransportError::Connect { addr, reason })
            }
            ForwarderError::Send { transport, reason } => {
                LogwardError::Transport(TransportError::Send { transport, reason })
            }
            ForwarderError::Io(e) => LogwardError::Io(e),
        }
    }
}
