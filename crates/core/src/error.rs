//! 에러 타입 -- 도메인별 에러 정의

/// Logward 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum LogwardError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// 전송 관련 에러
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// 이벤트 필드 추출 에러
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파일을 찾을 수 없음
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 전송 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// 원격 수집기 연결 실패
    #[error("connect to {addr} failed: {reason}")]
    Connect { addr: String, reason: String },

    /// 전송 실패
    #[error("{transport} send failed: {reason}")]
    Send { transport: String, reason: String },
}

/// 이벤트 필드 추출 에러
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// 기대한 필드가 없거나 값이 유효하지 않음
    #[error("field '{field}' missing or invalid: {reason}")]
    Field { field: String, reason: String },
}
