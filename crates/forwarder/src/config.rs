//! 전달 파이프라인 설정
//!
//! [`ForwarderConfig`]는 core의 [`SyslogConfig`](logward_core::config::SyslogConfig)
//! 섹션에서 파생되는 전달 전용 설정입니다.
//!
//! # 사용 예시
//! ```ignore
//! use logward_core::config::LogwardConfig;
//! use logward_forwarder::config::ForwarderConfig;
//!
//! let core_config = LogwardConfig::default();
//! let config = ForwarderConfig::from_core(&core_config.syslog)?;
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use logward_core::config::{SENTINEL_HOSTNAME, SyslogConfig};

use crate::error::ForwarderError;

/// 전송 프로토콜 종류
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// 연결 지향 -- 배치 전체를 하나의 페이로드로 전송 (기본값)
    #[default]
    Tcp,
    /// 비연결 -- 이벤트마다 데이터그램 하나를 best-effort 전송
    Udp,
}

impl FromStr for TransportKind {
    type Err = ForwarderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tcp" => Ok(Self::Tcp),
            "udp" => Ok(Self::Udp),
            other => Err(ForwarderError::Config {
                field: "proto".to_owned(),
                reason: format!("unknown transport '{other}' (expected tcp or udp)"),
            }),
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcp => write!(f, "tcp"),
            Self::Udp => write!(f, "udp"),
        }
    }
}

/// 전달 파이프라인 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForwarderConfig {
    /// 원격 수집기 호스트
    pub host: String,
    /// 원격 수집기 포트
    pub port: u16,
    /// 전송 프로토콜
    pub transport: TransportKind,
    /// 전송 라인에 기록할 호스트명
    ///
    /// 센티널 값(`"imperva.com"`)이면 이벤트별로 본문에서 추출하고,
    /// 다른 값이면 배치 전체에 고정 사용합니다.
    pub log_hostname: String,
}

impl Default for ForwarderConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 514,
            transport: TransportKind::Tcp,
            log_hostname: SENTINEL_HOSTNAME.to_owned(),
        }
    }
}

impl ForwarderConfig {
    /// core의 `[syslog]` 섹션에서 전달 설정을 생성합니다.
    ///
    /// 알 수 없는 `proto` 문자열은 설정 에러입니다.
    pub fn from_core(core: &SyslogConfig) -> Result<Self, ForwarderError> {
        let config = Self {
            host: core.host.clone(),
            port: core.port,
            transport: core.proto.parse()?,
            log_hostname: core.hostname.clone(),
        };
        config.validate()?;
        Ok(config)
    }

    /// 호스트명 오버라이드가 설정되어 있는지 확인합니다.
    ///
    /// 센티널이 아니면 배치 전체에 고정 호스트명을 사용합니다.
    pub fn hostname_override(&self) -> Option<&str> {
        (self.log_hostname != SENTINEL_HOSTNAME).then_some(self.log_hostname.as_str())
    }

    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), ForwarderError> {
        if self.host.is_empty() {
            return Err(ForwarderError::Config {
                field: "host".to_owned(),
                reason: "host must not be empty".to_owned(),
            });
        }

        if self.port == 0 {
            return Err(ForwarderError::Config {
                field: "port".to_owned(),
                reason: "port must be greater than 0".to_owned(),
            });
        }

        if self.log_hostname.is_empty() {
            return Err(ForwarderError::Config {
                field: "log_hostname".to_owned(),
                reason: "log_hostname must not be empty (use the sentinel to derive per event)"
                    .to_owned(),
            });
        }

        Ok(())
    }
}

/// 전달 설정 빌더
#[derive(Default)]
pub struct ForwarderConfigBuilder {
    config: ForwarderConfig,
}

impl ForwarderConfigBuilder {
    /// 새 빌더를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 원격 수집기 호스트를 설정합니다.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// 원격 수집기 포트를 설정합니다.
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// 전송 프로토콜을 설정합니다.
    pub fn transport(mut self, transport: TransportKind) -> Self {
        self.config.transport = transport;
        self
    }

    /// 고정 호스트명을 설정합니다.
    pub fn log_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.config.log_hostname = hostname.into();
        self
    }

    /// 설정을 검증하고 `ForwarderConfig`를 생성합니다.
    pub fn build(self) -> Result<ForwarderConfig, ForwarderError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
