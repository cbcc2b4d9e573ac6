//! 설정 관리 -- logward.toml 파싱 및 런타임 설정
//!
//! [`LogwardConfig`]는 모든 모듈의 설정을 담는 최상위 구조체입니다.
//!
//! # 설정 로딩 우선순위
//! 1. 환경변수 (`LOGWARD_SYSLOG_HOST=collector.example.com` 형식)
//! 2. 설정 파일 (`logward.toml`)
//! 3. 기본값 (`Default` 구현)
//!
//! # 사용 예시
//! ```no_run
//! # async fn example() -> Result<(), logward_core::error::LogwardError> {
//! use logward_core::config::LogwardConfig;
//!
//! // 파일에서 로드 + 환경변수 오버라이드
//! let config = LogwardConfig::load("logward.toml").await?;
//!
//! // TOML 문자열에서 직접 파싱
//! let config = LogwardConfig::parse("[syslog]\nenabled = true")?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, LogwardError};

/// 호스트명 오버라이드가 비활성화되었음을 뜻하는 센티널 값
///
/// `syslog.hostname`이 이 값이면 전달 시 이벤트 본문에서 호스트명을
/// 이벤트별로 추출하고, 다른 값이면 배치 전체에 그 값을 고정 사용합니다.
pub const SENTINEL_HOSTNAME: &str = "imperva.com";

/// Logward 통합 설정
///
/// `logward.toml` 파일의 최상위 구조를 나타냅니다.
/// 각 모듈은 자기 섹션만 읽어 사용합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogwardConfig {
    /// 일반 설정
    #[serde(default)]
    pub general: GeneralConfig,
    /// Syslog 전달 설정
    #[serde(default)]
    pub syslog: SyslogConfig,
}

impl LogwardConfig {
    /// TOML 파일에서 설정을 로드하고 환경변수 오버라이드를 적용합니다.
    ///
    /// 설정 로딩 순서:
    /// 1. TOML 파일 파싱
    /// 2. 환경변수 오버라이드 적용
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, LogwardError> {
        let mut config = Self::from_file(path).await?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// TOML 파일에서 설정을 로드합니다 (환경변수 오버라이드 없음).
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, LogwardError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LogwardError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                LogwardError::Io(e)
            }
        })?;
        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn parse(toml_str: &str) -> Result<Self, LogwardError> {
        toml::from_str(toml_str).map_err(|e| {
            LogwardError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// 환경변수로 설정값을 오버라이드합니다.
    ///
    /// 환경변수 네이밍 규칙: `LOGWARD_{SECTION}_{FIELD}`
    /// 예: `LOGWARD_SYSLOG_PROTO=udp`
    pub fn apply_env_overrides(&mut self) {
        // General
        override_string(&mut self.general.log_level, "LOGWARD_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "LOGWARD_GENERAL_LOG_FORMAT");

        // Syslog
        override_bool(&mut self.syslog.enabled, "LOGWARD_SYSLOG_ENABLED");
        override_string(&mut self.syslog.host, "LOGWARD_SYSLOG_HOST");
        override_u16(&mut self.syslog.port, "LOGWARD_SYSLOG_PORT");
        override_string(&mut self.syslog.proto, "LOGWARD_SYSLOG_PROTO");
        override_string(&mut self.syslog.hostname, "LOGWARD_SYSLOG_HOSTNAME");
    }

    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), LogwardError> {
        // log_level 검증
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.general.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_level".to_owned(),
                reason: format!("must be one of: {}", valid_levels.join(", ")),
            }
            .into());
        }

        // log_format 검증
        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&self.general.log_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_format".to_owned(),
                reason: format!("must be one of: {}", valid_formats.join(", ")),
            }
            .into());
        }

        // syslog 섹션은 활성화된 경우에만 검증
        if self.syslog.enabled {
            let valid_protos = ["tcp", "udp"];
            if !valid_protos.contains(&self.syslog.proto.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "syslog.proto".to_owned(),
                    reason: format!("must be one of: {}", valid_protos.join(", ")),
                }
                .into());
            }

            if self.syslog.host.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "syslog.host".to_owned(),
                    reason: "host must not be empty when syslog is enabled".to_owned(),
                }
                .into());
            }

            if self.syslog.port == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "syslog.port".to_owned(),
                    reason: "port must be greater than 0".to_owned(),
                }
                .into());
            }

            if self.syslog.hostname.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "syslog.hostname".to_owned(),
                    reason: "hostname must not be empty (use the sentinel to derive per event)"
                        .to_owned(),
                }
                .into());
            }
        }

        Ok(())
    }
}

/// 일반 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 로그 형식 (json, pretty)
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            log_format: "json".to_owned(),
        }
    }
}

/// Syslog 전달 설정
///
/// 원격 수집기 목적지와 전송 방식을 지정합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyslogConfig {
    /// 활성화 여부
    pub enabled: bool,
    /// 원격 수집기 호스트
    pub host: String,
    /// 원격 수집기 포트
    pub port: u16,
    /// 전송 프로토콜 (tcp, udp)
    pub proto: String,
    /// 전송 라인에 기록할 호스트명
    ///
    /// 센티널 값([`SENTINEL_HOSTNAME`])이면 이벤트 본문에서 추출합니다.
    pub hostname: String,
}

impl Default for SyslogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            host: "127.0.0.1".to_owned(),
            port: 514,
            proto: "tcp".to_owned(),
            hostname: SENTINEL_HOSTNAME.to_owned(),
        }
    }
}

// --- 환경변수 오버라이드 헬퍼 ---

fn override_string(target: &mut String, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val;
    }
}

fn override_bool(target: &mut bool, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<bool>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse bool from env var, ignoring"
            ),
        }
    }
}

fn override_u16(target: &mut u16, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<u16>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse u16 from env var, ignoring"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sane_values() {
        let config = LogwardConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.general.log_format, "json");
        assert!(!config.syslog.enabled);
        assert_eq!(config.syslog.port, 514);
        assert_eq!(config.syslog.proto, "tcp");
        assert_eq!(config.syslog.hostname, SENTINEL_HOSTNAME);
    }

    #[test]
    fn default_config_passes_validation() {
        let config = LogwardConfig::default();
        config.validate().unwrap();
    }

    #[test]
    fn from_str_empty_toml_uses_defaults() {
        let config = LogwardConfig::parse("").unwrap();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.syslog.host, "127.0.0.1");
    }

    #[test]
    fn from_str_partial_toml_merges_with_defaults() {
        let toml = r#"
[syslog]
enabled = true
host = "collector.example.com"
"#;
        let config = LogwardConfig::parse(toml).unwrap();
        assert!(config.syslog.enabled);
        assert_eq!(config.syslog.host, "collector.example.com");
        // 나머지 필드는 기본값 유지
        assert_eq!(config.syslog.port, 514);
        assert_eq!(config.syslog.hostname, SENTINEL_HOSTNAME);
    }

    #[test]
    fn from_str_full_toml() {
        let toml = r#"
[general]
log_level = "debug"
log_format = "pretty"

[syslog]
enabled = true
host = "10.1.2.3"
port = 6514
proto = "udp"
hostname = "waf-edge.example.com"
"#;
        let config = LogwardConfig::parse(toml).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.syslog.port, 6514);
        assert_eq!(config.syslog.proto, "udp");
        assert_eq!(config.syslog.hostname, "waf-edge.example.com");
    }

    #[test]
    fn from_str_invalid_toml_returns_error() {
        let result = LogwardConfig::parse("invalid = [[[toml");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            LogwardError::Config(ConfigError::ParseFailed { .. })
        ));
    }

    #[test]
    fn validate_rejects_invalid_log_level() {
        let mut config = LogwardConfig::default();
        config.general.log_level = "verbose".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("log_level"));
    }

    #[test]
    fn validate_rejects_invalid_proto_when_enabled() {
        let mut config = LogwardConfig::default();
        config.syslog.enabled = true;
        config.syslog.proto = "sctp".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("proto"));
    }

    #[test]
    fn validate_accepts_invalid_proto_when_disabled() {
        let mut config = LogwardConfig::default();
        config.syslog.enabled = false;
        config.syslog.proto = "sctp".to_owned();
        // syslog가 비활성화 상태면 섹션 검증을 건너뜀
        config.validate().unwrap();
    }

    #[test]
    fn validate_rejects_empty_host_when_enabled() {
        let mut config = LogwardConfig::default();
        config.syslog.enabled = true;
        config.syslog.host = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("host"));
    }

    #[test]
    fn validate_rejects_zero_port_when_enabled() {
        let mut config = LogwardConfig::default();
        config.syslog.enabled = true;
        config.syslog.port = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("port"));
    }

    #[test]
    fn env_override_string() {
        let mut val = "original".to_owned();
        // SAFETY: 테스트는 단일 스레드에서 실행되므로 환경변수 조작이 안전합니다.
        unsafe { std::env::set_var("TEST_LOGWARD_STR", "overridden") };
        override_string(&mut val, "TEST_LOGWARD_STR");
        assert_eq!(val, "overridden");
        unsafe { std::env::remove_var("TEST_LOGWARD_STR") };
    }

    #[test]
    fn env_override_u16_valid() {
        let mut val = 514u16;
        // SAFETY: 테스트는 단일 스레드에서 실행되므로 환경변수 조작이 안전합니다.
        unsafe { std::env::set_var("TEST_LOGWARD_PORT", "6514") };
        override_u16(&mut val, "TEST_LOGWARD_PORT");
        assert_eq!(val, 6514);
        unsafe { std::env::remove_var("TEST_LOGWARD_PORT") };
    }

    #[test]
    fn env_override_u16_invalid_keeps_original() {
        let mut val = 514u16;
        // SAFETY: 테스트는 단일 스레드에서 실행되므로 환경변수 조작이 안전합니다.
        unsafe { std::env::set_var("TEST_LOGWARD_PORT_BAD", "not-a-port") };
        override_u16(&mut val, "TEST_LOGWARD_PORT_BAD");
        assert_eq!(val, 514); // 원래 값 유지
        unsafe { std::env::remove_var("TEST_LOGWARD_PORT_BAD") };
    }

    #[test]
    fn env_override_missing_var_keeps_original() {
        let mut val = "original".to_owned();
        override_string(&mut val, "TEST_LOGWARD_NONEXISTENT_12345");
        assert_eq!(val, "original");
    }

    #[test]
    fn config_serialize_roundtrip() {
        let config = LogwardConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed = LogwardConfig::parse(&toml_str).unwrap();
        assert_eq!(config.syslog.host, parsed.syslog.host);
        assert_eq!(config.syslog.hostname, parsed.syslog.hostname);
    }

    #[tokio::test]
    async fn from_file_not_found() {
        let result = LogwardConfig::from_file("/nonexistent/path/logward.toml").await;
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            LogwardError::Config(ConfigError::FileNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logward.toml");
        tokio::fs::write(&path, "[syslog]\nenabled = true\nport = 1514\n")
            .await
            .unwrap();
        let config = LogwardConfig::from_file(&path).await.unwrap();
        assert!(config.syslog.enabled);
        assert_eq!(config.syslog.port, 1514);
    }
}
