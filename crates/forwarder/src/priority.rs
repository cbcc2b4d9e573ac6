//! Syslog priority 테이블
//!
//! RFC 3164의 facility/severity 숫자 테이블을 프로세스 전역 읽기 전용
//! 상수로 정의합니다. priority = facility * 8 + severity.
//!
//! 전송 라인은 항상 daemon.info 고정 priority([`WIRE_PRIORITY`])를
//! 사용합니다.

/// Syslog facility 코드 (RFC 3164 Section 4.1.1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Facility {
    /// 커널 메시지
    Kern = 0,
    /// 사용자 레벨 메시지
    User = 1,
    /// 메일 시스템
    Mail = 2,
    /// 시스템 데몬
    Daemon = 3,
    /// 보안/인가 메시지
    Auth = 4,
    /// syslogd 내부 메시지
    Syslog = 5,
    /// 프린터 서브시스템
    Lpr = 6,
    /// 네트워크 뉴스 서브시스템
    News = 7,
    /// UUCP 서브시스템
    Uucp = 8,
    /// 클록 데몬
    Cron = 9,
    /// 보안/인가 메시지 (private)
    Authpriv = 10,
    /// FTP 데몬
    Ftp = 11,
    /// 로컬 용도 0
    Local0 = 16,
    /// 로컬 용도 1
    Local1 = 17,
    /// 로컬 용도 2
    Local2 = 18,
    /// 로컬 용도 3
    Local3 = 19,
    /// 로컬 용도 4
    Local4 = 20,
    /// 로컬 용도 5
    Local5 = 21,
    /// 로컬 용도 6
    Local6 = 22,
    /// 로컬 용도 7
    Local7 = 23,
}

/// Syslog severity 코드 (RFC 3164 Section 4.1.1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Level {
    /// 시스템 사용 불가
    Emerg = 0,
    /// 즉시 조치 필요
    Alert = 1,
    /// 치명적 상태
    Crit = 2,
    /// 에러 상태
    Err = 3,
    /// 경고 상태
    Warning = 4,
    /// 정상이지만 주목할 상태
    Notice = 5,
    /// 정보성 메시지
    Info = 6,
    /// 디버그 메시지
    Debug = 7,
}

/// facility와 severity를 하나의 priority 값으로 결합합니다.
pub const fn priority(facility: Facility, level: Level) -> u8 {
    (facility as u8) * 8 + (level as u8)
}

/// 전송 라인에 사용하는 고정 priority -- daemon.info
pub const WIRE_PRIORITY: u8 = priority(Facility::Daemon, Level::Info);
