//! CEF/LEEF 방언 추상화
//!
//! 이벤트 라인의 선두 마커로 인코딩 방언을 감지하고, 방언별 필드 구분자를
//! 사용하는 공용 필드 추출 루틴을 제공합니다. 타임스탬프/호스트명 해석과
//! 종료 시각 보정이 모두 이 루틴을 공유하므로 추출 로직이 중복되지 않습니다.
//!
//! 추출은 구조적 key=value 파싱이 아니라 리터럴 부분 문자열 탐색입니다.
//! 키의 첫 등장 위치 이후부터 다음 구분자(또는 문자열 끝)까지가 값입니다.

/// 이벤트 인코딩 방언
///
/// - CEF: 공백 구분 `key=value` 필드, 선두 마커 "CEF"
/// - LEEF: 탭 구분 `key=value` 필드, 선두 마커 "LEEF"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Common Event Format
    Cef,
    /// Log Event Extended Format
    Leef,
}

impl Dialect {
    /// 선두 마커로 방언을 감지합니다.
    ///
    /// 마커 검사 이상의 스키마 검증은 수행하지 않습니다.
    /// 어느 마커도 아니면 `None`을 반환합니다.
    pub fn detect(message: &str) -> Option<Self> {
        // "LEEF"가 "CEF"보다 먼저: "CEF" 검사는 접두 검사이므로 순서는
        // 실제로 무관하지만, 마커가 긴 쪽을 앞에 둡니다.
        if message.starts_with("LEEF") {
            Some(Self::Leef)
        } else if message.starts_with("CEF") {
            Some(Self::Cef)
        } else {
            None
        }
    }

    /// 방언별 필드 구분자를 반환합니다.
    pub const fn separator(self) -> char {
        match self {
            Self::Cef => ' ',
            Self::Leef => '\t',
        }
    }

    /// 이벤트에서 `key` 바로 뒤의 값을 추출합니다.
    ///
    /// 값은 키의 첫 등장 위치 이후부터 다음 구분자 전까지이며, 구분자가
    /// 없으면 문자열 끝까지입니다. 키가 없으면 `None`, 키 직후에 바로
    /// 구분자가 오면 빈 값을 반환합니다.
    pub fn field_value<'a>(self, message: &'a str, key: &str) -> Option<&'a str> {
        let start = message.find(key)? + key.len();
        let rest = &message[start..];
        match rest.find(self.separator()) {
            Some(end) => Some(&rest[..end]),
            None => Some(rest),
        }
    }
}
