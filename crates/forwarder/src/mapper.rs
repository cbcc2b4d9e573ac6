//! 필드 이름 재작성
//!
//! 클라우드 WAF가 내보내는 필드 이름을 다운스트림 SIEM 스키마에 맞게
//! 재작성합니다. 구조적 파싱 없이 이벤트 전체 텍스트에 대한 리터럴 부분
//! 문자열 치환을 고정된 순서로 적용합니다.
//!
//! 규칙 순서는 계약의 일부입니다: 앞 규칙의 출력이 뒤 규칙의 입력이 되는
//! 연쇄(`cs4=`→`cs98=` 이후에야 `cs3=`→`cs4=`가 안전)가 있으므로 테이블
//! 순서를 바꾸면 결과가 달라집니다.

/// 고정 순서 필드 재작성 규칙 테이블 (old-prefix, new-prefix)
///
/// 항목 순서를 바꾸지 말 것 -- 규칙 N이 규칙 N-1의 출력을 소비합니다.
pub const REWRITE_RULES: [(&str, &str); 21] = [
    ("Customer=", "flexString1="),
    ("cn1=", "flexString2="),
    ("deviceExternalId=", "cn1="),
    ("xff=", "cs99="),
    ("cs4=", "cs98="),
    ("cs3=", "cs4="),
    ("sourceServiceName=", "cs3="),
    ("cs3Label=CO Support", "cs3Label=ServiceName"),
    ("cs4Label=VID", "cs4Label=Cookie Support"),
    ("cs1Label=Cap Support", "cs1Label=Captcha Support"),
    ("siteTag=", "cs97="),
    ("siteid=", "flexNumber1="),
    ("spt=", "dpt="),
    ("cpt=", "spt="),
    ("sip=", "dst="),
    ("ref=", "requestContext="),
    ("cs6=", "deviceProcessName="),
    ("cs5=", "fname="),
    ("qstr=", "cs5="),
    ("ver=", "cs96="),
    ("postbody=", "cs6="),
];

/// 재작성된 슬롯에 대한 설명 라벨 필드 (뒤에 순서대로 부착)
const TRAILING_LABELS: [&str; 9] = [
    "flexString1Label=Customer",
    "flexString2Label=ResponseCode",
    "cs5Label=requestQuery(qstr)",
    "cs6Label=postbody",
    "cs96Label=TLS(ver)",
    "cn1Label=EventId",
    "cs97Label=siteTag",
    "cs98Label=VID",
    "cs99Label=Xff",
];

/// 이벤트의 필드 이름을 재작성하고 출처/라벨 필드를 부착합니다.
///
/// 빈 입력은 그대로 반환합니다. 그 외에는 [`REWRITE_RULES`]를 순서대로
/// 적용한 뒤 `oldFileName=<source_label>`과 라벨 필드들을 공백 구분으로
/// 끝에 덧붙입니다. 에러 조건은 없으며, 없는 필드에 대한 치환은 조용히
/// 아무것도 하지 않습니다.
pub fn remap_fields(message: &str, source_label: &str) -> String {
    if message.is_empty() {
        return String::new();
    }

    let mut remapped = message.to_owned();
    for (old, new) in REWRITE_RULES {
        remapped = remapped.replace(old, new);
    }

    remapped.push_str(" oldFileName=");
    remapped.push_str(source_label);
    for label in TRAILING_LABELS {
        remapped.push(' ');
        remapped.push_str(label);
    }

    remapped
}
