//! # 문자열 유틸리티
//!
//! 요청 DTO 검증과 검색어 처리에 사용하는 문자열 함수들입니다.

use serde::Deserialize;

/// 공백을 제거한 뒤 비어 있으면 `None`으로 정리합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// MongoDB `$regex`에 그대로 넣을 수 있도록 정규식 메타 문자를 이스케이프합니다.
///
/// 사용자 검색어는 부분 일치 문자열로만 취급합니다.
pub fn escape_regex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(
            c,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
