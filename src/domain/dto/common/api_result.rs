//! 통일된 API 응답 봉투
//!
//! 모든 엔드포인트는 성공과 실패에 관계없이 동일한 형태의 JSON을 반환합니다.
//!
//! ```json
//! { "code": 200, "message": "success", "data": { ... } }
//! { "code": 1202, "message": "Parameter error: ..." }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 응답 봉투에 사용되는 코드와 메시지 상수
pub struct MessageConstant;

impl MessageConstant {
    pub const SUCCESS_CODE: u32 = 200;
    pub const PROCESS_ERROR_CODE: u32 = 1201;
    pub const PARAMS_ERROR_CODE: u32 = 1202;
    pub const AUTH_REQUIRED_CODE: u32 = 1203;
    pub const PERMISSION_DENIED_CODE: u32 = 1204;
    pub const NOT_FOUND_CODE: u32 = 1205;

    pub const SUCCESS: &'static str = "success";
    pub const PARAMS_FORMAT_ERROR: &'static str = "파라미터 형식이 올바르지 않습니다";
    pub const AUTH_REQUIRED: &'static str = "유효한 인증 토큰이 필요합니다";
    pub const PERMISSION_DENIED: &'static str = "접근 권한이 부족합니다";
}

/// 통일된 응답 봉투
///
/// 심사 서비스가 반환한 봉투는 디스패치 계층에서 수정 없이 그대로 전달됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseApiResult {
    /// 비즈니스 결과 코드 (`200`이면 성공)
    pub code: u32,
    /// 사람이 읽을 수 있는 메시지
    pub message: String,
    /// 선택적 결과 데이터
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl BaseApiResult {
    /// 데이터 없는 성공 응답
    pub fn success() -> Self {
        Self {
            code: MessageConstant::SUCCESS_CODE,
            message: MessageConstant::SUCCESS.to_string(),
            data: None,
        }
    }

    /// 데이터를 포함한 성공 응답
    ///
    /// 직렬화할 수 없는 값은 `null`로 기록됩니다.
    pub fn success_with<T: Serialize>(data: T) -> Self {
        Self {
            code: MessageConstant::SUCCESS_CODE,
            message: MessageConstant::SUCCESS.to_string(),
            data: Some(serde_json::to_value(data).unwrap_or(Value::Null)),
        }
    }

    pub fn error(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == MessageConstant::SUCCESS_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_has_no_data_field() {
        let value = serde_json::to_value(BaseApiResult::success()).unwrap();

        assert_eq!(value, json!({ "code": 200, "message": "success" }));
    }

    #[test]
    fn test_success_with_payload() {
        let result = BaseApiResult::success_with(json!({ "modified": 3 }));

        assert!(result.is_success());
        assert_eq!(result.data, Some(json!({ "modified": 3 })));
    }

    #[test]
    fn test_error_is_not_success() {
        let result = BaseApiResult::error(MessageConstant::PARAMS_ERROR_CODE, "bad ids");

        assert!(!result.is_success());
        assert_eq!(result.message, "bad ids");
    }
}
