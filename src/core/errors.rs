//! # Application Error Handling System
//!
//! 문서 심사 서비스 전역에서 사용하는 에러 처리 시스템입니다.
//! Spring Framework의 `@ExceptionHandler`와 글로벌 에러 처리 메커니즘을
//! Rust의 타입 시스템과 결합하여 일관된 에러 응답을 제공합니다.
//!
//! ## 설계 원칙
//!
//! - **통일된 응답 봉투**: 모든 에러는 [`BaseApiResult`] 형태의 JSON으로 직렬화됩니다.
//!   클라이언트는 실패 시에도 항상 `code`와 `message`를 받습니다.
//! - **HTTP 상태 코드 매핑**: 에러 종류별로 적절한 HTTP 상태 코드를 함께 반환합니다.
//! - **경계에서 멈춤**: 핸들러는 에러를 복구하지 않고 `?`로 전파하며,
//!   HTTP 경계에서 `ResponseError`가 봉투로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 봉투 code | 사용 시나리오 |
//! |----------|-------------|-----------|---------------|
//! | `ParameterError` | 400 Bad Request | 1202 | 행위자 확인 실패, 형식 오류 |
//! | `ValidationError` | 400 Bad Request | 1202 | DTO 검증 실패 |
//! | `AuthenticationError` | 401 Unauthorized | 1203 | 토큰 없음/만료 |
//! | `AuthorizationError` | 403 Forbidden | 1204 | 역할 불일치 |
//! | `DatabaseError` | 500 Internal Server Error | 1201 | MongoDB 오류 |
//! | `ServiceError` | 500 Internal Server Error | 1201 | 심사 서비스 오류 |
//! | `InternalError` | 500 Internal Server Error | 1201 | 예상치 못한 오류, 서버 구성 누락 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn remove_log(payload: web::Json<BatchIdDto>) -> Result<HttpResponse, AppError> {
//!     payload.validate()
//!         .map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     // ...
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;
use crate::domain::dto::common::api_result::{BaseApiResult, MessageConstant};

/// 애플리케이션 전역 에러 타입
///
/// 인프라 계층(`DatabaseError`), 요청 계층(`ParameterError`,
/// `ValidationError`), 보안 계층(`AuthenticationError`, `AuthorizationError`),
/// 그리고 심사 서비스 협력자에서 올라오는 `ServiceError`로 구성됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 파라미터/형식 에러 (400 Bad Request)
    ///
    /// 요청한 행위자를 사용자로 확인할 수 없거나 식별자 형식이 잘못된 경우입니다.
    #[error("Parameter error: {0}")]
    ParameterError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 심사 서비스 협력자 에러 (500 Internal Server Error)
    #[error("Service error: {0}")]
    ServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 봉투에 실릴 비즈니스 코드
    pub fn code(&self) -> u32 {
        match self {
            AppError::ParameterError(_) | AppError::ValidationError(_) => {
                MessageConstant::PARAMS_ERROR_CODE
            }
            AppError::AuthenticationError(_) => MessageConstant::AUTH_REQUIRED_CODE,
            AppError::AuthorizationError(_) => MessageConstant::PERMISSION_DENIED_CODE,
            _ => MessageConstant::PROCESS_ERROR_CODE,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::ParameterError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 에러를 통일된 응답 봉투로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(BaseApiResult::error(self.code(), self.to_string()))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    #[test]
    fn test_parameter_error_response() {
        let error = AppError::ParameterError("unknown actor".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.code(), MessageConstant::PARAMS_ERROR_CODE);
    }

    #[test]
    fn test_validation_error_shares_params_code() {
        let error = AppError::ValidationError("ids must not be empty".to_string());

        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.code(), MessageConstant::PARAMS_ERROR_CODE);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());

        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error.code(), MessageConstant::AUTH_REQUIRED_CODE);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("Insufficient permissions".to_string());

        assert_eq!(error.error_response().status(), StatusCode::FORBIDDEN);
        assert_eq!(error.code(), MessageConstant::PERMISSION_DENIED_CODE);
    }

    #[test]
    fn test_service_error_response() {
        let error = AppError::ServiceError("review store unavailable".to_string());

        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.code(), MessageConstant::PROCESS_ERROR_CODE);
    }

    #[actix_web::test]
    async fn test_error_body_is_envelope() {
        let error = AppError::AuthorizationError("ADMIN required".to_string());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["code"], MessageConstant::PERMISSION_DENIED_CODE);
        assert!(json["message"].as_str().unwrap().contains("ADMIN required"));
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
