use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;
use crate::domain::dto::common::api_result::MessageConstant;
use crate::domain::models::auth::authentication_request::Role;

/// JWT 토큰에서 추출된 호출자 정보
///
/// 인증 미들웨어가 Request Extensions에 저장합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 호출자 역할
    pub role: Role,
}

impl AuthenticatedUser {
    /// 관리자 권한을 보유하고 있는지 확인
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string()
            ))),
        }
    }
}

/// 요청에 첨부된 행위자 식별자
///
/// 값 자체는 검증하지 않습니다. 실제 사용자인지는 핸들러가
/// `UserLookup`으로 확인합니다. 식별자가 아예 없으면 파라미터 에러입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorId(pub String);

impl ActorId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for ActorId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let actor = req
            .extensions()
            .get::<AuthenticatedUser>()
            .map(|user| ActorId(user.user_id.clone()));

        ready(actor.ok_or_else(|| {
            AppError::ParameterError(MessageConstant::PARAMS_FORMAT_ERROR.to_string())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_actor_id_from_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedUser {
            user_id: "64b7f0c2a1b2c3d4e5f60718".to_string(),
            role: Role::User,
        });

        let actor = ActorId::extract(&req).await.unwrap();
        assert_eq!(actor.as_str(), "64b7f0c2a1b2c3d4e5f60718");
    }

    #[actix_web::test]
    async fn test_missing_identity_is_parameter_error() {
        let req = TestRequest::default().to_http_request();

        let result = ActorId::extract(&req).await;
        assert!(matches!(result, Err(AppError::ParameterError(_))));
    }

    #[actix_web::test]
    async fn test_missing_user_is_authentication_error() {
        let req = TestRequest::default().to_http_request();

        let result = AuthenticatedUser::extract(&req).await;
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_is_admin() {
        let admin = AuthenticatedUser { user_id: "a".to_string(), role: Role::Admin };
        let user = AuthenticatedUser { user_id: "u".to_string(), role: Role::User };

        assert!(admin.is_admin());
        assert!(!user.is_admin());
    }
}
