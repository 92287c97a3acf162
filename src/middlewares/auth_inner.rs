//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::core::AppError;
use crate::domain::dto::common::api_result::MessageConstant;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::domain::models::auth::authentication_request::RequiredRole;
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let user = match extract_token_from_request(&req) {
                Ok(user) => user,
                Err(AppError::AuthenticationError(reason)) => {
                    log::warn!("인증 실패: {} {} - {}", req.method(), req.path(), reason);
                    let response = AppError::AuthenticationError(MessageConstant::AUTH_REQUIRED.to_string())
                        .error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
                Err(err) => {
                    log::error!("인증 처리 오류: {} {} - {}", req.method(), req.path(), err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            };

            // 역할 검증
            if let Some(ref required) = required_role {
                if !required.is_satisfied(user.role) {
                    log::warn!("권한 부족: 사용자 ID {} ({}), 필요 권한: {:?}",
                        user.user_id, user.role.as_str(), required);
                    let response = AppError::AuthorizationError(MessageConstant::PERMISSION_DENIED.to_string())
                        .error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            log::debug!("인증 성공: 사용자 ID {} ({})", user.user_id, user.role.as_str());
            req.extensions_mut().insert(user);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 JWT 토큰을 추출하고 검증
fn extract_token_from_request(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::InternalError("TokenService가 등록되지 않았습니다".to_string()))?;

    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let token = token_service.extract_bearer_token(auth_header)?;
    let claims = token_service.verify_token(token)?;

    Ok(AuthenticatedUser {
        user_id: claims.sub,
        role: claims.role,
    })
}
