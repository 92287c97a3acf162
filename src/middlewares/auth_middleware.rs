//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고, 라우트에 선언된
//! 요구 역할을 확인합니다. 역할이 맞지 않으면 핸들러는 실행되지 않습니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::auth::authentication_request::{RequiredRole, Role};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// ```rust,ignore
/// web::resource("/refuse")
///     .wrap(AuthMiddleware::required_with_role(Role::Admin))
///     .route(web::post().to(refuse))
/// ```
pub struct AuthMiddleware {
    /// 접근에 필요한 역할 (없으면 인증만 확인)
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    /// 인증만 요구하는 미들웨어 생성
    pub fn required() -> Self {
        Self { required_role: None }
    }

    /// 특정 역할 요구 인증 미들웨어 생성
    pub fn required_with_role(role: Role) -> Self {
        Self {
            required_role: Some(RequiredRole::Single(role)),
        }
    }

    /// 복수 역할 중 하나 요구 인증 미들웨어 생성
    pub fn required_with_roles(roles: Vec<Role>) -> Self {
        Self {
            required_role: Some(RequiredRole::Any(roles)),
        }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_role: self.required_role.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpMessage, HttpRequest, HttpResponse};
    use crate::domain::dto::common::api_result::{BaseApiResult, MessageConstant};
    use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
    use crate::services::auth::TokenService;

    async fn whoami(req: HttpRequest) -> HttpResponse {
        let user_id = req
            .extensions()
            .get::<AuthenticatedUser>()
            .map(|user| user.user_id.clone())
            .unwrap_or_default();
        HttpResponse::Ok().body(user_id)
    }

    fn token_service() -> TokenService {
        TokenService::new("middleware-secret", 1)
    }

    #[actix_web::test]
    async fn test_missing_token_is_unauthorized() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(token_service()))
                .service(web::resource("/me").wrap(AuthMiddleware::required()).to(whoami)),
        )
        .await;

        let req = test::TestRequest::get().uri("/me").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: BaseApiResult = test::read_body_json(resp).await;
        assert_eq!(body.code, MessageConstant::AUTH_REQUIRED_CODE);
    }

    #[actix_web::test]
    async fn test_role_mismatch_is_forbidden() {
        let tokens = token_service();
        let token = tokens.issue_token("u1", Role::User).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(tokens))
                .service(
                    web::resource("/admin")
                        .wrap(AuthMiddleware::required_with_role(Role::Admin))
                        .to(whoami),
                ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body: BaseApiResult = test::read_body_json(resp).await;
        assert_eq!(body.code, MessageConstant::PERMISSION_DENIED_CODE);
    }

    #[actix_web::test]
    async fn test_valid_token_attaches_identity() {
        let tokens = token_service();
        let token = tokens.issue_token("u42", Role::Admin).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(tokens))
                .service(
                    web::resource("/both")
                        .wrap(AuthMiddleware::required_with_roles(vec![Role::User, Role::Admin]))
                        .to(whoami),
                ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/both")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, web::Bytes::from_static(b"u42"));
    }

    #[actix_web::test]
    async fn test_missing_token_service_is_server_error() {
        let app = test::init_service(
            App::new().service(web::resource("/me").wrap(AuthMiddleware::required()).to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", "Bearer anything"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: BaseApiResult = test::read_body_json(resp).await;
        assert_eq!(body.code, MessageConstant::PROCESS_ERROR_CODE);
    }
}
