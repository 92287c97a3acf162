//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//! Spring Boot의 Filter와 Interceptor와 유사한 역할을 수행하며,
//! 횡단 관심사(Cross-cutting concerns)를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 JWT 검증 (실패 시 401 + 코드 1203)
//! - 라우트별 요구 역할 확인 (불일치 시 403 + 코드 1204)
//! - 호출자 정보를 request extension에 저장
//!
//! # 사용 방법
//!
//! 요구 역할은 리소스 단위로 선언합니다. 토큰 검증에 쓰이는
//! `web::Data<TokenService>`가 앱에 등록되어 있어야 합니다.
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .app_data(web::Data::new(TokenService::from_config()))
//!     .service(
//!         web::resource("/docReview/queryLogList")
//!             .wrap(AuthMiddleware::required_with_role(Role::Admin))
//!             .route(web::get().to(query_log_list))
//!     )
//!     .service(
//!         web::resource("/docReview/removeDocReview")
//!             .wrap(AuthMiddleware::required())
//!             .route(web::delete().to(remove_doc_review))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
