//! 문서 심사 서비스
//!
//! 문서 관리 블로그 플랫폼의 문서 심사 워크플로우를 제공하는 HTTP 서비스입니다.
//! 심사 대기 목록 조회, 승인/거절(단건, 일괄), 심사 결과와 감사 로그 조회,
//! 로그 삭제 같은 작업을 역할(USER / ADMIN)에 따라 허용합니다.
//!
//! # Features
//!
//! - **역할 기반 접근 제어**: 라우트마다 요구 역할을 선언하고 미들웨어가 확인
//! - **행위자 확인**: 행위자를 참조하는 작업은 실제 사용자인지 먼저 확인
//! - **통일된 응답 봉투**: 성공과 실패 모두 `{ code, message, data? }`
//! - **MongoDB**: 심사 레코드와 감사 로그 저장
//! - **Redis**: 사용자 조회 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /docReview/* 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AuthMiddleware  │ ← 토큰 검증 + 요구 역할 확인
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← DTO 검증, 행위자 확인, 서비스 호출
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← DocReviewService / UserLookup
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use doc_review_service::routes::configure_all_routes;
//!
//! App::new()
//!     .app_data(web::Data::from(review_service))
//!     .app_data(web::Data::from(user_lookup))
//!     .app_data(web::Data::new(TokenService::from_config()))
//!     .configure(configure_all_routes)
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
