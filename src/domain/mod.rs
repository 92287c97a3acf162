//! # Domain Layer Module
//!
//! 문서 심사 서비스의 도메인 계층입니다.
//! Spring Framework의 Domain Layer와 동일한 역할을 수행합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB 문서와 매핑되는 레코드 (User, DocReview, DocLog)
//! ├── DTOs      - 요청/응답 계약 (BatchIdDto, RefuseDto, PageParams, BaseApiResult)
//! └── Models    - 인증 컨텍스트 모델 (AuthenticatedUser, Role, TokenClaims)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Document` | `entities` 모듈 | MongoDB 레코드 |
//! | `@RequestBody` / `@ModelAttribute` | `dto` 모듈 | API 계약 정의 |
//! | `PermissionEnum` | [`models::auth::Role`] | 호출자 역할 |
//! | `@Permission({...})` | [`models::auth::RequiredRole`] | 라우트별 요구 역할 |
//! | `@Valid` | `validator` 검증 | 데이터 유효성 검사 |
//!
//! ## 주의사항
//!
//! - `User`는 이 서비스가 소유하지 않는 레코드입니다. 읽기 전용으로만 사용하며,
//!   행위자 존재 확인 용도로 조회합니다.
//! - 심사 상태 전이 규칙은 심사 서비스 구현에 있으며, 도메인 계층은 값만 정의합니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{DocLog, DocReview, ReviewState, User};
pub use dto::{
    BaseApiResult, BatchIdDto, DocLogResponse, DocReviewResponse, MessageConstant,
    PageParams, PageResult, RefuseBatchDto, RefuseDto,
};
pub use models::{ActorId, AuthenticatedUser, RequiredRole, Role, TokenClaims};
