//! # Domain Models Module
//!
//! 영속되지 않는 도메인 모델과 값 객체를 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: 데이터베이스에 직접 저장되는 객체
//! - **정체성**: 고유한 식별자(ID)를 가짐
//! - **예시**: `User`, `DocReview`, `DocLog`
//!
//! ### Models (`./`)
//! - **요청 컨텍스트**: 요청 하나의 수명 동안만 존재
//! - **값 객체**: 식별자보다는 값 자체가 중요
//! - **예시**: `AuthenticatedUser`, `Role`, `RequiredRole`, `TokenClaims`
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | Rust Domain Models |
//! |--------|-------------------|
//! | `PermissionEnum` | [`auth::Role`] |
//! | `@Permission({ADMIN})` | [`auth::RequiredRole`] |
//! | `request.getAttribute("id")` | [`auth::ActorId`] 추출자 |

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
