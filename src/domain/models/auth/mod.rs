//! 인증/인가 컨텍스트 모델
//!
//! - [`authenticated_user`] - 요청에 첨부된 호출자 정보와 추출자
//! - [`authentication_request`] - 역할과 라우트별 요구 역할

pub mod authenticated_user;
pub mod authentication_request;

pub use authenticated_user::{ActorId, AuthenticatedUser};
pub use authentication_request::{RequiredRole, Role};
