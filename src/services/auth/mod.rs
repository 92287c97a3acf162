//! 인증 서비스 모듈
//!
//! 요청의 Bearer 토큰을 검증해 호출자 ID와 역할을 얻습니다.
//! 로그인과 토큰 발급 흐름은 외부 인증 서비스가 담당합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 토큰 만료 시간 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::from_config();
//! let claims = token_service.verify_token(token)?;
//! ```

pub mod token_service;

pub use token_service::*;
