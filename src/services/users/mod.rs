//! 사용자 조회 서비스 모듈
//!
//! 디스패치 계층이 행위자가 실제 사용자인지 확인할 때 사용하는
//! [`UserLookup`](user_service::UserLookup) 협력자 trait과 기본 구현을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::{UserLookup, UserService};
//!
//! let lookup: Arc<dyn UserLookup> = Arc::new(UserService::new(user_repo));
//! let actor = lookup.query_by_id("64b7f0c2a1b2c3d4e5f60718").await?;
//! ```

pub mod user_service;

pub use user_service::{UserLookup, UserService};
