//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 디스패치 계층은 구체 타입이 아닌 협력자 trait(`UserLookup`, `DocReviewService`)에
//! 의존합니다. 기본 구현은 `main`에서 리포지토리를 주입받아 생성됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{reviews::MongoDocReviewService, users::UserService};
//!
//! let review_service = Arc::new(MongoDocReviewService::new(review_repo, log_repo));
//! let user_service = Arc::new(UserService::new(user_repo));
//! ```

pub mod users;
pub mod reviews;
pub mod auth;
