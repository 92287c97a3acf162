//! Users Entity Module
//!
//! 사용자 프로필 레코드를 정의합니다.
//! 이 서비스는 사용자를 소유하지 않으며, 행위자 확인을 위해서만 조회합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new("jarrett".to_string());
//! assert!(user.id_string().is_none());
//! ```

pub mod user;

pub use user::User;
