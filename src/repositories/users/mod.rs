//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`](user_repo::UserRepository)를 통해 MongoDB의 사용자 프로필을
//! Redis 캐시와 함께 조회합니다.

pub mod user_repo;

pub use user_repo::UserRepository;
