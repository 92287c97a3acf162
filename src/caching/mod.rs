//! 캐싱 계층 모듈
//!
//! 사용자 조회 결과를 Redis에 TTL과 함께 보관합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("user:123", &user, 600).await?;
//!
//! let cached_user: Option<User> = cache.get("user:123").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
