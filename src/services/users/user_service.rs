//! # 사용자 조회 서비스 구현
//!
//! 사용자 프로필은 읽기 전용입니다. 이 서비스가 하는 일은 ID로
//! 사용자를 찾아 돌려주는 것 하나입니다.
//!
//! ```text
//! handlers::doc_review ──▶ dyn UserLookup ──▶ UserService ──▶ UserRepository
//!                                                               (Redis → MongoDB)
//! ```

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    core::errors::AppResult,
    domain::entities::users::user::User,
    repositories::users::user_repo::UserRepository,
};

/// 행위자 확인용 사용자 조회 협력자
///
/// `Ok(None)`은 "그런 사용자는 없다"는 뜻이며, 호출 측에서
/// 파라미터 에러로 바꿉니다.
#[async_trait]
pub trait UserLookup: Send + Sync {
    async fn query_by_id(&self, user_id: &str) -> AppResult<Option<User>>;
}

/// MongoDB + Redis 기반 기본 구현
pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl UserLookup for UserService {
    async fn query_by_id(&self, user_id: &str) -> AppResult<Option<User>> {
        let user = self.user_repo.find_by_id(user_id).await?;

        if user.is_none() {
            log::debug!("사용자를 찾을 수 없음: {}", user_id);
        }

        Ok(user)
    }
}
