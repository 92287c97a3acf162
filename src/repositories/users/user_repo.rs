//! # 사용자 리포지토리 구현
//!
//! 사용자 프로필은 다른 서비스가 관리하며, 여기서는 행위자 확인을 위한
//! ID 조회만 수행합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **읽기 전용**: 생성/수정/삭제 연산은 제공하지 않습니다

use std::sync::Arc;
use mongodb::{bson::{doc, oid::ObjectId}, Collection};
use log::{debug, warn};
use crate::{
    caching::redis::RedisClient,
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::users::user::User,
};

/// 사용자 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// ### MongoDB (존재 확인)
/// - **컬렉션명**: `users`
/// - 행위자 존재 여부는 매 조회마다 MongoDB에서 확인합니다.
///
/// ### Redis (프로필 본문)
/// - **TTL**: 10분 (600초)
/// - **키 패턴**: `user:{user_id}`
/// - MongoDB에서 사라진 사용자의 캐시 항목은 조회 시점에 삭제합니다.
///
/// 캐시 읽기/쓰기 실패는 조회를 막지 않습니다. 경고만 남기고 MongoDB로
/// 넘어갑니다.
#[derive(Clone)]
pub struct UserRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

/// 존재 확인과 캐시 조회를 합친 결과
#[derive(Debug, PartialEq)]
enum CachedLookup {
    /// MongoDB에 사용자가 없음 (캐시 항목은 무시)
    Gone,
    /// 존재 확인 후 캐시에서 찾음
    Hit(User),
    /// 존재하지만 캐시에 없음
    Miss,
}

fn merge_lookup(exists: bool, cached: Option<User>) -> CachedLookup {
    match (exists, cached) {
        (false, _) => CachedLookup::Gone,
        (true, Some(user)) => CachedLookup::Hit(user),
        (true, None) => CachedLookup::Miss,
    }
}

impl UserRepository {
    pub const COLLECTION: &'static str = "users";
    const CACHE_TTL_SECONDS: u64 = 600;

    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self { db, redis }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(Self::COLLECTION)
    }

    pub fn cache_key(id: &str) -> String {
        format!("user:{}", id)
    }

    /// ID로 사용자 조회
    ///
    /// 존재 여부는 항상 MongoDB 기준이며, 캐시는 프로필 본문에만 사용합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없거나 ID가 ObjectId 형식이 아닌 경우
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// match repo.find_by_id("507f1f77bcf86cd799439011").await? {
    ///     Some(user) => println!("행위자: {}", user.username),
    ///     None => return Err(AppError::ParameterError(..)),
    /// }
    /// ```
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            debug!("ObjectId 형식이 아닌 사용자 ID: {}", id);
            return Ok(None);
        };

        let cache_key = Self::cache_key(id);

        let exists = self.collection()
            .count_documents(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            > 0;

        let cached = if exists {
            match self.redis.get::<User>(&cache_key).await {
                Ok(cached) => cached,
                Err(e) => {
                    warn!("사용자 캐시 조회 실패 ({}): {}", cache_key, e);
                    None
                }
            }
        } else {
            None
        };

        match merge_lookup(exists, cached) {
            CachedLookup::Gone => {
                if let Err(e) = self.redis.del(&cache_key).await {
                    warn!("사용자 캐시 삭제 실패 ({}): {}", cache_key, e);
                }
                Ok(None)
            }
            CachedLookup::Hit(user) => Ok(Some(user)),
            CachedLookup::Miss => {
                let user = self.collection()
                    .find_one(doc! { "_id": object_id })
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                if let Some(ref user) = user {
                    if let Err(e) = self.redis
                        .set_with_expiry(&cache_key, user, Self::CACHE_TTL_SECONDS)
                        .await
                    {
                        warn!("사용자 캐시 저장 실패 ({}): {}", cache_key, e);
                    }
                }

                Ok(user)
            }
        }
    }
}
