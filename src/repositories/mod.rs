//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하고, 사용자 조회는 Redis 캐시를 거칩니다.
//! 리포지토리는 `main`에서 한 번 생성되어 `Arc`로 서비스에 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::new(database.clone(), redis.clone());
//! let user = user_repo.find_by_id("64b7f0c2a1b2c3d4e5f60718").await?;
//! ```

pub mod users;
pub mod reviews;
pub mod logs;

use mongodb::bson::oid::ObjectId;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::common::api_result::MessageConstant;

pub use users::UserRepository;
pub use reviews::DocReviewRepository;
pub use logs::DocLogRepository;

/// 외부에서 받은 식별자 목록을 ObjectId로 변환합니다.
///
/// 하나라도 형식이 잘못되면 전체를 파라미터 에러로 거절합니다.
/// 입력 순서는 유지됩니다.
pub fn parse_object_ids(ids: &[String]) -> AppResult<Vec<ObjectId>> {
    ids.iter()
        .map(|id| {
            ObjectId::parse_str(id.trim()).map_err(|_| {
                AppError::ParameterError(format!(
                    "{}: 유효하지 않은 ID 형식입니다 ({})",
                    MessageConstant::PARAMS_FORMAT_ERROR,
                    id
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_ids_keeps_order() {
        let first = ObjectId::new();
        let second = ObjectId::new();
        let ids = vec![second.to_hex(), first.to_hex()];

        let parsed = parse_object_ids(&ids).unwrap();
        assert_eq!(parsed, vec![second, first]);
    }

    #[test]
    fn test_parse_object_ids_rejects_malformed() {
        let ids = vec![ObjectId::new().to_hex(), "L1".to_string()];

        let result = parse_object_ids(&ids);
        assert!(matches!(result, Err(AppError::ParameterError(_))));
    }
}
