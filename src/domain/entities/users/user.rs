//! User Entity Implementation
//!
//! 블로그 플랫폼의 사용자 프로필 레코드입니다.
//! 사용자 관리 서비스가 생성/수정하며, 이 서비스에서는 읽기 전용입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 프로필 엔티티
///
/// 파괴적인 작업이나 행위자를 참조하는 작업 전에 행위자가 실제로
/// 존재하는지 확인하는 데에만 사용됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 표시 이름
    pub username: String,
    /// 자유 형식 소개 메시지
    #[serde(default)]
    pub message: Option<String>,
    /// 소속 회사
    #[serde(default)]
    pub company: Option<String>,
    /// 취미
    #[serde(default)]
    pub hobby: Option<String>,
    /// 생성 시간
    pub create_date: DateTime,
    /// 수정 시간
    pub update_date: DateTime,
}

impl User {
    /// 새 사용자 프로필 생성
    pub fn new(username: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            message: None,
            company: None,
            hobby: None,
            create_date: now,
            update_date: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_id() {
        let user = User::new("jarrett".to_string());

        assert!(user.id_string().is_none());
        assert_eq!(user.create_date, user.update_date);
    }

    #[test]
    fn test_json_roundtrip_for_cache() {
        let mut user = User::new("jarrett".to_string());
        user.id = Some(ObjectId::new());
        user.company = Some("jiaruiblog".to_string());

        let json = serde_json::to_string(&user).unwrap();
        let restored: User = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, user);
    }
}
