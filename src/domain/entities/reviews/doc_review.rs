use mongodb::bson::{oid::ObjectId, Bson, DateTime};
use serde::{Deserialize, Serialize};

/// 심사 진행 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReviewState {
    /// 관리자 심사 대기
    Pending,
    /// 승인됨
    Approved,
    /// 거절됨
    Refused,
}

impl ReviewState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewState::Pending => "PENDING",
            ReviewState::Approved => "APPROVED",
            ReviewState::Refused => "REFUSED",
        }
    }
}

impl From<ReviewState> for Bson {
    fn from(state: ReviewState) -> Self {
        Bson::String(state.as_str().to_string())
    }
}

/// 업로드된 문서 하나에 대한 심사 레코드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocReview {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 심사 대상 문서 ID
    pub doc_id: String,
    pub doc_name: String,
    /// 문서를 업로드한 사용자 ID
    pub user_id: String,
    pub user_name: String,
    pub state: ReviewState,
    /// 거절 사유
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// 업로더가 심사 결과를 확인했는지 여부
    #[serde(default)]
    pub read_by_user: bool,
    pub create_date: DateTime,
    pub update_date: DateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&ReviewState::Refused).unwrap(), r#""REFUSED""#);
        assert_eq!(Bson::from(ReviewState::Pending), Bson::String("PENDING".to_string()));
    }
}
