use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 문서에 대해 수행된 사용자 행위 기록
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocLog {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub user_name: String,
    pub doc_id: String,
    pub doc_name: String,
    /// 수행된 행위 (예: `UPLOAD`, `DOWNLOAD`, `REMOVE`)
    pub action: String,
    pub create_date: DateTime,
}
