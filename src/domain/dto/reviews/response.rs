use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::{logs::DocLog, reviews::{DocReview, ReviewState}};

/// 심사 레코드 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocReviewResponse {
    pub id: String,
    pub doc_id: String,
    pub doc_name: String,
    pub user_id: String,
    pub user_name: String,
    pub state: ReviewState,
    pub reason: Option<String>,
    pub read_by_user: bool,
    pub create_date: DateTime,
    pub update_date: DateTime,
}

impl From<DocReview> for DocReviewResponse {
    fn from(review: DocReview) -> Self {
        let DocReview {
            id,
            doc_id,
            doc_name,
            user_id,
            user_name,
            state,
            reason,
            read_by_user,
            create_date,
            update_date,
        } = review;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            doc_id,
            doc_name,
            user_id,
            user_name,
            state,
            reason,
            read_by_user,
            create_date,
            update_date,
        }
    }
}

/// 감사 로그 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocLogResponse {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub doc_id: String,
    pub doc_name: String,
    pub action: String,
    pub create_date: DateTime,
}

impl From<DocLog> for DocLogResponse {
    fn from(log: DocLog) -> Self {
        Self {
            id: log.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: log.user_id,
            user_name: log.user_name,
            doc_id: log.doc_id,
            doc_name: log.doc_name,
            action: log.action,
            create_date: log.create_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_review_response_exposes_hex_id() {
        let id = ObjectId::new();
        let now = DateTime::now();
        let review = DocReview {
            id: Some(id),
            doc_id: "d1".to_string(),
            doc_name: "보고서.pdf".to_string(),
            user_id: "u1".to_string(),
            user_name: "jarrett".to_string(),
            state: ReviewState::Pending,
            reason: None,
            read_by_user: false,
            create_date: now,
            update_date: now,
        };

        let response = DocReviewResponse::from(review);
        assert_eq!(response.id, id.to_hex());

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["docName"], "보고서.pdf");
        assert_eq!(value["state"], "PENDING");
    }
}
