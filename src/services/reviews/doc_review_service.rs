//! # 문서 심사 서비스 구현
//!
//! 모든 메서드는 응답 봉투([`BaseApiResult`])를 반환하며, 디스패치 계층은
//! 이 봉투를 수정 없이 클라이언트에 전달합니다. 비즈니스 수준의 실패
//! (예: 거절할 문서 없음)는 `Ok(에러 봉투)`로, 인프라 실패는 `Err(AppError)`로
//! 구분합니다.
//!
//! ## 기본 구현의 상태 전이
//!
//! ```text
//! PENDING ──approve_batch──▶ APPROVED
//!    │
//!    └──refuse / refuse_batch──▶ REFUSED (+ reason)
//! ```
//!
//! 승인 규칙 자체(누가 어떤 문서를 승인할 수 있는지)는 여기서 판단하지 않습니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Document};
use serde_json::json;
use log::{info, warn};
use crate::{
    core::errors::AppResult,
    domain::{
        dto::{
            common::{api_result::{BaseApiResult, MessageConstant}, page::{PageParams, PageResult}},
            reviews::response::{DocLogResponse, DocReviewResponse},
        },
        entities::{reviews::ReviewState, users::User},
        models::auth::authentication_request::Role,
    },
    repositories::{parse_object_ids, DocLogRepository, DocReviewRepository},
    utils::string_utils::escape_regex,
};

/// 문서 심사 협력자
///
/// 식별자 목록은 입력 순서 그대로 전달됩니다. 중복 제거나 존재 확인은
/// 구현체의 몫입니다.
#[async_trait]
pub trait DocReviewService: Send + Sync {
    /// 심사 대기 문서 목록
    async fn query_reviews_by_page(&self, page: PageParams) -> AppResult<BaseApiResult>;

    /// 업로더가 심사 결과를 확인했음을 기록
    async fn user_read(&self, ids: Vec<String>, user_id: &str) -> AppResult<BaseApiResult>;

    async fn refuse(&self, doc_id: &str, reason: &str) -> AppResult<BaseApiResult>;

    async fn refuse_batch(&self, ids: Vec<String>, reason: &str) -> AppResult<BaseApiResult>;

    async fn approve_batch(&self, ids: Vec<String>) -> AppResult<BaseApiResult>;

    /// 심사가 끝난 레코드 목록. 조회 범위는 호출자와 역할에 따라 달라집니다.
    async fn query_review_log(&self, page: PageParams, user: &User, role: Role) -> AppResult<BaseApiResult>;

    async fn delete_reviews_batch(&self, ids: Vec<String>) -> AppResult<BaseApiResult>;

    /// 시스템 감사 로그 목록
    async fn query_doc_logs(&self, page: PageParams) -> AppResult<BaseApiResult>;

    async fn delete_doc_log_batch(&self, ids: Vec<String>) -> AppResult<BaseApiResult>;
}

/// MongoDB 기반 기본 구현
pub struct MongoDocReviewService {
    review_repo: Arc<DocReviewRepository>,
    log_repo: Arc<DocLogRepository>,
}

impl MongoDocReviewService {
    pub fn new(review_repo: Arc<DocReviewRepository>, log_repo: Arc<DocLogRepository>) -> Self {
        Self { review_repo, log_repo }
    }
}

/// `doc_name` 부분 일치 조건 (대소문자 무시)
fn name_filter(filter: &mut Document, filter_word: Option<&str>) {
    if let Some(word) = filter_word {
        filter.insert("doc_name", doc! { "$regex": escape_regex(word), "$options": "i" });
    }
}

pub(crate) fn pending_filter(page: &PageParams) -> Document {
    let mut filter = doc! { "state": ReviewState::Pending };
    name_filter(&mut filter, page.filter_word.as_deref());
    filter
}

/// 심사 완료 레코드 조건
///
/// 일반 사용자는 자신이 업로드한 문서만, 관리자는 전체를 봅니다.
pub(crate) fn review_result_filter(page: &PageParams, user: &User, role: Role) -> Document {
    let mut filter = doc! { "state": { "$ne": ReviewState::Pending } };
    if role != Role::Admin {
        filter.insert("user_id", user.id_string().unwrap_or_default());
    }
    name_filter(&mut filter, page.filter_word.as_deref());
    filter
}

pub(crate) fn log_filter(page: &PageParams) -> Document {
    let mut filter = Document::new();
    name_filter(&mut filter, page.filter_word.as_deref());
    filter
}

fn ids_filter(ids: &[ObjectId]) -> Document {
    doc! { "_id": { "$in": ids } }
}

/// 문서 ID 목록으로 심사 레코드를 고르는 조건
///
/// `refuse`와 같은 기준(`doc_id`)으로 일괄 작업 대상을 찾습니다.
pub(crate) fn doc_ids_filter(ids: &[String]) -> Document {
    doc! { "doc_id": { "$in": ids } }
}

#[async_trait]
impl DocReviewService for MongoDocReviewService {
    async fn query_reviews_by_page(&self, page: PageParams) -> AppResult<BaseApiResult> {
        let (total, list) = self.review_repo.find_page(pending_filter(&page), &page).await?;
        let list: Vec<DocReviewResponse> = list.into_iter().map(Into::into).collect();

        Ok(BaseApiResult::success_with(PageResult::new(&page, total, list)))
    }

    async fn user_read(&self, ids: Vec<String>, user_id: &str) -> AppResult<BaseApiResult> {
        let object_ids = parse_object_ids(&ids)?;
        let mut filter = ids_filter(&object_ids);
        filter.insert("user_id", user_id);

        let matched = self.review_repo
            .update_many(filter, doc! { "read_by_user": true })
            .await?;

        Ok(BaseApiResult::success_with(json!({ "modified": matched })))
    }

    async fn refuse(&self, doc_id: &str, reason: &str) -> AppResult<BaseApiResult> {
        let matched = self.review_repo
            .update_many(
                doc! { "doc_id": doc_id },
                doc! { "state": ReviewState::Refused, "reason": reason },
            )
            .await?;

        if matched == 0 {
            return Ok(BaseApiResult::error(
                MessageConstant::NOT_FOUND_CODE,
                format!("심사 대상 문서를 찾을 수 없습니다: {}", doc_id),
            ));
        }

        info!("문서 거절: {} ({})", doc_id, reason);
        Ok(BaseApiResult::success())
    }

    async fn refuse_batch(&self, ids: Vec<String>, reason: &str) -> AppResult<BaseApiResult> {
        let matched = self.review_repo
            .update_many(
                doc_ids_filter(&ids),
                doc! { "state": ReviewState::Refused, "reason": reason },
            )
            .await?;

        let document_ids: Vec<ObjectId> = ids
            .iter()
            .filter_map(|id| match ObjectId::parse_str(id.trim()) {
                Ok(id) => Some(id),
                Err(_) => {
                    warn!("ObjectId 형식이 아닌 문서 ID는 삭제하지 않습니다: {}", id);
                    None
                }
            })
            .collect();
        let removed = self.review_repo.delete_documents(&document_ids).await?;

        info!("문서 일괄 거절: {}건, 원본 삭제 {}건", matched, removed);
        Ok(BaseApiResult::success_with(json!({ "modified": matched, "removedDocuments": removed })))
    }

    async fn approve_batch(&self, ids: Vec<String>) -> AppResult<BaseApiResult> {
        let matched = self.review_repo
            .update_many(doc_ids_filter(&ids), doc! { "state": ReviewState::Approved })
            .await?;

        info!("문서 일괄 승인: {}건", matched);
        Ok(BaseApiResult::success_with(json!({ "modified": matched })))
    }

    async fn query_review_log(&self, page: PageParams, user: &User, role: Role) -> AppResult<BaseApiResult> {
        let filter = review_result_filter(&page, user, role);
        let (total, list) = self.review_repo.find_page(filter, &page).await?;
        let list: Vec<DocReviewResponse> = list.into_iter().map(Into::into).collect();

        Ok(BaseApiResult::success_with(PageResult::new(&page, total, list)))
    }

    async fn delete_reviews_batch(&self, ids: Vec<String>) -> AppResult<BaseApiResult> {
        let object_ids = parse_object_ids(&ids)?;
        let deleted = self.review_repo.delete_by_ids(&object_ids).await?;

        Ok(BaseApiResult::success_with(json!({ "deleted": deleted })))
    }

    async fn query_doc_logs(&self, page: PageParams) -> AppResult<BaseApiResult> {
        let (total, list) = self.log_repo.find_page(log_filter(&page), &page).await?;
        let list: Vec<DocLogResponse> = list.into_iter().map(Into::into).collect();

        Ok(BaseApiResult::success_with(PageResult::new(&page, total, list)))
    }

    async fn delete_doc_log_batch(&self, ids: Vec<String>) -> AppResult<BaseApiResult> {
        let object_ids = parse_object_ids(&ids)?;
        let deleted = self.log_repo.delete_by_ids(&object_ids).await?;

        Ok(BaseApiResult::success_with(json!({ "deleted": deleted })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with(word: Option<&str>) -> PageParams {
        PageParams {
            filter_word: word.map(str::to_string),
            ..PageParams::default()
        }
    }

    #[test]
    fn test_pending_filter_without_word() {
        assert_eq!(pending_filter(&page_with(None)), doc! { "state": "PENDING" });
    }

    #[test]
    fn test_pending_filter_escapes_word() {
        let filter = pending_filter(&page_with(Some("v1.0")));

        assert_eq!(
            filter,
            doc! { "state": "PENDING", "doc_name": { "$regex": r"v1\.0", "$options": "i" } }
        );
    }

    #[test]
    fn test_review_result_filter_scopes_user() {
        let mut user = User::new("jarrett".to_string());
        let id = ObjectId::new();
        user.id = Some(id);

        let filter = review_result_filter(&page_with(None), &user, Role::User);
        assert_eq!(
            filter,
            doc! { "state": { "$ne": "PENDING" }, "user_id": id.to_hex() }
        );
    }

    #[test]
    fn test_review_result_filter_admin_sees_all() {
        let user = User::new("admin".to_string());

        let filter = review_result_filter(&page_with(None), &user, Role::Admin);
        assert!(!filter.contains_key("user_id"));
    }

    #[test]
    fn test_batch_filter_matches_document_id() {
        let ids = vec!["64b7f0c2a1b2c3d4e5f60718".to_string(), "doc-2".to_string()];

        assert_eq!(
            doc_ids_filter(&ids),
            doc! { "doc_id": { "$in": ["64b7f0c2a1b2c3d4e5f60718", "doc-2"] } }
        );
    }

    #[test]
    fn test_log_filter_empty_without_word() {
        assert!(log_filter(&page_with(None)).is_empty());
    }
}
