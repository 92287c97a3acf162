//! # 문서 심사 리포지토리 구현
//!
//! `doc_reviews` 컬렉션의 페이지 조회, 상태 일괄 변경, 삭제를 담당합니다.
//! 심사 거절 시 원본 문서를 지우기 위해 `documents` 컬렉션에도 접근합니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection,
};
use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::{dto::common::page::PageParams, entities::reviews::DocReview},
};

#[derive(Clone)]
pub struct DocReviewRepository {
    db: Arc<Database>,
}

impl DocReviewRepository {
    pub const COLLECTION: &'static str = "doc_reviews";
    /// 업로드된 문서 본문이 저장된 컬렉션
    pub const DOCUMENT_COLLECTION: &'static str = "documents";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<DocReview> {
        self.db.collection::<DocReview>(Self::COLLECTION)
    }

    /// 필터에 맞는 심사 레코드를 최신순으로 한 페이지 조회합니다.
    ///
    /// 반환값은 `(전체 건수, 현재 페이지 목록)`입니다.
    pub async fn find_page(&self, filter: Document, params: &PageParams) -> AppResult<(u64, Vec<DocReview>)> {
        let total = self.collection()
            .count_documents(filter.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let list = self.collection()
            .find(filter)
            .sort(doc! { "create_date": -1 })
            .skip(params.skip())
            .limit(params.limit())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect::<Vec<_>>()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok((total, list))
    }

    /// `$set` 업데이트를 일괄 적용하고 매칭된 건수를 반환합니다.
    ///
    /// `update_date`는 항상 현재 시각으로 갱신됩니다.
    pub async fn update_many(&self, filter: Document, mut set: Document) -> AppResult<u64> {
        set.insert("update_date", mongodb::bson::DateTime::now());

        let result = self.collection()
            .update_many(filter, doc! { "$set": set })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count)
    }

    pub async fn delete_by_ids(&self, ids: &[ObjectId]) -> AppResult<u64> {
        let result = self.collection()
            .delete_many(doc! { "_id": { "$in": ids } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }

    /// 심사 대상 원본 문서를 삭제합니다.
    pub async fn delete_documents(&self, doc_ids: &[ObjectId]) -> AppResult<u64> {
        if doc_ids.is_empty() {
            return Ok(0);
        }

        let result = self.db
            .collection::<Document>(Self::DOCUMENT_COLLECTION)
            .delete_many(doc! { "_id": { "$in": doc_ids } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }
}
