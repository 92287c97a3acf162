//! # 감사 로그 리포지토리 구현

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection,
};
use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::{dto::common::page::PageParams, entities::logs::DocLog},
};

/// `doc_logs` 컬렉션 리포지토리
#[derive(Clone)]
pub struct DocLogRepository {
    db: Arc<Database>,
}

impl DocLogRepository {
    pub const COLLECTION: &'static str = "doc_logs";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<DocLog> {
        self.db.collection::<DocLog>(Self::COLLECTION)
    }

    /// 필터에 맞는 로그를 최신순으로 한 페이지 조회합니다.
    pub async fn find_page(&self, filter: Document, params: &PageParams) -> AppResult<(u64, Vec<DocLog>)> {
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

    pub async fn delete_by_ids(&self, ids: &[ObjectId]) -> AppResult<u64> {
        let result = self.collection()
            .delete_many(doc! { "_id": { "$in": ids } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }
}
