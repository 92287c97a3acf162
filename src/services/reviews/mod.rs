//! 문서 심사 서비스 모듈
//!
//! 디스패치 계층이 호출하는 [`DocReviewService`](doc_review_service::DocReviewService)
//! 협력자 trait과 MongoDB 기반 기본 구현을 제공합니다.

pub mod doc_review_service;

pub use doc_review_service::{DocReviewService, MongoDocReviewService};
