//! 문서 심사 엔티티 모듈

pub mod doc_review;

pub use doc_review::{DocReview, ReviewState};
