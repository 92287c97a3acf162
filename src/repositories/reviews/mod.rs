//! 문서 심사 레코드 데이터 액세스 계층

pub mod review_repo;

pub use review_repo::DocReviewRepository;
