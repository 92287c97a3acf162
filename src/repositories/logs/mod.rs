//! 시스템 감사 로그 데이터 액세스 계층

pub mod log_repo;

pub use log_repo::DocLogRepository;
