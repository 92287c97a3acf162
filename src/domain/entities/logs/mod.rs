//! 시스템 감사 로그 엔티티 모듈

pub mod doc_log;

pub use doc_log::DocLog;
