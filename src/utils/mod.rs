//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 정규식 이스케이프
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{is_valid_string, escape_regex};
//!
//! assert!(is_valid_string("doc-1"));
//! let pattern = escape_regex("v1.0");
//! ```

pub mod string_utils;
