//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 데이터 구조체들을 정의합니다.
//! Spring Data의 `@Document` 클래스와 유사한 역할을 합니다.
//!
//! ## MongoDB 통합
//!
//! 모든 엔티티는 다음 특징을 가집니다:
//! - **BSON 직렬화**: `serde`를 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑 (`Option<ObjectId>`)
//! - **bson DateTime**: 생성/수정 시각은 `mongodb::bson::DateTime`으로 저장
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── users/      ← 사용자 프로필 (읽기 전용)
//! │   └── user.rs
//! ├── reviews/    ← 문서 심사 레코드
//! │   └── doc_review.rs
//! └── logs/       ← 시스템 감사 로그
//!     └── doc_log.rs
//! ```
//!
//! ## 컬렉션 매핑
//!
//! | 엔티티 | 컬렉션 |
//! |--------|--------|
//! | `User` | `users` |
//! | `DocReview` | `doc_reviews` |
//! | `DocLog` | `doc_logs` |
//!
//! ## 주의사항
//!
//! - **순환 참조 금지**: 엔티티 간 직접 참조 대신 ID 문자열을 사용합니다.
//! - **식별자 형식**: 외부로 노출되는 ID는 ObjectId의 16진수 문자열입니다.

pub mod users;
pub mod reviews;
pub mod logs;

pub use users::User;
pub use reviews::{DocReview, ReviewState};
pub use logs::DocLog;
