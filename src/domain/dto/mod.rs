//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! Spring Framework의 `@RequestBody`, `@ModelAttribute`, `@ResponseBody`와
//! 동일한 역할을 수행하며, 클라이언트와 서버 간의 데이터 계약을 정의합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | `web::Json<T>` + `reviews` 모듈 | HTTP 요청 본문 매핑 |
//! | `@ModelAttribute` | `web::Query<PageParams>` | 쿼리 스트링 매핑 |
//! | `@Valid` | `validator` crate | 입력값 유효성 검증 |
//! | `BaseApiResult` | [`common::BaseApiResult`] | 통일된 응답 봉투 |
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── common/             # 공통 DTO
//! │   ├── api_result.rs   # 응답 봉투 + 코드 상수
//! │   └── page.rs         # 페이지 파라미터/결과
//! └── reviews/            # 문서 심사 요청/응답 DTO
//!     ├── batch_id.rs     # BatchIdDto
//!     ├── refuse.rs       # RefuseDto, RefuseBatchDto
//!     └── response.rs     # DocReviewResponse, DocLogResponse
//! ```
//!
//! ## 검증 규칙
//!
//! - 일괄 처리 DTO의 `ids`는 비어 있을 수 없고, 각 식별자는 공백이 아니어야 합니다.
//! - 거절 사유(`reason`)는 필수입니다.
//! - 식별자의 중복 여부와 존재 여부는 심사 서비스가 판단합니다.

pub mod common;
pub mod reviews;

pub use common::*;
pub use reviews::*;
