//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Admin Console)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   AuthMiddleware - 토큰 검증 + 요구 역할 확인      ← Permission Gate
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - 검증 + 행위자 확인 + 호출    ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   DocReviewService / UserLookup               ← Service Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! ```java
//! @PreAuthorize("hasRole('ADMIN')")
//! @DeleteMapping("/removeLog")
//! public BaseApiResult removeLog(@RequestBody BatchIdDto dto) { ... }
//! ```
//!
//! ```rust,ignore
//! #[delete("/removeLog", wrap = "AuthMiddleware::required_with_role(Role::Admin)")]
//! pub async fn remove_log(
//!     review_service: web::Data<dyn DocReviewService>,
//!     payload: web::Json<BatchIdDto>,
//! ) -> Result<HttpResponse, AppError> { ... }
//! ```
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하고 `?`로 전파합니다.
//! 서비스가 `Ok`로 돌려준 봉투는 비즈니스 에러 코드를 담고 있어도
//! HTTP 200으로 그대로 전달됩니다.

pub mod doc_review;
