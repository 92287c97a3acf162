//! # Core Module
//!
//! 서비스 전역에서 공유하는 기반 기능을 모아 둔 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError`로 응답 봉투 자동 생성
//! - **자동 변환**: thiserror 기반 에러 메시지 관리
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프로젝트 |
//! |--------|-------------|
//! | `@ExceptionHandler` | `AppError::error_response()` |
//! | `@ControllerAdvice` | `ResponseError` trait 구현 |
//! | `ResponseEntity<BaseApiResult>` | `Result<HttpResponse, AppError>` |
//!
//! ## 의존성 주입
//!
//! 협력 객체들은 `main`에서 한 번 생성되어 `web::Data<dyn Trait>`로
//! 등록됩니다. 테스트에서는 같은 자리에 가짜 구현을 넣습니다.
//!
//! ```rust,ignore
//! let review_service: Arc<dyn DocReviewService> = Arc::new(MongoDocReviewService::new(..));
//!
//! App::new()
//!     .app_data(web::Data::from(review_service.clone()))
//!     .configure(configure_all_routes)
//! ```

pub mod errors;

pub use errors::*;
