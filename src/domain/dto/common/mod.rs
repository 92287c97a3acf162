//! 공통 DTO
//!
//! 응답 봉투와 페이지네이션처럼 여러 엔드포인트가 공유하는 데이터 구조입니다.

pub mod api_result;
pub mod page;

pub use api_result::{BaseApiResult, MessageConstant};
pub use page::{PageParams, PageResult};
