//! 문서 심사 요청/응답 DTO
//!
//! # Examples
//!
//! ```json
//! { "ids": ["64b7...", "64b8..."] }
//! { "docId": "64b7...", "reason": "저작권 침해" }
//! { "ids": ["64b7..."], "reason": "중복 업로드" }
//! ```

pub mod batch_id;
pub mod refuse;
pub mod response;

pub use batch_id::BatchIdDto;
pub use refuse::{RefuseBatchDto, RefuseDto};
pub use response::{DocLogResponse, DocReviewResponse};
