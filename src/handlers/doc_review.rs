//! # Document Review HTTP Handlers
//!
//! 문서 심사 워크플로우 엔드포인트입니다. 각 핸들러는 다음 순서로만 동작합니다.
//!
//! 1. 요구 역할 확인 (라우트에 선언된 `AuthMiddleware`)
//! 2. 요청 DTO 검증
//! 3. 행위자가 필요한 작업이면 [`UserLookup`]으로 실제 사용자인지 확인
//! 4. [`DocReviewService`] 메서드 정확히 한 번 호출
//! 5. 서비스가 돌려준 봉투를 그대로 응답
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 역할 | 서비스 호출 |
//! |--------|------|------|-------------|
//! | `GET` | `/docReview/queryDocForReview` | ADMIN | `query_reviews_by_page` |
//! | `PUT` | `/docReview/userRead` | USER | `user_read` |
//! | `POST` | `/docReview/refuse` | ADMIN | `refuse` |
//! | `POST` | `/docReview/refuseBatch` | ADMIN | `refuse_batch` |
//! | `POST` | `/docReview/approve` | ADMIN | `approve_batch` |
//! | `GET` | `/docReview/queryReviewResultList` | USER, ADMIN | `query_review_log` |
//! | `DELETE` | `/docReview/removeDocReview` | 인증만 | `delete_reviews_batch` |
//! | `GET` | `/docReview/queryLogList` | ADMIN | `query_doc_logs` |
//! | `DELETE` | `/docReview/removeLog` | ADMIN | `delete_doc_log_batch` |
//! | `PUT` | `/docReview/systemConfig` | ADMIN | 없음 |
//!
//! `removeDocReview`는 역할 제한 없이 인증된 모든 호출자에게 열려 있습니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use log::{debug, info, warn};
use validator::Validate;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::{
            common::{api_result::{BaseApiResult, MessageConstant}, page::PageParams},
            reviews::{BatchIdDto, RefuseBatchDto, RefuseDto},
        },
        entities::users::User,
        models::auth::{
            authenticated_user::{ActorId, AuthenticatedUser},
            authentication_request::Role,
        },
    },
    middlewares::AuthMiddleware,
    services::{reviews::DocReviewService, users::UserLookup},
};

/// 행위자 ID를 실제 사용자로 확인합니다.
///
/// 사용자가 없으면 서비스 호출 전에 파라미터 에러로 중단합니다.
async fn resolve_actor(user_lookup: &dyn UserLookup, actor: &ActorId) -> AppResult<User> {
    user_lookup
        .query_by_id(actor.as_str())
        .await?
        .ok_or_else(|| {
            warn!("확인할 수 없는 행위자: {}", actor.as_str());
            AppError::ParameterError(MessageConstant::PARAMS_FORMAT_ERROR.to_string())
        })
}

fn validate<T: Validate>(dto: &T) -> AppResult<()> {
    dto.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))
}

/// 심사 대기 문서 목록 조회
///
/// # 쿼리 파라미터
///
/// - `page` (기본 1), `rows` (기본 10, 최대 100), `filterWord` (선택)
#[get("/queryDocForReview", wrap = "AuthMiddleware::required_with_role(Role::Admin)")]
pub async fn query_doc_for_review(
    review_service: web::Data<dyn DocReviewService>,
    page: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let page = page.into_inner();
    validate(&page)?;

    let result = review_service.query_reviews_by_page(page).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// 업로더가 심사 결과를 읽었음을 표시
#[put("/userRead", wrap = "AuthMiddleware::required_with_role(Role::User)")]
pub async fn user_read(
    review_service: web::Data<dyn DocReviewService>,
    user_lookup: web::Data<dyn UserLookup>,
    actor: ActorId,
    payload: web::Json<BatchIdDto>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    validate(&payload)?;

    resolve_actor(user_lookup.get_ref(), &actor).await?;

    let result = review_service.user_read(payload.ids, actor.as_str()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// 단일 문서 거절
///
/// ```json
/// { "docId": "64b7f0c2a1b2c3d4e5f60718", "reason": "저작권 침해" }
/// ```
#[post("/refuse", wrap = "AuthMiddleware::required_with_role(Role::Admin)")]
pub async fn refuse(
    review_service: web::Data<dyn DocReviewService>,
    payload: web::Json<RefuseDto>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    validate(&payload)?;

    info!("문서 거절 요청: {}", payload.doc_id);
    let result = review_service.refuse(&payload.doc_id, &payload.reason).await?;
    if !result.is_success() {
        warn!("문서 거절 실패: {} ({} {})", payload.doc_id, result.code, result.message);
    }
    Ok(HttpResponse::Ok().json(result))
}

#[post("/refuseBatch", wrap = "AuthMiddleware::required_with_role(Role::Admin)")]
pub async fn refuse_batch(
    review_service: web::Data<dyn DocReviewService>,
    payload: web::Json<RefuseBatchDto>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    validate(&payload)?;

    info!("문서 일괄 거절 요청: {}건", payload.ids.len());
    let result = review_service.refuse_batch(payload.ids, &payload.reason).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// 문서 일괄 승인
#[post("/approve", wrap = "AuthMiddleware::required_with_role(Role::Admin)")]
pub async fn approve(
    review_service: web::Data<dyn DocReviewService>,
    payload: web::Json<BatchIdDto>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    validate(&payload)?;

    info!("문서 일괄 승인 요청: {}건", payload.ids.len());
    let result = review_service.approve_batch(payload.ids).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// 심사 결과 목록 조회
///
/// 호출자 본인과 역할이 함께 서비스로 전달되어 조회 범위를 결정합니다.
#[get(
    "/queryReviewResultList",
    wrap = "AuthMiddleware::required_with_roles(vec![Role::User, Role::Admin])"
)]
pub async fn query_review_result_list(
    review_service: web::Data<dyn DocReviewService>,
    user_lookup: web::Data<dyn UserLookup>,
    actor: ActorId,
    caller: AuthenticatedUser,
    page: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let page = page.into_inner();
    validate(&page)?;

    let user = resolve_actor(user_lookup.get_ref(), &actor).await?;
    debug!("심사 결과 조회: {} (관리자: {})", user.username, caller.is_admin());

    let result = review_service.query_review_log(page, &user, caller.role).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// 심사 레코드 일괄 삭제
#[delete("/removeDocReview", wrap = "AuthMiddleware::required()")]
pub async fn remove_doc_review(
    review_service: web::Data<dyn DocReviewService>,
    user_lookup: web::Data<dyn UserLookup>,
    actor: ActorId,
    payload: web::Json<BatchIdDto>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    validate(&payload)?;

    let user = resolve_actor(user_lookup.get_ref(), &actor).await?;
    info!("심사 레코드 삭제 요청: {}건 (요청자: {})", payload.ids.len(), user.username);

    let result = review_service.delete_reviews_batch(payload.ids).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// 시스템 감사 로그 조회
#[get("/queryLogList", wrap = "AuthMiddleware::required_with_role(Role::Admin)")]
pub async fn query_log_list(
    review_service: web::Data<dyn DocReviewService>,
    page: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let page = page.into_inner();
    validate(&page)?;

    let result = review_service.query_doc_logs(page).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[delete("/removeLog", wrap = "AuthMiddleware::required_with_role(Role::Admin)")]
pub async fn remove_log(
    review_service: web::Data<dyn DocReviewService>,
    payload: web::Json<BatchIdDto>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    validate(&payload)?;

    info!("감사 로그 삭제 요청: {}건", payload.ids.len());
    let result = review_service.delete_doc_log_batch(payload.ids).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// 시스템 설정 변경
///
/// 본문은 해석하지 않으며 항상 성공을 반환합니다.
#[put("/systemConfig", wrap = "AuthMiddleware::required_with_role(Role::Admin)")]
pub async fn system_config(payload: web::Bytes) -> HttpResponse {
    debug!("시스템 설정 요청 수신: {} bytes", payload.len());
    HttpResponse::Ok().json(BaseApiResult::success())
}
