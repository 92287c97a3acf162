use serde::{Deserialize, Serialize};
use crate::domain::models::auth::authentication_request::Role;

/// 액세스 토큰 클레임
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID
    pub sub: String,
    /// 호출자 역할
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}
