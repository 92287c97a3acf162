//! JWT 토큰 검증 서비스 구현
//!
//! 인증 서비스와 공유하는 HS256 비밀키로 액세스 토큰을 검증합니다.
//! 발급 기능은 운영 도구와 테스트에서 사용합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use crate::{
    config::JwtConfig,
    core::errors::{AppError, ErrorContext},
    domain::models::{auth::authentication_request::Role, token::token::TokenClaims},
};

/// JWT 토큰 관리 서비스
///
/// `web::Data<TokenService>`로 등록되어 인증 미들웨어가 사용합니다.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    /// 환경 변수(`JWT_SECRET`, `JWT_EXPIRATION_HOURS`)로 생성
    pub fn from_config() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    /// 호출자 ID와 역할을 담은 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 인코딩 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.issue_token("64b7f0c2a1b2c3d4e5f60718", Role::Admin)?;
    /// ```
    pub fn issue_token(&self, user_id: &str, role: Role) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: user_id.to_string(),
            role,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        self.encode_claims(&claims)
    }

    fn encode_claims(&self, claims: &TokenClaims) -> Result<String, AppError> {
        let encoding_key = EncodingKey::from_secret(self.secret.as_ref());

        encode(&Header::default(), claims, &encoding_key)
            .context("JWT 토큰 생성 실패")
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                },
                _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    /// "Bearer {token}" 형식의 헤더에서 토큰 부분만 추출
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", 1)
    }

    #[test]
    fn test_issue_and_verify() {
        let service = service();
        let token = service.issue_token("64b7f0c2a1b2c3d4e5f60718", Role::Admin).unwrap();

        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "64b7f0c2a1b2c3d4e5f60718");
        assert_eq!(claims.role, Role::Admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = service().issue_token("u1", Role::User).unwrap();
        let other = TokenService::new("another-secret", 1);

        assert!(matches!(other.verify_token(&token), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = service();
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: "u1".to_string(),
            role: Role::User,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = service.encode_claims(&claims).unwrap();

        assert!(matches!(service.verify_token(&token), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }
}
