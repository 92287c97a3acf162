//! # Configuration Module
//!
//! 문서 심사 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 실행 환경, Rate Limiting 설정
//! - [`auth_config`] - JWT 검증 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//! 
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 설정값을 제공합니다.
//! Spring Profile과 유사한 방식으로 동작합니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - 기본값으로 대체될 때는 경고 로그를 남김
//!
//! ### 3. 타입 안전성 (Type Safety)
//!
//! - 설정값의 타입 검증
//! - 컴파일 타임 설정 검증
//! - 런타임 설정값 파싱 오류 처리
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, JwtConfig};
//!
//! // 현재 환경 확인
//! let env = Environment::current();
//! println!("Current environment: {:?}", env);
//!
//! // 서버 설정
//! let host = ServerConfig::host();
//! let port = ServerConfig::port();
//! println!("Server will bind to {}:{}", host, port);
//!
//! // JWT 설정
//! let secret = JwtConfig::secret();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수 (프로덕션)
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="doc_review"
//! export REDIS_URL="redis://127.0.0.1:6379"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! # 환경 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export SERVER_WORKERS="4"
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Configuration` | `pub struct Config` |
//! | `@Value("${property}")` | `env::var("PROPERTY")` |
//! | `@Profile("dev")` | `Environment::Development` |
//! | `application.yml` | `.env` 파일 |
//! | `@ConfigurationProperties` | 구조체 기반 설정 |

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
