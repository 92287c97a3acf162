use serde::{Deserialize, Serialize};

/// 호출자 역할
///
/// 토큰 클레임의 `role` 값과 1:1로 대응합니다 (`"USER"`, `"ADMIN"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// 일반 사용자
    User,
    /// 관리자
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

/// 라우트별로 선언되는 요구 역할
#[derive(Debug, Clone, PartialEq)]
pub enum RequiredRole {
    /// 특정 단일 역할이 필요
    Single(Role),
    /// 여러 역할 중 하나라도 있으면 허용 (OR 조건)
    Any(Vec<Role>),
}

impl RequiredRole {
    /// 호출자 역할이 요구사항을 만족하는지 확인
    pub fn is_satisfied(&self, caller_role: Role) -> bool {
        match self {
            RequiredRole::Single(required_role) => *required_role == caller_role,
            RequiredRole::Any(required_roles) => required_roles.contains(&caller_role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_role_single() {
        let required = RequiredRole::Single(Role::Admin);

        assert!(required.is_satisfied(Role::Admin));
        assert!(!required.is_satisfied(Role::User));
    }

    #[test]
    fn test_required_role_any() {
        let required = RequiredRole::Any(vec![Role::User, Role::Admin]);

        assert!(required.is_satisfied(Role::Admin));
        assert!(required.is_satisfied(Role::User));
    }

    #[test]
    fn test_user_only_route_rejects_admin() {
        let required = RequiredRole::Single(Role::User);

        assert!(!required.is_satisfied(Role::Admin));
    }

    #[test]
    fn test_empty_any_denies_everyone() {
        let required = RequiredRole::Any(vec![]);

        assert!(!required.is_satisfied(Role::User));
        assert!(!required.is_satisfied(Role::Admin));
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""ADMIN""#);
        assert_eq!(serde_json::from_str::<Role>(r#""USER""#).unwrap(), Role::User);
    }
}
