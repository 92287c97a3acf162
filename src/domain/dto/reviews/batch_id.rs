use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::utils::string_utils::is_valid_string;

/// 여러 엔티티 식별자를 한 번에 전달하는 요청 본문
///
/// 순서는 그대로 보존되며 중복 제거는 하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BatchIdDto {
    #[validate(length(min = 1, message = "ids는 비어 있을 수 없습니다"))]
    #[validate(custom(function = "validate_ids"))]
    pub ids: Vec<String>,
}

pub(crate) fn validate_ids(ids: &[String]) -> Result<(), ValidationError> {
    if ids.iter().any(|id| !is_valid_string(id)) {
        return Err(ValidationError::new("blank_id")
            .with_message("빈 식별자는 허용되지 않습니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ids_rejected() {
        let dto: BatchIdDto = serde_json::from_str(r#"{"ids": []}"#).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_blank_id_rejected() {
        let dto = BatchIdDto { ids: vec!["L1".to_string(), "  ".to_string()] };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_missing_ids_fails_to_deserialize() {
        assert!(serde_json::from_str::<BatchIdDto>("{}").is_err());
    }

    #[test]
    fn test_order_and_duplicates_kept() {
        let dto: BatchIdDto = serde_json::from_str(r#"{"ids": ["b", "a", "b"]}"#).unwrap();

        assert!(dto.validate().is_ok());
        assert_eq!(dto.ids, vec!["b", "a", "b"]);
    }
}
