use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::dto::reviews::batch_id::validate_ids;
use crate::utils::string_utils::is_valid_string;

/// 단일 문서 거절 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefuseDto {
    #[validate(custom(function = "validate_required"))]
    pub doc_id: String,

    #[validate(custom(function = "validate_required"))]
    #[validate(length(max = 512, message = "거절 사유는 512자를 넘을 수 없습니다"))]
    pub reason: String,
}

/// 여러 문서를 하나의 사유로 거절하는 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RefuseBatchDto {
    #[validate(length(min = 1, message = "ids는 비어 있을 수 없습니다"))]
    #[validate(custom(function = "validate_ids"))]
    pub ids: Vec<String>,

    #[validate(custom(function = "validate_required"))]
    #[validate(length(max = 512, message = "거절 사유는 512자를 넘을 수 없습니다"))]
    pub reason: String,
}

fn validate_required(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("required")
            .with_message("필수 값입니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refuse_uses_camel_case_doc_id() {
        let dto: RefuseDto =
            serde_json::from_str(r#"{"docId": "D1", "reason": "spam"}"#).unwrap();

        assert_eq!(dto.doc_id, "D1");
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_blank_reason_rejected() {
        let dto = RefuseDto { doc_id: "D1".to_string(), reason: " ".to_string() };
        assert!(dto.validate().is_err());

        let batch = RefuseBatchDto { ids: vec!["D1".to_string()], reason: String::new() };
        assert!(batch.validate().is_err());
    }

    #[test]
    fn test_missing_reason_fails_to_deserialize() {
        assert!(serde_json::from_str::<RefuseBatchDto>(r#"{"ids": ["D1"]}"#).is_err());
    }

    #[test]
    fn test_batch_requires_ids() {
        let batch = RefuseBatchDto { ids: vec![], reason: "dup".to_string() };
        assert!(batch.validate().is_err());
    }
}
