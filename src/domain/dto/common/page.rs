//! 페이지네이션 요청/응답 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

fn default_page() -> u64 {
    1
}

fn default_rows() -> u64 {
    10
}

/// 목록 조회용 페이지 파라미터
///
/// 쿼리 스트링(`?page=1&rows=10&filterWord=...`)으로 전달되며,
/// 디스패치 계층은 검증만 하고 값은 그대로 서비스에 넘깁니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page는 1 이상이어야 합니다"))]
    pub page: u64,

    #[serde(default = "default_rows")]
    #[validate(range(min = 1, max = 100, message = "rows는 1-100 사이여야 합니다"))]
    pub rows: u64,

    /// 문서 이름 검색어 (공백만 있으면 없는 것으로 처리)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub filter_word: Option<String>,
}

impl PageParams {
    /// MongoDB `skip` 값
    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.rows)
    }

    /// MongoDB `limit` 값
    pub fn limit(&self) -> i64 {
        i64::try_from(self.rows).unwrap_or(i64::MAX)
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            rows: default_rows(),
            filter_word: None,
        }
    }
}

/// 페이지 조회 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub total: u64,
    pub page: u64,
    pub rows: u64,
    pub list: Vec<T>,
}

impl<T> PageResult<T> {
    pub fn new(params: &PageParams, total: u64, list: Vec<T>) -> Self {
        Self {
            total,
            page: params.page,
            rows: params.rows,
            list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_query_is_empty() {
        let params: PageParams = serde_json::from_str("{}").unwrap();

        assert_eq!(params, PageParams::default());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_blank_filter_word_is_none() {
        let params: PageParams =
            serde_json::from_str(r#"{"page": 2, "rows": 5, "filterWord": "   "}"#).unwrap();

        assert_eq!(params.filter_word, None);
        assert_eq!(params.skip(), 5);
        assert_eq!(params.limit(), 5);
    }

    #[test]
    fn test_zero_page_and_oversized_rows_are_rejected() {
        let zero_page = PageParams { page: 0, ..PageParams::default() };
        let huge_rows = PageParams { rows: 500, ..PageParams::default() };

        assert!(zero_page.validate().is_err());
        assert!(huge_rows.validate().is_err());
    }
}
