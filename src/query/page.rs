//! Page requests and page results.

use crate::query::error::SearchError;
use crate::query::sort::Sort;
use serde::{Deserialize, Serialize};

/// A bounded window over an ordered result: skip `offset` rows, take at most `limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    offset: u64,
    limit: u64,
    sort: Sort,
}

impl PageRequest {
    /// Window from raw values; rejects a negative offset or a non-positive limit.
    pub fn new(offset: i64, limit: i64) -> Result<Self, SearchError> {
        let offset = u64::try_from(offset)
            .map_err(|_| SearchError::InvalidPage(format!("offset must be >= 0, got {}", offset)))?;
        if limit <= 0 {
            return Err(SearchError::InvalidPage(format!(
                "limit must be > 0, got {}",
                limit
            )));
        }
        Ok(Self {
            offset,
            limit: limit as u64,
            sort: Sort::unsorted(),
        })
    }

    /// Zero-based page number and page size.
    pub fn of(page: i64, size: i64) -> Result<Self, SearchError> {
        if page < 0 {
            return Err(SearchError::InvalidPage(format!(
                "page must be >= 0, got {}",
                page
            )));
        }
        let offset = page
            .checked_mul(size.max(0))
            .ok_or_else(|| SearchError::InvalidPage("page offset overflows".to_string()))?;
        Self::new(offset, size)
    }

    /// Binds request parameters; a missing size falls back to `default_size`.
    pub fn from_params(params: &PageParams, default_size: u64) -> Result<Self, SearchError> {
        let size = match params.size {
            Some(size) => size,
            None => i64::try_from(default_size)
                .map_err(|_| SearchError::InvalidPage("default size too large".to_string()))?,
        };
        let sort = Sort::parse(&params.sort)?;
        Ok(Self::of(params.page.unwrap_or(0), size)?.with_sort(sort))
    }

    pub fn with_sort(mut self, sort: impl Into<Sort>) -> Self {
        self.sort = sort.into();
        self
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn sort(&self) -> &Sort {
        &self.sort
    }
}

/// Paging parameters as they arrive on a request (`?page=1&size=3&sort=age,desc`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Vec<String>,
}

/// One window of results plus the total number of matching records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub offset: u64,
    pub limit: u64,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, offset: u64, limit: u64, total: u64) -> Self {
        Self {
            content,
            offset,
            limit,
            total,
        }
    }

    /// Zero-based page number.
    pub fn number(&self) -> u64 {
        if self.limit == 0 {
            0
        } else {
            self.offset / self.limit
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            0
        } else {
            self.total.div_ceil(self.limit)
        }
    }

    pub fn has_next(&self) -> bool {
        self.offset.saturating_add(self.limit) < self.total
    }

    pub fn is_first(&self) -> bool {
        self.offset == 0
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            offset: self.offset,
            limit: self.limit,
            total: self.total,
        }
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::path::member;

    #[test]
    fn test_page_request_validation() {
        assert!(matches!(PageRequest::new(-1, 10), Err(SearchError::InvalidPage(_))));
        assert!(matches!(PageRequest::new(0, 0), Err(SearchError::InvalidPage(_))));
        assert!(matches!(PageRequest::of(-1, 10), Err(SearchError::InvalidPage(_))));

        let request = PageRequest::of(1, 3).unwrap();
        assert_eq!((request.offset(), request.limit()), (3, 3));
        assert!(request.sort().is_unsorted());
    }

    #[test]
    fn test_from_params() {
        let params: PageParams =
            serde_json::from_str(r#"{"page":1,"size":3,"sort":["age,desc"]}"#).unwrap();
        let request = PageRequest::from_params(&params, 20).unwrap();
        assert_eq!(request.offset(), 3);
        assert_eq!(request.sort(), &Sort::by(member::age().desc()));

        let defaults = PageRequest::from_params(&PageParams::default(), 20).unwrap();
        assert_eq!((defaults.offset(), defaults.limit()), (0, 20));

        let bad = PageParams {
            sort: vec!["nope".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            PageRequest::from_params(&bad, 20),
            Err(SearchError::InvalidSort(_))
        ));
    }

    #[test]
    fn test_page_navigation() {
        let page = Page::new(vec![4], 3, 3, 4);
        assert_eq!(page.number(), 1);
        assert_eq!(page.total_pages(), 2);
        assert!(!page.has_next());
        assert!(page.is_last());
        assert!(!page.is_first());

        let first = Page::new(vec![1, 2, 3], 0, 3, 4);
        assert!(first.has_next());
        assert_eq!(first.map(|n| n * 10).into_content(), vec![10, 20, 30]);
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page = Page::new(vec!["a"], 0, 20, 1);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["content"][0], "a");
        assert_eq!(json["total"], 1);
    }
}
