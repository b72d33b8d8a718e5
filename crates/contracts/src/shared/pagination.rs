use serde::{Deserialize, Serialize};

/// Paginated list envelope returned by `/customers/list` and `/products/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub pages: u32,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Requested page. The API is 1-based and caps `limit` at 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub const MAX_LIMIT: u32 = 100;

    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, Self::MAX_LIMIT),
        }
    }

    pub fn next(self) -> Self {
        Self::new(self.page + 1, self.limit)
    }

    pub fn prev(self) -> Self {
        Self::new(self.page.saturating_sub(1), self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_is_clamped() {
        assert_eq!(PageRequest::new(0, 500), PageRequest { page: 1, limit: 100 });
        assert_eq!(PageRequest::default().prev().page, 1);
        assert_eq!(PageRequest::default().next().page, 2);
    }

    #[test]
    fn test_page_navigation_flags() {
        let page: Page<u32> = Page { items: vec![], total: 45, page: 2, limit: 20, pages: 3 };
        assert!(page.has_next());
        assert!(page.has_prev());
    }
}
