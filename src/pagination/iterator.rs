use super::config::PaginationConfig;

/// Walks `indexStart`/`indexCount` windows over a result set
pub struct PageIterator {
    current_page: usize,
    config: PaginationConfig,
}

impl PageIterator {
    pub fn new(config: PaginationConfig) -> Self {
        Self {
            current_page: 0,
            config,
        }
    }

    /// Zero-based page number
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn index_start(&self) -> usize {
        self.current_page * self.config.page_size
    }

    pub fn index_count(&self) -> usize {
        self.config.page_size
    }

    pub fn has_reached_max(&self) -> bool {
        self.config
            .max_pages
            .is_some_and(|max| self.current_page >= max)
    }

    pub fn advance(&mut self) {
        self.current_page += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_windows() {
        let mut pages = PageIterator::new(PaginationConfig::new(50));
        assert_eq!((pages.index_start(), pages.index_count()), (0, 50));

        pages.advance();
        pages.advance();
        assert_eq!(pages.index_start(), 100);
    }

    #[test]
    fn test_max_pages() {
        let mut pages = PageIterator::new(PaginationConfig::new(10).with_max_pages(2));
        assert!(!pages.has_reached_max());

        pages.advance();
        assert!(!pages.has_reached_max());

        pages.advance();
        assert!(pages.has_reached_max());
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let pages = PageIterator::new(PaginationConfig::new(0));
        assert_eq!(pages.index_count(), 1);
    }
}
