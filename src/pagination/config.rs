/// Configuration for index-based paged requests
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    pub page_size: usize,
    pub max_pages: Option<usize>,
}

impl PaginationConfig {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            max_pages: None,
        }
    }

    pub fn with_max_pages(mut self, max: usize) -> Self {
        self.max_pages = Some(max);
        self
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new(50)
    }
}
