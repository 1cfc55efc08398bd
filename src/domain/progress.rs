use log::info;

/// Track progress of a paged tournament search
pub struct FetchProgress {
    expected: Option<usize>,
    pages: usize,
    collected: usize,
}

impl FetchProgress {
    pub fn new() -> Self {
        Self {
            expected: None,
            pages: 0,
            collected: 0,
        }
    }

    /// Record one page; `reported` is the total count the API announced
    pub fn record_page(&mut self, page_len: usize, reported: usize) {
        self.pages += 1;
        self.collected += page_len;
        self.expected = Some(reported);
        self.log_progress();
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    pub fn collected(&self) -> usize {
        self.collected
    }

    pub fn is_complete(&self) -> bool {
        self.expected.is_some_and(|expected| self.collected >= expected)
    }

    fn log_progress(&self) {
        match self.expected {
            Some(expected) => info!(
                "  → Page {}: {}/{} tournaments",
                self.pages, self.collected, expected
            ),
            None => info!("  → Page {}: {} tournaments", self.pages, self.collected),
        }
    }
}

impl Default for FetchProgress {
    fn default() -> Self {
        Self::new()
    }
}
