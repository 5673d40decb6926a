use ns_core::Article;

/// Number of articles shown per page.
pub const PAGE_SIZE: usize = 10;

/// Pagination over the articles held for the current search.
///
/// `current_page` is 1-indexed and stays within `1..=total_pages()` whenever
/// there is at least one page. Only [`PageState::load`] can move back to the
/// first page in one step or change the page count.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    articles: Vec<Article>,
    total_count: usize,
    current_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl PageState {
    pub fn new() -> Self {
        Self {
            articles: Vec::new(),
            total_count: 0,
            current_page: 1,
        }
    }

    /// Replaces the held articles and reported total, back on page 1.
    pub fn load(&mut self, articles: Vec<Article>, total_count: usize) {
        self.articles = articles;
        self.total_count = total_count;
        self.current_page = 1;
    }

    /// Articles on the current page. Only held articles are sliced, so a
    /// page past the end of the held data is short or empty.
    pub fn current_slice(&self) -> &[Article] {
        let start = (self.current_page - 1) * PAGE_SIZE;
        let end = (self.current_page * PAGE_SIZE).min(self.articles.len());
        if start >= end {
            return &[];
        }
        &self.articles[start..end]
    }

    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(PAGE_SIZE)
    }

    pub fn go_next(&mut self) {
        if self.has_next() {
            self.current_page += 1;
        }
    }

    pub fn go_previous(&mut self) {
        if self.has_previous() {
            self.current_page -= 1;
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn held_len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
