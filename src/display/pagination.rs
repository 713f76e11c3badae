/// Rows shown per page in the browse loop.
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Scroll position over a materialized result.
///
/// The first row is 1-based. Advancing and retreating move by whole pages
/// and clamp so the final page is never empty unless the table itself is.
#[derive(Debug, Clone)]
pub struct BrowseWindow {
    first_row: usize,
    page_size: usize,
    total_rows: usize,
}

impl BrowseWindow {
    pub fn new(total_rows: usize, page_size: usize) -> Self {
        Self {
            first_row: 1,
            page_size: page_size.max(1),
            total_rows,
        }
    }

    pub fn first_row(&self) -> usize {
        self.first_row
    }

    /// Largest offset that still shows a (possibly partial) page.
    pub fn max_first_row(&self) -> usize {
        self.total_rows.saturating_sub(self.page_size) + 1
    }

    pub fn advance(&mut self) {
        self.first_row = (self.first_row + self.page_size).min(self.max_first_row());
    }

    pub fn retreat(&mut self) {
        self.first_row = self.first_row.saturating_sub(self.page_size).max(1);
    }
}
