//! Pagination
//!
//! Pages are 1-indexed. The current page is clamped to
//! `[1, max(1, total_pages)]` whenever it moves or the row count changes.

use shared::{AppError, AppResult, ErrorCode, PaginatedResponse};

/// Page sizes offered by the table
pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Check that `size` is one of [`PAGE_SIZES`]
pub fn validate_page_size(size: usize) -> AppResult<usize> {
    if PAGE_SIZES.contains(&size) {
        Ok(size)
    } else {
        Err(AppError::with_message(
            ErrorCode::InvalidPageSize,
            format!("Page size must be one of {:?}, got {}", PAGE_SIZES, size),
        )
        .with_detail("pageSize", size))
    }
}

/// `ceil(total / page_size)`
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pager {
    pub fn new(page_size: usize) -> AppResult<Self> {
        Ok(Self {
            page: 1,
            page_size: validate_page_size(page_size)?,
        })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Change the page size and go back to page 1
    pub fn set_page_size(&mut self, size: usize) -> AppResult<()> {
        self.page_size = validate_page_size(size)?;
        self.page = 1;
        Ok(())
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total_pages(total, self.page_size)
    }

    fn last_page(&self, total: usize) -> usize {
        self.total_pages(total).max(1)
    }

    pub fn go_to(&mut self, page: usize, total: usize) {
        self.page = page.clamp(1, self.last_page(total));
    }

    pub fn first(&mut self) {
        self.page = 1;
    }

    pub fn previous(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next(&mut self, total: usize) {
        self.go_to(self.page + 1, total);
    }

    pub fn last(&mut self, total: usize) {
        self.page = self.last_page(total);
    }

    /// Re-clamp after the row count changed
    pub fn clamp(&mut self, total: usize) {
        self.go_to(self.page, total);
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page < self.total_pages(total)
    }

    /// Rows of the current page: `[(page-1)*size, page*size)`
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.slice_bounds(items.len())]
    }

    pub fn paginate<T: Clone>(&self, items: &[T]) -> PaginatedResponse<T> {
        PaginatedResponse::new(
            self.slice(items).to_vec(),
            items.len() as u64,
            self.page as u32,
            self.page_size as u32,
        )
    }

    /// "11-20 of 95"
    pub fn range_label(&self, total: usize) -> String {
        let rows = self.slice_bounds(total);
        if rows.is_empty() {
            return format!("0-0 of {}", total);
        }
        format!("{}-{} of {}", rows.start + 1, rows.end, total)
    }

    fn slice_bounds(&self, total: usize) -> std::ops::Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(total);
        start..(start + self.page_size).min(total)
    }
}
