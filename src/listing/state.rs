use crate::listing::{
    filter::{FilterCriteria, FilterField},
    page::{page_count, paginate},
};

/// Filter and page selection of one listing view.
///
/// Changing any criterion moves the view back to page 1. The stored page index
/// is only what the user last picked; [`ListingState::view`] clamps it against
/// the current filtered length so a shrinking collection never shows a blank
/// page while records remain.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingState {
    criteria: FilterCriteria,
    page: usize,
    page_size: usize,
}

/// The visible slice of a listing plus what a pagination control needs.
#[derive(Debug, PartialEq)]
pub struct PageView<'a, T> {
    pub records: &'a [T],
    /// Clamped 1-based page index, 0 when there are no pages.
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
}

impl ListingState {
    pub fn new(page_size: usize) -> Self {
        Self {
            criteria: FilterCriteria::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_criterion(&mut self, field: FilterField, value: impl Into<String>) {
        self.criteria.set(field, value);
        self.page = 1;
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.page = 1;
    }

    pub fn clear_criteria(&mut self) {
        self.set_criteria(FilterCriteria::new());
    }

    pub fn select_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Page index limited to `[1, page_count]` for `total` filtered records.
    pub fn clamped_page(&self, total: usize) -> usize {
        let pages = page_count(total, self.page_size);
        if pages == 0 {
            0
        } else {
            self.page.clamp(1, pages)
        }
    }

    pub fn view<'a, T>(&self, filtered: &'a [T]) -> PageView<'a, T> {
        let page = self.clamped_page(filtered.len());

        PageView {
            records: paginate(filtered, page, self.page_size),
            page,
            page_count: page_count(filtered.len(), self.page_size),
            total: filtered.len(),
        }
    }
}
