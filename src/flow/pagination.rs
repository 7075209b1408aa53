//! Page arithmetic for search results.
use crate::constants::MAX_PAGES;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub current: u32,
    pub total_pages: u64,
    pub prev: Option<u32>,
    pub next: Option<u32>,
}

/// `max(1, ceil(total / page_size))`. A zero page size is treated as one.
pub fn total_pages(total: u64, page_size: u32) -> u64 {
    let size = u64::from(page_size.max(1));
    total.div_ceil(size).max(1)
}

pub fn paginate(total: u64, page_size: u32, current: u32) -> Pager {
    let current = current.max(1);
    let total_pages = total_pages(total, page_size);
    let prev = (current > 1).then(|| current - 1);
    let next = (u64::from(current) < total_pages && current < MAX_PAGES).then(|| current + 1);
    Pager {
        current,
        total_pages,
        prev,
        next,
    }
}
