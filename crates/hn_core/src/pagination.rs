use std::ops::Range;

/// Index range of the ID list shown on `current_page`, clamped to `total`.
pub fn page_window(current_page: usize, page_size: usize, total: usize) -> Range<usize> {
    let start = current_page.saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    start..end
}

pub fn max_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

pub fn has_next_page(current_page: usize, page_size: usize, total: usize) -> bool {
    current_page
        .saturating_add(1)
        .saturating_mul(page_size)
        < total
}

/// Page index that keeps the first visible story in view after a page-size change.
pub fn corrected_page(current_page: usize, old_page_size: usize, new_page_size: usize) -> usize {
    if new_page_size == 0 {
        return 0;
    }
    current_page.saturating_mul(old_page_size) / new_page_size
}
