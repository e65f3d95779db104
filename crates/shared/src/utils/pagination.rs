/// Total number of pages for a collection, never less than 1.
pub fn total_pages(total_items: i64, page_size: i32) -> i32 {
    if page_size <= 0 {
        return 1;
    }
    ((total_items.max(0) as u64).div_ceil(page_size as u64) as i32).max(1)
}

/// Clamp a requested page into `[1, total_pages]` instead of erroring on
/// out-of-range input.
pub fn clamp_page(requested: i32, total_pages: i32) -> i32 {
    requested.clamp(1, total_pages.max(1))
}

/// Compact page list for the storefront pager; `None` marks an ellipsis.
/// Up to 7 pages are listed in full, beyond that a window of one page around
/// the current one plus the first and last page.
pub fn build_pagination_items(current_page: i32, total_pages: i32) -> Vec<Option<i32>> {
    if total_pages <= 7 {
        return (1..=total_pages).map(Some).collect();
    }

    let mut items: Vec<Option<i32>> = vec![Some(1)];
    let window_start = (current_page - 1).max(2);
    let window_end = (current_page + 1).min(total_pages - 1);

    if window_start > 2 {
        items.push(None);
    }

    items.extend((window_start..=window_end).map(Some));

    if window_end < total_pages - 1 {
        items.push(None);
    }

    items.push(Some(total_pages));
    items
}
