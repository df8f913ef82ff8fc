/// Records on page `page_index` (1-based) when `filtered` is split into pages
/// of `page_size`. Indexes outside the available pages, index 0 and a size of 0
/// all yield an empty page.
pub fn paginate<T>(filtered: &[T], page_index: usize, page_size: usize) -> &[T] {
    if page_index == 0 || page_size == 0 {
        return &[];
    }

    let start = match (page_index - 1).checked_mul(page_size) {
        Some(start) if start < filtered.len() => start,
        _ => return &[],
    };
    let end = start.saturating_add(page_size).min(filtered.len());

    &filtered[start..end]
}

/// Number of pages needed for `len` records, 0 when there are no records.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }

    len.div_ceil(page_size)
}
