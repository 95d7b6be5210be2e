//! Pure pagination over in-memory lists.
//!
//! Every list screen recomputes its visible slice from the full
//! filtered collection, the 1-indexed page number, and a fixed page
//! size. No state lives here.

/// Returns the slice for the requested 1-indexed page.
///
/// A page of 0, a page size of 0, or a page past the end of the
/// collection yields an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = usize::min(start + page_size, items.len());
    &items[start..end]
}

/// Number of pages needed to show `len` items, `page_size` at a time.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}
