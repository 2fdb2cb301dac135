//! 1-based page slicing over an ordered collection.

use std::num::NonZeroUsize;

/// One page of a larger collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// The requested page number (not clamped).
    pub page: usize,
    /// `ceil(len / page_size)`, zero for an empty collection.
    pub total_pages: usize,
}

impl<'a, T> Page<'a, T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether Previous/Next controls are worth rendering at all.
    pub fn shows_pager(&self) -> bool {
        self.total_pages > 1
    }
}

/// Slice out page `page` of `items`.
///
/// A page past the end yields an empty slice rather than an error; keeping
/// `page` in range is the caller's job (see [`clamp_page`]).
pub fn paginate<T>(items: &[T], page_size: NonZeroUsize, page: NonZeroUsize) -> Page<'_, T> {
    let size = page_size.get();
    let total_pages = items.len().div_ceil(size);

    let start = (page.get() - 1).saturating_mul(size);
    let slice = if start >= items.len() {
        &items[..0]
    } else {
        let end = start.saturating_add(size).min(items.len());
        &items[start..end]
    };

    Page {
        items: slice,
        page: page.get(),
        total_pages,
    }
}

/// Clamp `page` into `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> NonZeroUsize {
    let clamped = page.clamp(1, total_pages.max(1));
    NonZeroUsize::new(clamped).unwrap_or(NonZeroUsize::MIN)
}
