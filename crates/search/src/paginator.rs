//! Result paging
//!
//! Slices an ordered result list into fixed-size pages without copying.

use std::fmt;
use std::slice;

/// One page: a borrowed run of consecutive items
#[derive(Debug)]
pub struct Page<'a, T> {
    items: &'a [T],
}

impl<'a, T> Clone for Page<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Page<'a, T> {}

impl<'a, T> Page<'a, T> {
    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items on this page
    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }

    /// Iterate over the items on this page
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for Page<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Page<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.items {
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

/// A list split into pages of at most `page_size` items
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    pages: Vec<Page<'a, T>>,
}

impl<'a, T> Paginator<'a, T> {
    /// Split `items` into pages; the last page may be shorter
    ///
    /// A `page_size` of zero yields no pages.
    pub fn new(items: &'a [T], page_size: usize) -> Self {
        if page_size == 0 {
            return Paginator { pages: Vec::new() };
        }
        let pages = items.chunks(page_size).map(|items| Page { items }).collect();
        Paginator { pages }
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True if there are no pages
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page at `index`
    pub fn page(&self, index: usize) -> Option<Page<'a, T>> {
        self.pages.get(index).copied()
    }

    /// Iterate over pages in order
    pub fn iter(&self) -> impl Iterator<Item = Page<'a, T>> + '_ {
        self.pages.iter().copied()
    }
}

impl<'a, T> IntoIterator for Paginator<'a, T> {
    type Item = Page<'a, T>;
    type IntoIter = std::vec::IntoIter<Page<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.into_iter()
    }
}

/// Split `items` into pages of `page_size`
///
/// # Example
///
/// ```
/// use scout_search::paginate;
///
/// let results = [1, 2, 3, 4, 5];
/// let pages = paginate(&results, 2);
/// assert_eq!(pages.len(), 3);
/// assert_eq!(pages.page(2).unwrap().as_slice(), &[5]);
/// ```
pub fn paginate<T>(items: &[T], page_size: usize) -> Paginator<'_, T> {
    Paginator::new(items, page_size)
}
