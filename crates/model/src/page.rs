use serde::{Deserialize, Serialize};

/// 1-based inclusive request bounds for one page of a remote collection.
///
/// The upstream service is addressed as `[start, last]` and clamps the slice
/// to the rows that actually exist, so the final page of a collection may be
/// shorter than `last - start + 1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageBounds {
    pub start: u32,
    pub last: u32,
}

impl PageBounds {
    /// Bounds of the very first request: `[1, step]`.
    pub fn first(step: u32) -> Self {
        Self {
            start: 1,
            last: step,
        }
    }

    /// Bounds of the following page, both ends advanced by `step`.
    pub fn next(self, step: u32) -> Self {
        Self {
            start: self.start + step,
            last: self.last + step,
        }
    }

    /// Number of requests needed to cover `total` records at `step` per page.
    ///
    /// An empty collection still costs one request: the total is only known
    /// from the first response.
    pub fn requests_for(total: u32, step: u32) -> u32 {
        total.div_ceil(step).max(1)
    }
}

/// One fetched slice of the remote collection.
///
/// Carries the service-reported total alongside the rows so callers can
/// track overall progress without extra state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub bounds: PageBounds,
    pub total_count: u32,
    pub records: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(bounds: PageBounds, total_count: u32, records: Vec<T>) -> Self {
        Self {
            bounds,
            total_count,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when this page's bounds reach or pass the reported total,
    /// i.e. no further request is needed.
    pub fn is_final(&self) -> bool {
        self.bounds.last >= self.total_count
    }
}

#[cfg(test)]
mod tests {
    use super::{Page, PageBounds};

    #[test]
    fn bounds_advance_by_step() {
        let first = PageBounds::first(1000);
        assert_eq!(first, PageBounds { start: 1, last: 1000 });

        let second = first.next(1000);
        assert_eq!(second, PageBounds { start: 1001, last: 2000 });

        let third = second.next(1000);
        assert_eq!(third, PageBounds { start: 2001, last: 3000 });
    }

    #[test]
    fn request_counts() {
        assert_eq!(PageBounds::requests_for(2500, 1000), 3);
        assert_eq!(PageBounds::requests_for(1000, 1000), 1);
        assert_eq!(PageBounds::requests_for(1001, 1000), 2);
        // The total is only learned from the first response.
        assert_eq!(PageBounds::requests_for(0, 1000), 1);
    }

    #[test]
    fn final_page_detection() {
        let mid: Page<u32> = Page::new(PageBounds { start: 1, last: 1000 }, 2500, vec![]);
        assert!(!mid.is_final());

        let last: Page<u32> = Page::new(PageBounds { start: 2001, last: 3000 }, 2500, vec![]);
        assert!(last.is_final());

        let empty: Page<u32> = Page::new(PageBounds::first(1000), 0, vec![]);
        assert!(empty.is_final());
    }
}
