use serde::{Deserialize, Serialize};

/// Listing metadata. `page` is the number of pages the result set spans
/// (`ceil(total / limit)`), not the index of the page returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

impl PageMeta {
    /// `limit == 0` means the listing was unbounded, which is a single page.
    /// An empty result still reports one page.
    pub fn new(total: u64, limit: u64) -> Self {
        let page = if limit == 0 {
            1
        } else {
            total.div_ceil(limit).max(1)
        };

        Self { page, limit, total }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub meta: PageMeta,
    pub data: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: u64, limit: u64) -> Self {
        Self {
            meta: PageMeta::new(total, limit),
            data,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            meta: self.meta,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}
