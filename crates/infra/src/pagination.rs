/// Largest page a list query may return; larger sizes are clamped.
pub const MAX_PAGE_SIZE: i64 = 100;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitOffset {
    pub limit: i64,
    pub offset: i64,
}

impl Default for LimitOffset {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl LimitOffset {
    /// Translate a `size`/`page` pair into SQL-style limit and offset.
    /// Negative values are rejected; `size` is clamped to [`MAX_PAGE_SIZE`].
    pub fn from_page(size: i64, page: i64) -> Result<Self, String> {
        if size < 0 {
            return Err(format!("size must not be negative, got {size}"));
        }
        if page < 0 {
            return Err(format!("page must not be negative, got {page}"));
        }
        let limit = size.min(MAX_PAGE_SIZE);
        Ok(Self {
            limit,
            offset: limit.saturating_mul(page),
        })
    }
}
