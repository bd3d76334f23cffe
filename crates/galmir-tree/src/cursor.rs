/// Start index of the first page. The service counts from 1.
pub const FIRST_START: u64 = 1;

/// Pagination state of one listing.
///
/// The total is unknown until the first page arrives, which forces at least
/// one fetch. After that the first page's total is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    start:  u64,
    total:  Option<u64>,
    closed: bool,
}

/// What [`Cursor::advance`] did with a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The cursor moved past the page.
    Moved,
    /// The page was empty while items were still expected; the listing is
    /// closed instead of requesting the same start forever.
    Stalled,
}

impl Default for Cursor {
    fn default() -> Self { Self::new() }
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            start:  FIRST_START,
            total:  None,
            closed: false,
        }
    }

    pub fn start(&self) -> u64 { self.start }

    pub fn total(&self) -> Option<u64> { self.total }

    /// Items consumed so far.
    pub fn consumed(&self) -> u64 { self.start - FIRST_START }

    /// Done once the items consumed (`start - 1`) reach the total, or after a
    /// stall.
    pub fn is_exhausted(&self) -> bool {
        self.closed || self.total.is_some_and(|total| self.consumed() >= total)
    }

    /// Record a successfully fetched page of `count` items out of `total`.
    pub fn advance(&mut self, count: u64, total: u64) -> Advance {
        let total = *self.total.get_or_insert(total);

        if count == 0 && self.consumed() < total {
            self.closed = true;
            return Advance::Stalled;
        }

        self.start = self.start.saturating_add(count);
        Advance::Moved
    }
}
