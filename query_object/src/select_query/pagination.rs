//! OFFSET / FETCH NEXT pagination

/// Pagination configuration; zero means the clause is omitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// `OFFSET <n> ROW[S]`, or `None` when no offset is set
    pub fn offset_clause(&self) -> Option<String> {
        (self.offset > 0)
            .then(|| format!("OFFSET {} {}", self.offset, row_label(self.offset)))
    }

    /// `FETCH NEXT <n> ROW[S] ONLY`, or `None` when no limit is set
    pub fn fetch_clause(&self) -> Option<String> {
        (self.limit > 0).then(|| {
            format!("FETCH NEXT {} {} ONLY", self.limit, row_label(self.limit))
        })
    }
}

fn row_label(count: u64) -> &'static str {
    if count == 1 {
        "ROW"
    } else {
        "ROWS"
    }
}
