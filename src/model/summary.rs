/// Outcome of a row-tolerant load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows inserted
    pub loaded: u64,
    /// Rows dropped after a row-level failure
    pub skipped: u64,
}

/// Row counts of a full run, one field per dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub categories: u64,
    pub customers: LoadReport,
    pub products: LoadReport,
    pub warehouses: u64,
    pub calendar_days: u64,
}
