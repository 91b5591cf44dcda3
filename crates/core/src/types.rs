/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// 1-based row number as shown to the operator.
pub type RowNumber = usize;
