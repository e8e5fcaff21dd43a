use csv::StringRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub path: String,
    pub timestamp: String,
    pub browser: String,
}

impl LogRecord {
    /// Builds a record from the first three columns of a CSV row.
    /// Rows with fewer columns yield `None`; extra columns are ignored.
    pub fn from_row(row: &StringRecord) -> Option<Self> {
        Some(Self {
            path: row.get(0)?.to_string(),
            timestamp: row.get(1)?.to_string(),
            browser: row.get(2)?.to_string(),
        })
    }
}
