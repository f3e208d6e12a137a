// src/record.rs

/// One extracted product. Immutable once appended to a run's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub platform: String,
    pub name: String,
    pub price: String,
    /// Trimmed full text of the resolved container. Doubles as the dedup
    /// key and as a diagnostic aid when a row looks off.
    pub raw_text: String,
    pub source_url: String,
}

/// Canonical export column order.
pub const COLUMNS: [&str; 5] = ["Platform", "Name", "Price", "Full Text", "URL"];

impl ProductRecord {
    pub fn headers() -> Vec<String> {
        COLUMNS.iter().map(|c| s!(*c)).collect()
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.platform.clone(),
            self.name.clone(),
            self.price.clone(),
            self.raw_text.clone(),
            self.source_url.clone(),
        ]
    }
}

pub fn to_rows(records: &[ProductRecord]) -> Vec<Vec<String>> {
    records.iter().map(ProductRecord::to_row).collect()
}
