use serde::Serialize;

/// One data row of the mapping table as read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappingRow {
    pub line: u64,
    pub listing_id: i64,
    pub listing_id_raw: String,
    pub title: String,
    pub sequence: String,
    pub file: String,
    pub original: String,
}

/// One data row of the rewritten mapping table. Field order is the column order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategorizedRow {
    #[serde(rename = "ilan_id")]
    pub listing_id: String,
    #[serde(rename = "ilan_baslik")]
    pub title: String,
    #[serde(rename = "kategori")]
    pub category: String,
    #[serde(rename = "gorsel_sira")]
    pub sequence: String,
    #[serde(rename = "gorsel_dosya")]
    pub file: String,
    #[serde(rename = "orijinal_dosya")]
    pub original: String,
}

impl CategorizedRow {
    pub fn from_row(row: MappingRow, category: &str) -> Self {
        Self {
            listing_id: row.listing_id_raw,
            title: row.title,
            category: category.to_string(),
            sequence: row.sequence,
            file: row.file,
            original: row.original,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub listings: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub images: usize,
}
