use csv::{StringRecord, StringRecordsIntoIter, Terminator, WriterBuilder};
use std::fs::File;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::domain::{CategorizedRow, MappingRow};
use crate::error::{Result, SortError};
use crate::table::columns::{field, locate, open_table, table_name};

/// Columns the mapping table must carry, in any order.
pub const MAPPING_COLUMNS: [&str; 5] = [
    "ilan_id",
    "ilan_baslik",
    "gorsel_sira",
    "gorsel_dosya",
    "orijinal_dosya",
];

/// Header of the rewritten mapping table.
pub const OUTPUT_COLUMNS: [&str; 6] = [
    "ilan_id",
    "ilan_baslik",
    "kategori",
    "gorsel_sira",
    "gorsel_dosya",
    "orijinal_dosya",
];

/// Streams mapping rows; each item fails on a bad record or a non-integer `ilan_id`.
pub struct MappingReader {
    table: String,
    cols: [usize; 5],
    records: StringRecordsIntoIter<File>,
}

impl MappingReader {
    pub fn open(path: &Path) -> Result<Self> {
        let table = table_name(path);
        let mut rdr = open_table(path)?;
        let cols = locate(rdr.headers()?, &table, MAPPING_COLUMNS)?;
        Ok(Self {
            table,
            cols,
            records: rdr.into_records(),
        })
    }

    fn parse(&self, rec: &StringRecord) -> Result<MappingRow> {
        let [id, title, sequence, file, original] = self.cols;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);
        let raw = field(rec, id);
        let listing_id = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| SortError::InvalidListingId {
                table: self.table.clone(),
                line,
                value: raw.to_string(),
            })?;
        Ok(MappingRow {
            line,
            listing_id,
            listing_id_raw: raw.to_string(),
            title: field(rec, title).to_string(),
            sequence: field(rec, sequence).to_string(),
            file: field(rec, file).to_string(),
            original: field(rec, original).to_string(),
        })
    }
}

impl Iterator for MappingReader {
    type Item = Result<MappingRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let rec = match self.records.next()? {
            Ok(rec) => rec,
            Err(e) => return Some(Err(e.into())),
        };
        Some(self.parse(&rec))
    }
}

/// Replace the mapping table at `path` with `rows`, keeping an existing table's
/// permissions. The header is always written.
pub fn write_mapping(path: &Path, rows: &[CategorizedRow]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let tmp = NamedTempFile::new_in(dir)?;
    {
        let mut w = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(tmp.as_file());
        w.write_record(OUTPUT_COLUMNS)?;
        for row in rows {
            w.serialize(row)?;
        }
        w.flush()?;
    }
    if let Ok(md) = std::fs::metadata(path) {
        tmp.as_file().set_permissions(md.permissions())?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
