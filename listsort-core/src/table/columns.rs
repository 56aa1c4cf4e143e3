use csv::{Reader, ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::Path;

use crate::error::{Result, SortError};

const BOM: char = '\u{feff}';

/// Open a comma-delimited table with a header row. Short rows are tolerated.
pub(crate) fn open_table(path: &Path) -> Result<Reader<File>> {
    let f = File::open(path)?;
    Ok(ReaderBuilder::new().flexible(true).from_reader(f))
}

/// Position of each wanted column in `headers`.
pub(crate) fn locate<const N: usize>(
    headers: &StringRecord,
    table: &str,
    wanted: [&str; N],
) -> Result<[usize; N]> {
    let mut out = [0usize; N];
    for (slot, name) in out.iter_mut().zip(wanted) {
        *slot = headers
            .iter()
            .position(|h| h.trim_start_matches(BOM) == name)
            .ok_or_else(|| SortError::MissingColumn {
                table: table.to_string(),
                column: name.to_string(),
            })?;
    }
    Ok(out)
}

pub(crate) fn field(rec: &StringRecord, idx: usize) -> &str {
    rec.get(idx).unwrap_or("")
}

pub(crate) fn table_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
