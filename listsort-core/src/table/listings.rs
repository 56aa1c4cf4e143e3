use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::domain::StatusCount;
use crate::error::Result;
use crate::table::columns::{field, locate, open_table, table_name};

/// Listing statuses keyed by 1-based row ordinal.
#[derive(Clone, Debug, Default)]
pub struct ListingIndex {
    statuses: Vec<String>,
    counts: Vec<StatusCount>,
}

impl ListingIndex {
    /// Read the listings table; the n-th data row becomes listing `n`.
    pub fn read(path: &Path, status_column: &str) -> Result<Self> {
        let table = table_name(path);
        let mut rdr = open_table(path)?;
        let [status_idx] = locate(rdr.headers()?, &table, [status_column])?;

        let mut statuses = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            statuses.push(field(&rec, status_idx).to_string());
        }
        debug!(table = %table, listings = statuses.len(), "listings loaded");
        Ok(Self::from_statuses(statuses))
    }

    pub fn from_statuses<I, S>(statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let statuses: Vec<String> = statuses.into_iter().map(Into::into).collect();
        let mut counts: Vec<StatusCount> = Vec::new();
        let mut slot: HashMap<&str, usize> = HashMap::new();
        for s in &statuses {
            match slot.get(s.as_str()) {
                Some(&i) => counts[i].listings += 1,
                None => {
                    slot.insert(s.as_str(), counts.len());
                    counts.push(StatusCount {
                        status: s.clone(),
                        listings: 1,
                    });
                }
            }
        }
        Self { statuses, counts }
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn status(&self, listing_id: i64) -> Option<&str> {
        usize::try_from(listing_id)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| self.statuses.get(i))
            .map(String::as_str)
    }

    /// Status of `listing_id`, or `fallback` when it has none.
    pub fn category<'a>(&'a self, listing_id: i64, fallback: &'a str) -> &'a str {
        self.status(listing_id).unwrap_or(fallback)
    }

    /// Listings per status, in order of first appearance.
    pub fn status_counts(&self) -> &[StatusCount] {
        &self.counts
    }
}
