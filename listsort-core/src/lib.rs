#![forbid(unsafe_code)]

pub mod census;
pub mod domain;
pub mod error;
pub mod fsops;
pub mod layout;
pub mod options;
pub mod sort;
pub mod stats;

pub mod table {
    pub(crate) mod columns;
    pub mod listings;
    pub mod mapping;
}

// Re-exports: stable API surface
pub use census::census;
pub use options::SortOptions;
pub use sort::sort;
pub use stats::Summary;
