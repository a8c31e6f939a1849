//! Export of parliament data to the static JSON files read by the demo.
//!
//! The export reads legislators, bills, subject tags, votes and precomputed
//! embeddings from the parliament SQLite database, derives a few coarse
//! categories with string matching, and writes four JSON files.

pub mod bills;
pub mod classify;
pub mod config;
pub mod embeddings;
pub mod error;
pub mod exporter;
pub mod legislators;
pub mod metadata;
pub mod output;
pub mod source;
pub mod types;

pub use classify::{BillStatus, Chamber, VoteChoice};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use exporter::{run, ExportSummary};
pub use source::Source;
pub use types::{
    Bill, BillEmbedding, EmbeddingDescriptor, ExportStats, Legislator, Metadata, PartySummary,
    RecentVote, RecordId, VoteStats,
};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::config::{Config, ConfigBuilder};
    pub use crate::error::{Error, Result};
    pub use crate::exporter::{run, ExportSummary};
    pub use crate::types::{Bill, BillEmbedding, Legislator, Metadata};
}
