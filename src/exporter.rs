use crate::config::Config;
use crate::error::Result;
use crate::{bills, embeddings, legislators, metadata};
use std::fs;
use tracing::info;

/// Record counts from a completed export run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub legislators: usize,
    pub bills: usize,
    pub embeddings: usize,
    pub parties: usize,
}

/// Run the four exporters in order, each against its own connection.
///
/// The first failure aborts the run. Files written by earlier exporters stay
/// on disk, so a failed run can leave a mixed output set.
pub fn run(config: &Config) -> Result<ExportSummary> {
    info!(db = %config.db_path.display(), output = %config.output_dir.display(), "Starting export");
    fs::create_dir_all(&config.output_dir)?;

    let legislators = legislators::export(config)?;
    let bills = bills::export(config)?;
    let (embeddings, descriptor) = embeddings::export(config)?;
    let metadata = metadata::export(config, &legislators, &bills, descriptor)?;

    Ok(ExportSummary {
        legislators: legislators.len(),
        bills: bills.len(),
        embeddings: embeddings.len(),
        parties: metadata.parties.len(),
    })
}
