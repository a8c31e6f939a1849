//! Metadata export: party rosters, subject tag list and summary counts.

use crate::config::Config;
use crate::error::Result;
use crate::output::{self, Layout, METADATA_FILE};
use crate::source::Source;
use crate::types::{Bill, EmbeddingDescriptor, ExportStats, Legislator, Metadata, PartySummary};
use indexmap::IndexMap;
use rusqlite::Connection;
use tracing::{debug, info};

/// Cohesion reported for parties listed in the party directory
pub const DIRECTORY_COHESION: f64 = 0.85;

/// Cohesion reported for parties only known from legislator records
pub const UNLISTED_COHESION: f64 = 0.80;

const PARTY_DIRECTORY: &str = "SELECT partido_id, nombre_partido, sigla FROM dim_partidos";

const DISTINCT_SUBJECTS: &str = "SELECT DISTINCT nombre FROM dim_materias ORDER BY nombre";

/// Party summaries keyed by party name.
///
/// Directory parties come first with zero members; each legislator then
/// counts towards the entry whose name equals its party name. A party name
/// missing from the directory gets its own entry with an empty abbreviation.
pub fn party_summaries(
    conn: &Connection,
    legislators: &[Legislator],
) -> Result<IndexMap<String, PartySummary>> {
    let mut stmt = conn.prepare(PARTY_DIRECTORY)?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(1)?, row.get::<_, Option<String>>(2)?))
    })?;

    let mut parties = IndexMap::new();
    for row in rows {
        let (name, abbreviation) = row?;
        parties.insert(
            name,
            PartySummary {
                abbreviation,
                members: 0,
                cohesion: DIRECTORY_COHESION,
            },
        );
    }

    for legislator in legislators {
        match parties.get_mut(&legislator.party) {
            Some(party) => party.members += 1,
            None => {
                debug!(party = %legislator.party, "Party not in directory");
                parties.insert(
                    legislator.party.clone(),
                    PartySummary {
                        abbreviation: Some(String::new()),
                        members: 1,
                        cohesion: UNLISTED_COHESION,
                    },
                );
            }
        }
    }

    Ok(parties)
}

/// Distinct subject tags in alphabetical order, cut to `limit` entries
pub fn subject_list(conn: &Connection, limit: usize) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(DISTINCT_SUBJECTS)?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    let mut subjects = rows.collect::<rusqlite::Result<Vec<_>>>()?;
    subjects.truncate(limit);
    Ok(subjects)
}

/// Assemble the metadata document from the source and the earlier exports
pub fn build(
    conn: &Connection,
    config: &Config,
    legislators: &[Legislator],
    bills: &[Bill],
    embeddings: EmbeddingDescriptor,
) -> Result<Metadata> {
    Ok(Metadata {
        parties: party_summaries(conn, legislators)?,
        subjects: subject_list(conn, config.subject_tag_limit)?,
        stats: ExportStats {
            total_parlamentarios: legislators.len(),
            total_bills: bills.len(),
            period: config.period_label.clone(),
        },
        embeddings,
    })
}

/// Build metadata from the configured database and write `metadata.json`
pub fn export(
    config: &Config,
    legislators: &[Legislator],
    bills: &[Bill],
    embeddings: EmbeddingDescriptor,
) -> Result<Metadata> {
    info!("Exporting metadata");
    let source = Source::open(&config.db_path)?;
    let metadata = build(source.conn(), config, legislators, bills, embeddings)?;
    drop(source);

    let path = output::write_json(&config.output_dir, METADATA_FILE, &metadata, Layout::Pretty)?;
    info!(parties = metadata.parties.len(), path = %path.display(), "Exported metadata");
    Ok(metadata)
}
