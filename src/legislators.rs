//! Legislator export: active legislators with vote tallies and recent history.

use crate::classify::{truncate_title, VoteChoice};
use crate::config::Config;
use crate::error::Result;
use crate::output::{self, Layout, LEGISLATORS_FILE};
use crate::source::Source;
use crate::types::{Legislator, RecentVote, RecordId, VoteStats};
use rusqlite::{params, Connection};
use tracing::{debug, info};

const ACTIVE_LEGISLATORS: &str = r#"
SELECT DISTINCT
    p.mp_uid,
    p.nombre_completo,
    COALESCE(d.nombre_partido, 'Independiente') AS partido,
    p.url_foto,
    p.profesion
FROM dim_parlamentario p
JOIN votos_parlamentario vp ON p.mp_uid = vp.mp_uid
JOIN sesiones_votacion sv ON vp.sesion_votacion_id = sv.sesion_votacion_id
LEFT JOIN dim_partidos d ON p.partido_militante_actual_id = d.partido_id
WHERE sv.fecha >= ?1
ORDER BY p.nombre_completo
"#;

const VOTE_COUNTS: &str = r#"
SELECT voto, COUNT(*)
FROM votos_parlamentario
WHERE mp_uid = ?1
GROUP BY voto
"#;

const RECENT_VOTES: &str = r#"
SELECT b.bill_id, b.titulo, vp.voto, sv.fecha
FROM votos_parlamentario vp
JOIN sesiones_votacion sv ON vp.sesion_votacion_id = sv.sesion_votacion_id
JOIN bills b ON sv.bill_id = b.bill_id
WHERE vp.mp_uid = ?1
ORDER BY sv.fecha DESC
LIMIT ?2
"#;

const DEFAULT_PROFESSION: &str = "No especificada";

/// Load every legislator who voted on or after the configured cutoff,
/// ordered by display name.
pub fn load(conn: &Connection, config: &Config) -> Result<Vec<Legislator>> {
    let mut stmt = conn.prepare(ACTIVE_LEGISLATORS)?;
    let rows = stmt.query_map(params![config.vote_cutoff], |row| {
        let profession: Option<String> = row.get(4)?;
        Ok(Legislator {
            id: row.get(0)?,
            name: row.get(1)?,
            party: row.get(2)?,
            photo: row.get(3)?,
            profession: profession
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_PROFESSION.to_string()),
            vote_stats: VoteStats::default(),
            recent_votes: Vec::new(),
        })
    })?;
    let mut legislators = rows.collect::<rusqlite::Result<Vec<_>>>()?;

    info!(count = legislators.len(), "Getting vote stats");
    for legislator in &mut legislators {
        legislator.vote_stats = vote_stats(conn, &legislator.id)?;
        legislator.recent_votes = recent_votes(conn, &legislator.id, config)?;
        debug!(
            id = %legislator.id,
            total = legislator.vote_stats.total,
            recent = legislator.recent_votes.len(),
            "Loaded legislator votes"
        );
    }

    Ok(legislators)
}

/// Tally a legislator's votes by category. Labels that match no category
/// are left out of every count, including the total.
pub fn vote_stats(conn: &Connection, mp_uid: &RecordId) -> Result<VoteStats> {
    let mut stmt = conn.prepare_cached(VOTE_COUNTS)?;
    let rows = stmt.query_map(params![mp_uid], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut stats = VoteStats::default();
    for row in rows {
        let (label, count) = row?;
        let count = count.max(0) as u64;
        // Labels differing only in case fall in one category and are summed, not overwritten
        match VoteChoice::classify(&label) {
            Some(VoteChoice::InFavor) => stats.a_favor += count,
            Some(VoteChoice::Against) => stats.en_contra += count,
            Some(VoteChoice::Abstain) => stats.abstencion += count,
            Some(VoteChoice::Paired) => stats.pareo += count,
            None => debug!(label = %label, count, "Skipping unrecognized vote label"),
        }
    }
    stats.total = stats.a_favor + stats.en_contra + stats.abstencion + stats.pareo;
    Ok(stats)
}

/// Most recent votes first, capped at `config.recent_vote_limit`
pub fn recent_votes(conn: &Connection, mp_uid: &RecordId, config: &Config) -> Result<Vec<RecentVote>> {
    let mut stmt = conn.prepare_cached(RECENT_VOTES)?;
    let limit = i64::try_from(config.recent_vote_limit).unwrap_or(i64::MAX);
    let rows = stmt.query_map(params![mp_uid, limit], |row| {
        let title: String = row.get(1)?;
        let vote: String = row.get(2)?;
        Ok(RecentVote {
            bill_id: row.get(0)?,
            title: truncate_title(&title, config.title_max_chars),
            vote: vote.to_lowercase(),
            date: row.get(3)?,
        })
    })?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// Load legislators from the configured database and write `diputados.json`
pub fn export(config: &Config) -> Result<Vec<Legislator>> {
    info!("Exporting legislators");
    let source = Source::open(&config.db_path)?;
    let legislators = load(source.conn(), config)?;
    drop(source);

    let path = output::write_json(&config.output_dir, LEGISLATORS_FILE, &legislators, Layout::Pretty)?;
    info!(count = legislators.len(), path = %path.display(), "Exported legislators");
    Ok(legislators)
}
