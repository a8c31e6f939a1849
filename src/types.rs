use indexmap::IndexMap;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier as stored in the source database.
///
/// Legislator and bill ids may be INTEGER or TEXT columns; they are emitted
/// with the same JSON type they were stored with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl FromSql for RecordId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Integer(i) => Ok(RecordId::Int(i)),
            ValueRef::Text(_) => String::column_result(value).map(RecordId::Text),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

impl ToSql for RecordId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            RecordId::Int(i) => i.to_sql(),
            RecordId::Text(s) => s.to_sql(),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(i) => write!(f, "{}", i),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// A legislator as written to `diputados.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legislator {
    pub id: RecordId,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Party name, or "Independiente" when unaffiliated
    #[serde(rename = "partido")]
    pub party: String,
    #[serde(rename = "foto")]
    pub photo: Option<String>,
    #[serde(rename = "profesion")]
    pub profession: String,
    #[serde(rename = "estadisticas_voto")]
    pub vote_stats: VoteStats,
    #[serde(rename = "votaciones_recientes")]
    pub recent_votes: Vec<RecentVote>,
}

/// Vote tallies for one legislator.
///
/// `total` is the sum of the four categories, so votes with an unrecognized
/// label are not part of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteStats {
    pub total: u64,
    pub a_favor: u64,
    pub en_contra: u64,
    pub abstencion: u64,
    pub pareo: u64,
}

/// One entry of a legislator's recent vote history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentVote {
    pub bill_id: RecordId,
    #[serde(rename = "titulo")]
    pub title: String,
    /// Lower-cased vote label as stored
    #[serde(rename = "voto")]
    pub vote: String,
    #[serde(rename = "fecha")]
    pub date: Option<String>,
}

/// A bill as written to `bills.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: RecordId,
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    /// Falls back to the title when the stored summary is empty
    #[serde(rename = "resumen")]
    pub summary: Option<String>,
    #[serde(rename = "fecha")]
    pub date: Option<String>,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "tipo")]
    pub initiative: String,
    #[serde(rename = "camara")]
    pub chamber: String,
    /// Subject tags in join order, duplicates included
    #[serde(rename = "materias")]
    pub subjects: Vec<String>,
}

/// A bill's precomputed embedding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillEmbedding {
    #[serde(rename = "billId")]
    pub bill_id: RecordId,
    /// Vector elements exactly as stored (`1` stays `1`, `null` stays `null`)
    pub embedding: Vec<serde_json::Value>,
}

/// Model description recorded once for the whole embedding export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingDescriptor {
    pub model: String,
    pub dimension: usize,
    pub count: usize,
}

/// Per-party entry in metadata, keyed by party name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartySummary {
    #[serde(rename = "sigla")]
    pub abbreviation: Option<String>,
    #[serde(rename = "miembros")]
    pub members: u64,
    pub cohesion: f64,
}

/// Summary counts in metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportStats {
    pub total_parlamentarios: usize,
    pub total_bills: usize,
    #[serde(rename = "periodo")]
    pub period: String,
}

/// Contents of `metadata.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "partidos")]
    pub parties: IndexMap<String, PartySummary>,
    #[serde(rename = "materias")]
    pub subjects: Vec<String>,
    pub stats: ExportStats,
    pub embeddings: EmbeddingDescriptor,
}
