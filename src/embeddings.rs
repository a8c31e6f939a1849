//! Embedding export: stored bill vectors passed through unchanged.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{self, Layout, EMBEDDINGS_FILE};
use crate::source::Source;
use crate::types::{BillEmbedding, EmbeddingDescriptor, RecordId};
use rusqlite::Connection;
use tracing::{info, warn};

/// Model the stored embeddings are reported as coming from
pub const EMBEDDING_MODEL: &str = "all-MiniLM-L6-v2";

/// Vector length reported for [`EMBEDDING_MODEL`]
pub const EMBEDDING_DIMENSION: usize = 384;

const ALL_EMBEDDINGS: &str = r#"
SELECT bill_id, embedding, model_name, embedding_dimension
FROM bill_embeddings
"#;

/// Load every stored embedding.
///
/// The payload must be a JSON array; its elements are kept as parsed so
/// they serialize back the way they were stored.
///
/// The stored model name and dimension are only compared against the fixed
/// descriptor; a mismatch is logged and the row is still exported.
pub fn load(conn: &Connection) -> Result<Vec<BillEmbedding>> {
    let mut stmt = conn.prepare(ALL_EMBEDDINGS)?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, RecordId>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, Option<String>>(2)?,
            row.get::<_, Option<i64>>(3)?,
        ))
    })?;

    let mut embeddings = Vec::new();
    for row in rows {
        let (bill_id, payload, model, dimension) = row?;
        let embedding: Vec<serde_json::Value> =
            serde_json::from_str(&payload).map_err(|source| Error::EmbeddingPayload {
                bill_id: bill_id.to_string(),
                source,
            })?;

        if model.as_deref().is_some_and(|m| m != EMBEDDING_MODEL)
            || dimension.is_some_and(|d| d != EMBEDDING_DIMENSION as i64)
        {
            warn!(
                bill_id = %bill_id,
                model = model.as_deref().unwrap_or(""),
                dimension = dimension.unwrap_or_default(),
                "Stored embedding does not match the reported model"
            );
        }

        embeddings.push(BillEmbedding { bill_id, embedding });
    }

    Ok(embeddings)
}

/// Descriptor recorded in metadata for `count` exported embeddings
pub fn descriptor(count: usize) -> EmbeddingDescriptor {
    EmbeddingDescriptor {
        model: EMBEDDING_MODEL.to_string(),
        dimension: EMBEDDING_DIMENSION,
        count,
    }
}

/// Load embeddings from the configured database and write `embeddings.json`
pub fn export(config: &Config) -> Result<(Vec<BillEmbedding>, EmbeddingDescriptor)> {
    info!("Exporting embeddings");
    let source = Source::open(&config.db_path)?;
    let embeddings = load(source.conn())?;
    drop(source);

    let path = output::write_json(&config.output_dir, EMBEDDINGS_FILE, &embeddings, Layout::Compact)?;
    info!(count = embeddings.len(), path = %path.display(), "Exported embeddings");

    let descriptor = descriptor(embeddings.len());
    Ok((embeddings, descriptor))
}
