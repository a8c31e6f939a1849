//! Bill export: every bill with derived status, chamber and subject tags.

use crate::classify::{BillStatus, Chamber};
use crate::config::Config;
use crate::error::Result;
use crate::output::{self, Layout, BILLS_FILE};
use crate::source::Source;
use crate::types::{Bill, RecordId};
use indexmap::IndexMap;
use rusqlite::Connection;
use tracing::{debug, info};

const ALL_BILLS: &str = r#"
SELECT
    bill_id,
    titulo,
    resumen,
    fecha_ingreso,
    etapa,
    resultado_final,
    iniciativa,
    origen
FROM bills
ORDER BY fecha_ingreso DESC
"#;

const BILL_SUBJECTS: &str = r#"
SELECT bm.bill_id, m.nombre
FROM bill_materias bm
JOIN dim_materias m ON bm.materia_id = m.materia_id
"#;

const DEFAULT_INITIATIVE: &str = "Mocion";

/// Load all bills, newest filing date first, with their subject tags attached
pub fn load(conn: &Connection) -> Result<Vec<Bill>> {
    let mut stmt = conn.prepare(ALL_BILLS)?;
    let rows = stmt.query_map([], |row| {
        let title: Option<String> = row.get(1)?;
        let summary: Option<String> = row.get(2)?;
        let stage: Option<String> = row.get(4)?;
        let result: Option<String> = row.get(5)?;
        let initiative: Option<String> = row.get(6)?;
        let origin: Option<String> = row.get(7)?;

        Ok(Bill {
            id: row.get(0)?,
            summary: summary.filter(|s| !s.is_empty()).or_else(|| title.clone()),
            title,
            date: row.get(3)?,
            status: BillStatus::derive(result.as_deref(), stage.as_deref())
                .label()
                .to_string(),
            initiative: initiative
                .filter(|i| !i.is_empty())
                .unwrap_or_else(|| DEFAULT_INITIATIVE.to_string()),
            chamber: Chamber::from_origin(origin.as_deref()).label().to_string(),
            subjects: Vec::new(),
        })
    })?;

    let mut bills: IndexMap<RecordId, Bill> = IndexMap::new();
    for bill in rows {
        let bill = bill?;
        bills.insert(bill.id.clone(), bill);
    }

    attach_subjects(conn, &mut bills)?;
    Ok(bills.into_values().collect())
}

/// Append each joined subject tag to its bill. Tags for unknown bills are
/// ignored and duplicate join rows stay duplicated.
fn attach_subjects(conn: &Connection, bills: &mut IndexMap<RecordId, Bill>) -> Result<()> {
    let mut stmt = conn.prepare(BILL_SUBJECTS)?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, RecordId>(0)?, row.get::<_, String>(1)?))
    })?;

    for row in rows {
        let (bill_id, subject) = row?;
        match bills.get_mut(&bill_id) {
            Some(bill) => bill.subjects.push(subject),
            None => debug!(bill_id = %bill_id, "Subject tag for unknown bill"),
        }
    }
    Ok(())
}

/// Load bills from the configured database and write `bills.json`
pub fn export(config: &Config) -> Result<Vec<Bill>> {
    info!("Exporting bills");
    let source = Source::open(&config.db_path)?;
    let bills = load(source.conn())?;
    drop(source);

    let path = output::write_json(&config.output_dir, BILLS_FILE, &bills, Layout::Pretty)?;
    info!(count = bills.len(), path = %path.display(), "Exported bills");
    Ok(bills)
}
