//! Read-only access to the parliament SQLite database.

use crate::error::Result;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use tracing::debug;

/// Tables and columns the exporters read. The export never creates or
/// checks these; the DDL documents the expected layout and seeds fixtures.
/// Relationships are left undeclared so fixtures can hold orphan rows.
pub const SOURCE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS dim_partidos (
    partido_id INTEGER PRIMARY KEY,
    nombre_partido TEXT NOT NULL,
    sigla TEXT
);

CREATE TABLE IF NOT EXISTS dim_parlamentario (
    mp_uid INTEGER PRIMARY KEY,
    nombre_completo TEXT NOT NULL,
    partido_militante_actual_id INTEGER,
    url_foto TEXT,
    profesion TEXT
);

CREATE TABLE IF NOT EXISTS bills (
    bill_id TEXT PRIMARY KEY,
    titulo TEXT,
    resumen TEXT,
    fecha_ingreso TEXT,
    etapa TEXT,
    resultado_final TEXT,
    iniciativa TEXT,
    origen TEXT
);

CREATE TABLE IF NOT EXISTS dim_materias (
    materia_id INTEGER PRIMARY KEY,
    nombre TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS bill_materias (
    bill_id TEXT NOT NULL,
    materia_id INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS sesiones_votacion (
    sesion_votacion_id INTEGER PRIMARY KEY,
    bill_id TEXT NOT NULL,
    fecha TEXT
);

CREATE TABLE IF NOT EXISTS votos_parlamentario (
    mp_uid INTEGER NOT NULL,
    sesion_votacion_id INTEGER NOT NULL,
    voto TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS bill_embeddings (
    bill_id TEXT PRIMARY KEY,
    embedding TEXT NOT NULL,          -- JSON array of numbers
    model_name TEXT,
    embedding_dimension INTEGER
);
"#;

/// Read-only handle on the source database
pub struct Source {
    conn: Connection,
}

impl Source {
    /// Open the database at `path` without write access
    pub fn open(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Opening source database");
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_is_read_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parlamento.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch(SOURCE_SCHEMA)
            .unwrap();

        let source = Source::open(&path).unwrap();
        let count: i64 = source
            .conn()
            .query_row("SELECT COUNT(*) FROM bills", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);

        let write = source
            .conn()
            .execute("INSERT INTO dim_materias VALUES (1, 'Salud')", []);
        assert!(write.is_err());
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Source::open(&dir.path().join("missing.db")).is_err());
    }
}
