use parliament_export::source::SOURCE_SCHEMA;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const LONG_TITLE: &str = "Modifica diversos cuerpos legales con el objeto de fortalecer la fiscalización y el cumplimiento de las obligaciones laborales";

/// Temporary workspace holding a seeded database and an output directory
pub struct Workspace {
    pub dir: TempDir,
    pub db_path: PathBuf,
    pub output_dir: PathBuf,
}

impl Workspace {
    pub fn read(&self, file_name: &str) -> String {
        std::fs::read_to_string(self.output_dir.join(file_name)).unwrap()
    }
}

/// Create a database file with the source schema and a two-legislator scenario.
///
/// "Pérez, Juana" casts 3 "a favor", 1 "en contra" and 1 "nulo" vote;
/// "Soto, Tomás" has no party and a single abstention.
pub fn workspace() -> Workspace {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("parlamento.db");
    let output_dir = dir.path().join("out").join("parliamentdata");
    seed(&db_path);
    Workspace {
        dir,
        db_path,
        output_dir,
    }
}

fn seed(path: &Path) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(SOURCE_SCHEMA).unwrap();
    conn.execute_batch(
        r#"
        INSERT INTO dim_partidos VALUES (1, 'Frente Amplio', 'FA');
        INSERT INTO dim_partidos VALUES (2, 'Unión Demócrata Independiente', 'UDI');

        INSERT INTO dim_parlamentario VALUES (1, 'Pérez, Juana', 1, 'https://foto/1.jpg', 'Ingeniera');
        INSERT INTO dim_parlamentario VALUES (2, 'Soto, Tomás', NULL, NULL, NULL);
        INSERT INTO dim_parlamentario VALUES (3, 'Vidal, Rosa', 2, NULL, 'Médica');

        INSERT INTO dim_materias VALUES (1, 'Trabajo');
        INSERT INTO dim_materias VALUES (2, 'Hacienda');

        INSERT INTO bill_materias VALUES ('B-1', 1);
        INSERT INTO bill_materias VALUES ('B-3', 2);
        "#,
    )
    .unwrap();

    conn.execute(
        "INSERT INTO bills VALUES ('B-1', 'Reforma laboral', 'Reduce la jornada', '2024-04-01', 'Primer trámite', 'Aprobado por unanimidad', 'Mensaje', 'Senado')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO bills VALUES ('B-2', ?1, NULL, '2024-02-01', 'En comision de Hacienda', NULL, NULL, NULL)",
        [LONG_TITLE],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO bills VALUES ('B-3', 'Presupuesto', NULL, '2023-11-01', NULL, NULL, 'Moción', 'Cámara de Diputados')",
        [],
    )
    .unwrap();

    conn.execute_batch(
        r#"
        INSERT INTO sesiones_votacion VALUES (1, 'B-1', '2024-04-10');
        INSERT INTO sesiones_votacion VALUES (2, 'B-1', '2024-04-20');
        INSERT INTO sesiones_votacion VALUES (3, 'B-2', '2024-02-15');
        INSERT INTO sesiones_votacion VALUES (4, 'B-2', '2024-03-01');
        INSERT INTO sesiones_votacion VALUES (5, 'B-3', '2023-11-20');

        INSERT INTO votos_parlamentario VALUES (1, 1, 'a favor');
        INSERT INTO votos_parlamentario VALUES (1, 2, 'a favor');
        INSERT INTO votos_parlamentario VALUES (1, 3, 'a favor');
        INSERT INTO votos_parlamentario VALUES (1, 4, 'en contra');
        INSERT INTO votos_parlamentario VALUES (1, 5, 'nulo');
        INSERT INTO votos_parlamentario VALUES (2, 4, 'Abstencion');
        INSERT INTO votos_parlamentario VALUES (3, 5, 'A Favor');

        INSERT INTO bill_embeddings VALUES ('B-1', '[0.125, -0.5]', 'all-MiniLM-L6-v2', 384);
        INSERT INTO bill_embeddings VALUES ('B-2', '[1, 0]', 'all-MiniLM-L6-v2', 384);
        "#,
    )
    .unwrap();
}

/// Break one stored embedding so the embedding export fails
pub fn corrupt_embedding(path: &Path) {
    let conn = Connection::open(path).unwrap();
    conn.execute(
        "UPDATE bill_embeddings SET embedding = '[0.1,' WHERE bill_id = 'B-2'",
        [],
    )
    .unwrap();
}
