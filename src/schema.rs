use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

use crate::errors::WordNetError;

pub const BASE_SCHEMA_VERSION: i64 = 1;

struct MigrationStep {
    target_version: i64,
    statements: &'static [&'static str],
}

/// Version 2 relaxes `information_content` to accept NULL, which is how a
/// NaN value is stored. SQLite cannot drop a column constraint in place, so
/// the table is rebuilt.
const MIGRATION_STEPS: &[MigrationStep] = &[MigrationStep {
    target_version: 2,
    statements: &[
        "CREATE TABLE wn_synsets_v2 (
            position            INTEGER PRIMARY KEY,
            id                  TEXT NOT NULL UNIQUE,
            pos                 TEXT NOT NULL,
            non_lexicalized     INTEGER NOT NULL,
            definition          TEXT,
            stamp               TEXT,
            domain              TEXT,
            sumo                TEXT,
            sumo_type           TEXT,
            sentiwn_positive    TEXT,
            sentiwn_negative    TEXT,
            sentiwn_objective   TEXT,
            nl                  TEXT,
            information_content REAL
        )",
        "INSERT INTO wn_synsets_v2 SELECT * FROM wn_synsets",
        "DROP TABLE wn_synsets",
        "ALTER TABLE wn_synsets_v2 RENAME TO wn_synsets",
    ],
}];

/// First version whose synset table stores NaN information content.
pub const NULLABLE_INFORMATION_CONTENT_VERSION: i64 = 2;

pub const SCHEMA_VERSION: i64 = BASE_SCHEMA_VERSION + MIGRATION_STEPS.len() as i64;

pub fn ensure_schema(conn: &Connection) -> Result<(), WordNetError> {
    ensure_base_schema(conn)?;
    ensure_meta(conn)?;
    run_pending_migrations(conn)?;
    Ok(())
}

pub fn ensure_schema_without_migrations(conn: &Connection) -> Result<(), WordNetError> {
    ensure_base_schema(conn)?;
    ensure_meta(conn)?;
    Ok(())
}

fn ensure_base_schema(conn: &Connection) -> Result<(), WordNetError> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS wn_synsets (
            position            INTEGER PRIMARY KEY,
            id                  TEXT NOT NULL UNIQUE,
            pos                 TEXT NOT NULL,
            non_lexicalized     INTEGER NOT NULL,
            definition          TEXT,
            stamp               TEXT,
            domain              TEXT,
            sumo                TEXT,
            sumo_type           TEXT,
            sentiwn_positive    TEXT,
            sentiwn_negative    TEXT,
            sentiwn_objective   TEXT,
            nl                  TEXT,
            information_content REAL NOT NULL
        );
        CREATE TABLE IF NOT EXISTS wn_literals (
            synset_id TEXT NOT NULL,
            ordinal   INTEGER NOT NULL,
            word      TEXT NOT NULL,
            sense     TEXT
        );
        CREATE TABLE IF NOT EXISTS wn_relations (
            synset_id      TEXT NOT NULL,
            ordinal        INTEGER NOT NULL,
            source         TEXT NOT NULL,
            target         TEXT NOT NULL,
            relation       TEXT NOT NULL,
            source_literal TEXT,
            target_literal TEXT
        );
        CREATE TABLE IF NOT EXISTS wn_usages (
            synset_id TEXT NOT NULL,
            ordinal   INTEGER NOT NULL,
            text      TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS wn_pwn20 (
            synset_id TEXT NOT NULL,
            ordinal   INTEGER NOT NULL,
            reference TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_literals_synset ON wn_literals(synset_id, ordinal);
        CREATE INDEX IF NOT EXISTS idx_relations_synset ON wn_relations(synset_id, ordinal);
        CREATE INDEX IF NOT EXISTS idx_usages_synset ON wn_usages(synset_id, ordinal);
        CREATE INDEX IF NOT EXISTS idx_pwn20_synset ON wn_pwn20(synset_id, ordinal);
        CREATE INDEX IF NOT EXISTS idx_literals_word ON wn_literals(word);
        CREATE INDEX IF NOT EXISTS idx_relations_target ON wn_relations(target);
        CREATE TABLE IF NOT EXISTS wn_meta (
            id             INTEGER PRIMARY KEY CHECK (id = 1),
            schema_version INTEGER NOT NULL,
            incremental_id TEXT
        );
        "#,
    )
    .map_err(|e| WordNetError::schema(e.to_string()))
}

pub fn read_schema_version(conn: &Connection) -> Result<i64, WordNetError> {
    conn.query_row(
        "SELECT schema_version FROM wn_meta WHERE id=1",
        [],
        |row| row.get(0),
    )
    .map_err(|e| WordNetError::schema(e.to_string()))
}

/// Applies every migration newer than the stored version in one
/// transaction. Returns the resulting version.
pub fn run_pending_migrations(conn: &Connection) -> Result<i64, WordNetError> {
    let current = read_schema_version(conn)?;
    let mut statements: Vec<&'static str> = Vec::new();
    let mut target = current;
    for step in MIGRATION_STEPS {
        if step.target_version > current {
            target = step.target_version;
            statements.extend_from_slice(step.statements);
        }
    }
    if statements.is_empty() {
        return Ok(current);
    }
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| WordNetError::schema(e.to_string()))?;
    for sql in statements {
        tx.execute(sql, [])
            .map_err(|e| WordNetError::schema(e.to_string()))?;
    }
    tx.execute("UPDATE wn_meta SET schema_version=?1 WHERE id=1", [target])
        .map_err(|e| WordNetError::schema(e.to_string()))?;
    tx.commit()
        .map_err(|e| WordNetError::schema(e.to_string()))?;
    debug!(from = current, to = target, "schema migrated");
    Ok(target)
}

fn ensure_meta(conn: &Connection) -> Result<(), WordNetError> {
    let version: Option<i64> = conn
        .query_row(
            "SELECT schema_version FROM wn_meta WHERE id=1",
            [],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| WordNetError::schema(e.to_string()))?;
    match version {
        Some(existing) if existing > SCHEMA_VERSION => Err(WordNetError::schema(format!(
            "store schema version {existing} is newer than supported {SCHEMA_VERSION}"
        ))),
        Some(_) => Ok(()),
        None => {
            conn.execute(
                "INSERT INTO wn_meta(id, schema_version) VALUES(1, ?1)",
                [BASE_SCHEMA_VERSION],
            )
            .map_err(|e| WordNetError::schema(e.to_string()))?;
            Ok(())
        }
    }
}
