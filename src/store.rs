//! SQLite snapshot persistence for a whole [`WordNet`].
//!
//! A store holds at most one snapshot: [`SnapshotStore::save`] replaces it
//! inside a single transaction and [`SnapshotStore::load`] rebuilds the
//! network in its original order.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};
use tracing::debug;

use crate::{
    config::StoreConfig,
    errors::WordNetError,
    graph::{Literal, Relation, Synset, WordNet},
    schema::{
        NULLABLE_INFORMATION_CONTENT_VERSION, ensure_schema, ensure_schema_without_migrations,
        read_schema_version,
    },
};

pub struct SnapshotStore {
    conn: Connection,
}

impl SnapshotStore {
    pub fn open<P: AsRef<Path>>(path: P, config: &StoreConfig) -> Result<Self, WordNetError> {
        let conn =
            Connection::open(path).map_err(|e| WordNetError::connection(e.to_string()))?;
        Self::from_connection(conn, config)
    }

    pub fn open_in_memory() -> Result<Self, WordNetError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| WordNetError::connection(e.to_string()))?;
        Self::from_connection(conn, &StoreConfig::default())
    }

    pub fn schema_version(&self) -> Result<i64, WordNetError> {
        read_schema_version(&self.conn)
    }

    pub fn synset_count(&self) -> Result<usize, WordNetError> {
        self.conn
            .query_row("SELECT COUNT(*) FROM wn_synsets", [], |row| {
                row.get::<_, i64>(0)
            })
            .map(|count| count as usize)
            .map_err(|e| WordNetError::query(e.to_string()))
    }

    /// Replaces the stored snapshot with `network`. A NaN information
    /// content is stored as NULL, which a store left at the base schema
    /// cannot hold; such a save is refused before anything is written.
    pub fn save(&mut self, network: &WordNet) -> Result<(), WordNetError> {
        if self.schema_version()? < NULLABLE_INFORMATION_CONTENT_VERSION {
            if let Some(s) = network
                .synsets()
                .iter()
                .find(|s| s.information_content.is_nan())
            {
                return Err(WordNetError::invalid_input(format!(
                    "synset {} has NaN information content, which needs schema version \
                     {NULLABLE_INFORMATION_CONTENT_VERSION}",
                    s.id
                )));
            }
        }
        let tx = self
            .conn
            .transaction()
            .map_err(|e| WordNetError::query(e.to_string()))?;
        for table in ["wn_literals", "wn_relations", "wn_usages", "wn_pwn20", "wn_synsets"] {
            tx.execute(&format!("DELETE FROM {table}"), [])
                .map_err(|e| WordNetError::query(e.to_string()))?;
        }
        {
            let mut stmt_synset = tx
                .prepare_cached(
                    "INSERT INTO wn_synsets(position, id, pos, non_lexicalized, definition, stamp, \
                     domain, sumo, sumo_type, sentiwn_positive, sentiwn_negative, \
                     sentiwn_objective, nl, information_content) \
                     VALUES(?1,?2,?3,?4,?5,?6,?7,?8,?9,?10,?11,?12,?13,?14)",
                )
                .map_err(|e| WordNetError::query(e.to_string()))?;
            let mut stmt_literal = tx
                .prepare_cached(
                    "INSERT INTO wn_literals(synset_id, ordinal, word, sense) VALUES(?1,?2,?3,?4)",
                )
                .map_err(|e| WordNetError::query(e.to_string()))?;
            let mut stmt_relation = tx
                .prepare_cached(
                    "INSERT INTO wn_relations(synset_id, ordinal, source, target, relation, \
                     source_literal, target_literal) VALUES(?1,?2,?3,?4,?5,?6,?7)",
                )
                .map_err(|e| WordNetError::query(e.to_string()))?;
            let mut stmt_usage = tx
                .prepare_cached("INSERT INTO wn_usages(synset_id, ordinal, text) VALUES(?1,?2,?3)")
                .map_err(|e| WordNetError::query(e.to_string()))?;
            let mut stmt_pwn20 = tx
                .prepare_cached(
                    "INSERT INTO wn_pwn20(synset_id, ordinal, reference) VALUES(?1,?2,?3)",
                )
                .map_err(|e| WordNetError::query(e.to_string()))?;

            for (position, s) in network.synsets().iter().enumerate() {
                stmt_synset
                    .execute(params![
                        position as i64,
                        s.id,
                        s.pos.tag(),
                        s.non_lexicalized,
                        s.definition,
                        s.stamp,
                        s.domain,
                        s.sumo,
                        s.sumo_type,
                        s.sentiwn_positive,
                        s.sentiwn_negative,
                        s.sentiwn_objective,
                        s.nl,
                        s.information_content,
                    ])
                    .map_err(|e| WordNetError::query(e.to_string()))?;
                for (ordinal, literal) in s.literals.iter().enumerate() {
                    stmt_literal
                        .execute(params![s.id, ordinal as i64, literal.word, literal.sense])
                        .map_err(|e| WordNetError::query(e.to_string()))?;
                }
                for (ordinal, r) in s.relations.iter().enumerate() {
                    stmt_relation
                        .execute(params![
                            s.id,
                            ordinal as i64,
                            r.source,
                            r.target,
                            r.relation,
                            r.source_literal,
                            r.target_literal,
                        ])
                        .map_err(|e| WordNetError::query(e.to_string()))?;
                }
                for (ordinal, text) in s.usage.iter().enumerate() {
                    stmt_usage
                        .execute(params![s.id, ordinal as i64, text])
                        .map_err(|e| WordNetError::query(e.to_string()))?;
                }
                for (ordinal, reference) in s.pwn20.iter().enumerate() {
                    stmt_pwn20
                        .execute(params![s.id, ordinal as i64, reference])
                        .map_err(|e| WordNetError::query(e.to_string()))?;
                }
            }
        }
        tx.execute(
            "UPDATE wn_meta SET incremental_id=?1 WHERE id=1",
            params![network.last_incremental_id()],
        )
        .map_err(|e| WordNetError::query(e.to_string()))?;
        tx.commit()
            .map_err(|e| WordNetError::query(e.to_string()))?;
        debug!(synsets = network.len(), "saved network snapshot");
        Ok(())
    }

    /// Rebuilds the stored network. An empty store yields an empty network.
    pub fn load(&self) -> Result<WordNet, WordNetError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, pos, non_lexicalized, definition, stamp, domain, sumo, sumo_type, \
                 sentiwn_positive, sentiwn_negative, sentiwn_objective, nl, information_content \
                 FROM wn_synsets ORDER BY position",
            )
            .map_err(|e| WordNetError::query(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, bool>(2)?,
                    row.get::<_, Option<String>>(3)?,
                    row.get::<_, Option<String>>(4)?,
                    row.get::<_, Option<String>>(5)?,
                    row.get::<_, Option<String>>(6)?,
                    row.get::<_, Option<String>>(7)?,
                    row.get::<_, Option<String>>(8)?,
                    row.get::<_, Option<String>>(9)?,
                    row.get::<_, Option<String>>(10)?,
                    row.get::<_, Option<String>>(11)?,
                    row.get::<_, Option<f64>>(12)?,
                ))
            })
            .map_err(|e| WordNetError::query(e.to_string()))?;

        let mut network = WordNet::new();
        for row in rows {
            let (
                id,
                pos,
                non_lexicalized,
                definition,
                stamp,
                domain,
                sumo,
                sumo_type,
                sentiwn_positive,
                sentiwn_negative,
                sentiwn_objective,
                nl,
                information_content,
            ) = row.map_err(|e| WordNetError::query(e.to_string()))?;
            let mut synset = Synset::new(id, pos.parse()?);
            synset.non_lexicalized = non_lexicalized;
            synset.definition = definition;
            synset.stamp = stamp;
            synset.domain = domain;
            synset.sumo = sumo;
            synset.sumo_type = sumo_type;
            synset.sentiwn_positive = sentiwn_positive;
            synset.sentiwn_negative = sentiwn_negative;
            synset.sentiwn_objective = sentiwn_objective;
            synset.nl = nl;
            synset.information_content = information_content.unwrap_or(f64::NAN);
            synset.literals = self.fetch_literals(&synset.id)?;
            synset.relations = self.fetch_relations(&synset.id)?;
            synset.usage = self.fetch_strings(
                "SELECT text FROM wn_usages WHERE synset_id=?1 ORDER BY ordinal",
                &synset.id,
            )?;
            synset.pwn20 = self.fetch_strings(
                "SELECT reference FROM wn_pwn20 WHERE synset_id=?1 ORDER BY ordinal",
                &synset.id,
            )?;
            network.add_synset(synset, true);
        }

        let incremental_id: Option<String> = self
            .conn
            .query_row("SELECT incremental_id FROM wn_meta WHERE id=1", [], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| WordNetError::query(e.to_string()))?
            .flatten();
        network.restore_incremental_id(incremental_id);
        debug!(synsets = network.len(), "loaded network snapshot");
        Ok(network)
    }

    fn fetch_literals(&self, synset_id: &str) -> Result<Vec<Literal>, WordNetError> {
        let mut stmt = self
            .conn
            .prepare_cached(
                "SELECT word, sense FROM wn_literals WHERE synset_id=?1 ORDER BY ordinal",
            )
            .map_err(|e| WordNetError::query(e.to_string()))?;
        let rows = stmt
            .query_map(params![synset_id], |row| {
                Ok(Literal {
                    word: row.get(0)?,
                    sense: row.get(1)?,
                })
            })
            .map_err(|e| WordNetError::query(e.to_string()))?;
        let mut literals = Vec::new();
        for row in rows {
            literals.push(row.map_err(|e| WordNetError::query(e.to_string()))?);
        }
        Ok(literals)
    }

    fn fetch_relations(&self, synset_id: &str) -> Result<Vec<Relation>, WordNetError> {
        let mut stmt = self
            .conn
            .prepare_cached(
                "SELECT source, target, relation, source_literal, target_literal \
                 FROM wn_relations WHERE synset_id=?1 ORDER BY ordinal",
            )
            .map_err(|e| WordNetError::query(e.to_string()))?;
        let rows = stmt
            .query_map(params![synset_id], |row| {
                Ok(Relation {
                    source: row.get(0)?,
                    target: row.get(1)?,
                    relation: row.get(2)?,
                    source_literal: row.get(3)?,
                    target_literal: row.get(4)?,
                })
            })
            .map_err(|e| WordNetError::query(e.to_string()))?;
        let mut relations = Vec::new();
        for row in rows {
            relations.push(row.map_err(|e| WordNetError::query(e.to_string()))?);
        }
        Ok(relations)
    }

    fn fetch_strings(&self, sql: &str, synset_id: &str) -> Result<Vec<String>, WordNetError> {
        let mut stmt = self
            .conn
            .prepare_cached(sql)
            .map_err(|e| WordNetError::query(e.to_string()))?;
        let rows = stmt
            .query_map(params![synset_id], |row| row.get(0))
            .map_err(|e| WordNetError::query(e.to_string()))?;
        let mut values = Vec::new();
        for row in rows {
            values.push(row.map_err(|e| WordNetError::query(e.to_string()))?);
        }
        Ok(values)
    }

    fn from_connection(conn: Connection, config: &StoreConfig) -> Result<Self, WordNetError> {
        if let Some(capacity) = config.cache_size {
            conn.set_prepared_statement_cache_capacity(capacity);
        }
        for (key, value) in &config.pragma_settings {
            let pragma_sql = format!("PRAGMA {key} = {value}");
            match conn.execute(&pragma_sql, []) {
                Ok(_) => {}
                // some pragmas echo their new value
                Err(rusqlite::Error::ExecuteReturnedResults) => {}
                Err(e) => {
                    return Err(WordNetError::connection(format!(
                        "PRAGMA {key} = {value}: {e}"
                    )));
                }
            }
        }
        if config.without_migrations {
            ensure_schema_without_migrations(&conn)?;
        } else {
            ensure_schema(&conn)?;
        }
        Ok(Self { conn })
    }
}
