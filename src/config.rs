//! Explicit configuration values.
//!
//! Nothing in this crate reads process-wide settings; callers build a
//! [`LexnetConfig`] (or one of its parts) and hand it to the component that
//! needs it.

use std::collections::HashMap;

/// Relations that make up the hypernymy hierarchy by default.
pub const DEFAULT_HYPERNYM_RELATIONS: [&str; 2] = ["hypernym", "instance_hypernym"];

/// Options for the similarity metrics.
///
/// # Examples
///
/// ```rust
/// use lexnet::SimilarityConfig;
///
/// let cfg = SimilarityConfig::default();
/// assert_eq!(cfg.hypernym_relations, vec!["hypernym", "instance_hypernym"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimilarityConfig {
    /// Relation types followed by the hypernymy-only distance and by the
    /// lowest common subsumer when not every relation is allowed.
    pub hypernym_relations: Vec<String>,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            hypernym_relations: DEFAULT_HYPERNYM_RELATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl SimilarityConfig {
    pub fn with_hypernym_relations<I, S>(relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hypernym_relations: relations.into_iter().map(Into::into).collect(),
        }
    }
}

/// Options for the SQLite snapshot store.
///
/// # Default Configuration
///
/// ```rust
/// use lexnet::StoreConfig;
/// let config = StoreConfig::default();
/// assert_eq!(config.without_migrations, false);
/// assert!(config.cache_size.is_none());
/// assert!(config.pragma_settings.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct StoreConfig {
    /// Skip schema migrations when opening an existing store.
    ///
    /// **Default:** `false`
    pub without_migrations: bool,

    /// Prepared statement cache capacity.
    ///
    /// **Default:** `None` (rusqlite's default)
    pub cache_size: Option<usize>,

    /// Extra `PRAGMA name = value` settings applied right after opening.
    ///
    /// ```rust
    /// use lexnet::StoreConfig;
    ///
    /// let mut cfg = StoreConfig::default();
    /// cfg.pragma_settings.insert("journal_mode".to_string(), "WAL".to_string());
    /// ```
    pub pragma_settings: HashMap<String, String>,
}

/// Bundle of every configurable part of the crate.
#[derive(Clone, Debug, Default)]
pub struct LexnetConfig {
    pub similarity: SimilarityConfig,
    pub store: StoreConfig,
}
