use thiserror::Error;

/// Error type for lexical network operations.
#[derive(Debug, Error)]
pub enum WordNetError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error(
        "no relation to analyze after applying restrictions on synset {synset} \
         (allow_all_relations={allow_all_relations})"
    )]
    FilterConflict {
        synset: String,
        allow_all_relations: bool,
    },
    #[error("networks contain synset {0} with the same id but different content")]
    ContentConflict(String),
    #[error("target {to} is not reachable from {from}")]
    Unreachable { from: String, to: String },
    #[error("degenerate metric: {0}")]
    DegenerateMetric(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("connection error: {0}")]
    ConnectionError(String),
    #[error("schema error: {0}")]
    SchemaError(String),
    #[error("query error: {0}")]
    QueryError(String),
}

impl WordNetError {
    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        WordNetError::NotFound(msg.into())
    }

    pub fn filter_conflict<T: Into<String>>(synset: T, allow_all_relations: bool) -> Self {
        WordNetError::FilterConflict {
            synset: synset.into(),
            allow_all_relations,
        }
    }

    pub fn content_conflict<T: Into<String>>(id: T) -> Self {
        WordNetError::ContentConflict(id.into())
    }

    pub fn unreachable<F: Into<String>, T: Into<String>>(from: F, to: T) -> Self {
        WordNetError::Unreachable {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn degenerate<T: Into<String>>(msg: T) -> Self {
        WordNetError::DegenerateMetric(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        WordNetError::InvalidInput(msg.into())
    }

    pub fn connection<T: Into<String>>(msg: T) -> Self {
        WordNetError::ConnectionError(msg.into())
    }

    pub fn schema<T: Into<String>>(msg: T) -> Self {
        WordNetError::SchemaError(msg.into())
    }

    pub fn query<T: Into<String>>(msg: T) -> Self {
        WordNetError::QueryError(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, WordNetError::NotFound(_))
    }
}
