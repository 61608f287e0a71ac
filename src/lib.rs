//! In-memory lexical semantic network (WordNet-style) with relation-filtered
//! traversal, set algebra between networks and similarity metrics.
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.

pub mod algo;
pub mod bench_utils;
pub mod bfs;
pub mod cache;
pub mod config;
pub mod errors;
pub mod graph;
pub mod index;
pub mod recovery;
pub mod schema;
pub mod similarity;
pub mod store;

pub use crate::algo::PathWalk;
pub use crate::bfs::{BreadthFirstWalk, WalkStep};
pub use crate::config::{LexnetConfig, SimilarityConfig, StoreConfig};
pub use crate::errors::WordNetError;
pub use crate::graph::{
    Literal, NetworkStats, PartOfSpeech, Relation, Synset, WILDCARD_RELATION, WordNet,
};
pub use crate::similarity::SimilarityMetrics;
pub use crate::store::SnapshotStore;
