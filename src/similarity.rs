//! Edge-counting and information-content similarity measures.
//!
//! The free functions walk the network afresh on every call and follow the
//! default hypernymy relations from [`SimilarityConfig::default`].
//! [`SimilarityMetrics`] computes the same values with an explicit
//! configuration and memoizes complete walks, which pays off when many pairs
//! share endpoints.

use ahash::AHashSet;
use tracing::debug;

use crate::{
    algo::{self, PathWalk},
    bfs::BreadthFirstWalk,
    cache::{CacheStats, WalkCache, WalkKey},
    config::SimilarityConfig,
    errors::WordNetError,
    graph::WordNet,
};

/// Number of edges on the walk from `source` to `target`.
///
/// Fails with [`WordNetError::Unreachable`] when the walk is exhausted
/// without dequeuing `target`.
pub fn distance<S: AsRef<str>>(
    network: &WordNet,
    source: &str,
    target: &str,
    allow_all_relations: bool,
    filtered_relations: &[S],
) -> Result<usize, WordNetError> {
    let walk = algo::get_path(
        network,
        source,
        target,
        allow_all_relations,
        filtered_relations,
    )?;
    edge_count(&walk, source, target)
}

/// [`distance`] following only the default hypernymy relations.
pub fn hypernym_distance(
    network: &WordNet,
    source: &str,
    target: &str,
) -> Result<usize, WordNetError> {
    Direct::new(network).hypernym_distance(source, target)
}

pub fn lowest_common_subsumer(
    network: &WordNet,
    first: &str,
    second: &str,
    allow_all_relations: bool,
) -> Result<Option<String>, WordNetError> {
    Direct::new(network).lowest_common_subsumer(first, second, allow_all_relations)
}

pub fn resnik(
    network: &WordNet,
    first: &str,
    second: &str,
    allow_all_relations: bool,
) -> Result<f64, WordNetError> {
    Direct::new(network).resnik(first, second, allow_all_relations)
}

pub fn lin(
    network: &WordNet,
    first: &str,
    second: &str,
    allow_all_relations: bool,
) -> Result<f64, WordNetError> {
    Direct::new(network).lin(first, second, allow_all_relations)
}

pub fn jiang_conrath_distance(
    network: &WordNet,
    first: &str,
    second: &str,
    allow_all_relations: bool,
) -> Result<f64, WordNetError> {
    Direct::new(network).jiang_conrath_distance(first, second, allow_all_relations)
}

pub fn jiang_conrath(
    network: &WordNet,
    first: &str,
    second: &str,
    allow_all_relations: bool,
) -> Result<f64, WordNetError> {
    Direct::new(network).jiang_conrath(first, second, allow_all_relations)
}

/// Similarity measures over one network with an explicit configuration and a
/// shared [`WalkCache`].
///
/// A walk from `s` cut at `t` is always the prefix of the complete walk from
/// `s`, so one cached walk per source and relation mode answers every target.
pub struct SimilarityMetrics<'a> {
    network: &'a WordNet,
    config: SimilarityConfig,
    cache: WalkCache,
}

impl<'a> SimilarityMetrics<'a> {
    pub fn new(network: &'a WordNet) -> Self {
        Self::with_config(network, SimilarityConfig::default())
    }

    pub fn with_config(network: &'a WordNet, config: SimilarityConfig) -> Self {
        Self {
            network,
            config,
            cache: WalkCache::new(),
        }
    }

    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn get_path<S: AsRef<str>>(
        &self,
        source: &str,
        target: &str,
        allow_all_relations: bool,
        filtered_relations: &[S],
    ) -> Result<PathWalk, WordNetError> {
        let key = WalkKey::new(source, allow_all_relations, filtered_relations);
        let complete = match self.cache.get(&key) {
            Some(walk) => walk,
            None => {
                let walk: Result<Vec<String>, WordNetError> = BreadthFirstWalk::new(
                    self.network,
                    source,
                    allow_all_relations,
                    filtered_relations,
                )
                .collect();
                match walk {
                    Ok(walk) => self.cache.insert(key, walk),
                    // the cut walk may still succeed if the failure lies past the target
                    Err(err) => {
                        debug!(source, error = %err, "complete walk failed, walking directly");
                        return algo::get_path(
                            self.network,
                            source,
                            target,
                            allow_all_relations,
                            filtered_relations,
                        );
                    }
                }
            }
        };
        Ok(match complete.iter().position(|id| id == target) {
            Some(idx) => PathWalk {
                synsets: complete[..=idx].to_vec(),
                reached: true,
            },
            None => PathWalk {
                synsets: complete.to_vec(),
                reached: false,
            },
        })
    }

    pub fn distance<S: AsRef<str>>(
        &self,
        source: &str,
        target: &str,
        allow_all_relations: bool,
        filtered_relations: &[S],
    ) -> Result<usize, WordNetError> {
        let walk = self.get_path(source, target, allow_all_relations, filtered_relations)?;
        edge_count(&walk, source, target)
    }

    pub fn hypernym_distance(&self, source: &str, target: &str) -> Result<usize, WordNetError> {
        Measures::hypernym_distance(self, source, target)
    }

    pub fn lowest_common_subsumer(
        &self,
        first: &str,
        second: &str,
        allow_all_relations: bool,
    ) -> Result<Option<String>, WordNetError> {
        Measures::lowest_common_subsumer(self, first, second, allow_all_relations)
    }

    pub fn resnik(
        &self,
        first: &str,
        second: &str,
        allow_all_relations: bool,
    ) -> Result<f64, WordNetError> {
        Measures::resnik(self, first, second, allow_all_relations)
    }

    pub fn lin(
        &self,
        first: &str,
        second: &str,
        allow_all_relations: bool,
    ) -> Result<f64, WordNetError> {
        Measures::lin(self, first, second, allow_all_relations)
    }

    pub fn jiang_conrath_distance(
        &self,
        first: &str,
        second: &str,
        allow_all_relations: bool,
    ) -> Result<f64, WordNetError> {
        Measures::jiang_conrath_distance(self, first, second, allow_all_relations)
    }

    pub fn jiang_conrath(
        &self,
        first: &str,
        second: &str,
        allow_all_relations: bool,
    ) -> Result<f64, WordNetError> {
        Measures::jiang_conrath(self, first, second, allow_all_relations)
    }
}

/// Shared formulas; implementors only decide how walks are produced.
trait Measures {
    fn network(&self) -> &WordNet;

    fn config(&self) -> &SimilarityConfig;

    fn walk(
        &self,
        source: &str,
        target: &str,
        allow_all_relations: bool,
        filtered_relations: &[String],
    ) -> Result<PathWalk, WordNetError>;

    fn hypernym_distance(&self, source: &str, target: &str) -> Result<usize, WordNetError> {
        let walk = self.walk(source, target, false, &self.config().hypernym_relations)?;
        edge_count(&walk, source, target)
    }

    /// First id of `first`'s walk (towards `second`) that also appears in
    /// `second`'s walk (towards `first`).
    fn lowest_common_subsumer(
        &self,
        first: &str,
        second: &str,
        allow_all_relations: bool,
    ) -> Result<Option<String>, WordNetError> {
        let filtered: &[String] = if allow_all_relations {
            &[]
        } else {
            &self.config().hypernym_relations
        };
        let up_first = self.walk(first, second, allow_all_relations, filtered)?;
        let up_second = self.walk(second, first, allow_all_relations, filtered)?;
        let seen: AHashSet<&str> = up_second.synsets.iter().map(String::as_str).collect();
        Ok(up_first
            .synsets
            .into_iter()
            .find(|id| seen.contains(id.as_str())))
    }

    fn resnik(
        &self,
        first: &str,
        second: &str,
        allow_all_relations: bool,
    ) -> Result<f64, WordNetError> {
        let lcs = self
            .lowest_common_subsumer(first, second, allow_all_relations)?
            .ok_or_else(|| {
                WordNetError::degenerate(format!("{first} and {second} have no common subsumer"))
            })?;
        self.network().information_content(&lcs)
    }

    fn lin(
        &self,
        first: &str,
        second: &str,
        allow_all_relations: bool,
    ) -> Result<f64, WordNetError> {
        let shared = self.resnik(first, second, allow_all_relations)?;
        let ic_first = self.network().information_content(first)?;
        let ic_second = self.network().information_content(second)?;
        Ok(2.0 * shared / (ic_first + ic_second))
    }

    fn jiang_conrath_distance(
        &self,
        first: &str,
        second: &str,
        allow_all_relations: bool,
    ) -> Result<f64, WordNetError> {
        let shared = self.resnik(first, second, allow_all_relations)?;
        let ic_first = self.network().information_content(first)?;
        let ic_second = self.network().information_content(second)?;
        Ok(ic_first + ic_second - 2.0 * shared)
    }

    fn jiang_conrath(
        &self,
        first: &str,
        second: &str,
        allow_all_relations: bool,
    ) -> Result<f64, WordNetError> {
        let distance = self.jiang_conrath_distance(first, second, allow_all_relations)?;
        if distance == 0.0 {
            return Err(WordNetError::degenerate(format!(
                "Jiang-Conrath distance between {first} and {second} is zero"
            )));
        }
        Ok(1.0 / distance)
    }
}

struct Direct<'a> {
    network: &'a WordNet,
    config: SimilarityConfig,
}

impl<'a> Direct<'a> {
    fn new(network: &'a WordNet) -> Self {
        Self {
            network,
            config: SimilarityConfig::default(),
        }
    }
}

impl Measures for Direct<'_> {
    fn network(&self) -> &WordNet {
        self.network
    }

    fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    fn walk(
        &self,
        source: &str,
        target: &str,
        allow_all_relations: bool,
        filtered_relations: &[String],
    ) -> Result<PathWalk, WordNetError> {
        algo::get_path(
            self.network,
            source,
            target,
            allow_all_relations,
            filtered_relations,
        )
    }
}

impl Measures for SimilarityMetrics<'_> {
    fn network(&self) -> &WordNet {
        self.network
    }

    fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    fn walk(
        &self,
        source: &str,
        target: &str,
        allow_all_relations: bool,
        filtered_relations: &[String],
    ) -> Result<PathWalk, WordNetError> {
        self.get_path(source, target, allow_all_relations, filtered_relations)
    }
}

fn edge_count(walk: &PathWalk, source: &str, target: &str) -> Result<usize, WordNetError> {
    walk.edge_count()
        .ok_or_else(|| WordNetError::unreachable(source, target))
}
