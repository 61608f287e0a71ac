use tracing::debug;

use crate::{
    bfs::{BreadthFirstWalk, WalkStep},
    errors::WordNetError,
    graph::{Literal, WordNet},
};

/// Ids present in both networks whose synsets differ, in `a`'s order.
pub fn diff<'a>(a: &'a WordNet, b: &WordNet) -> Vec<&'a str> {
    a.synsets()
        .iter()
        .filter(|s| b.get_synset_by_id(&s.id).is_some_and(|other| other != *s))
        .map(|s| s.id.as_str())
        .collect()
}

/// Ids of `a` that `b` does not contain at all.
pub fn complement<'a>(a: &'a WordNet, b: &WordNet) -> Vec<&'a str> {
    a.ids().filter(|id| !b.contains_id(id)).collect()
}

/// Ids present in both networks with identical synsets, in `a`'s order.
pub fn intersection<'a>(a: &'a WordNet, b: &WordNet) -> Vec<&'a str> {
    a.synsets()
        .iter()
        .filter(|s| b.get_synset_by_id(&s.id).is_some_and(|other| other == *s))
        .map(|s| s.id.as_str())
        .collect()
}

/// Adds every synset of `addition` missing from `base`, mutating `base` in
/// place. Clone `base` first to keep the original.
///
/// Fails with [`WordNetError::ContentConflict`] if both networks hold the
/// same id with different content; conflicts are detected before anything
/// is inserted, so a failed union leaves `base` unchanged. Returns how many
/// synsets were inserted.
pub fn union(base: &mut WordNet, addition: &WordNet) -> Result<usize, WordNetError> {
    for synset in addition.synsets() {
        if let Some(existing) = base.get_synset_by_id(&synset.id) {
            if existing != synset {
                return Err(WordNetError::content_conflict(synset.id.as_str()));
            }
        }
    }
    let mut inserted = 0;
    for synset in addition.synsets() {
        if !base.contains_id(&synset.id) {
            base.add_synset(synset.clone(), true);
            inserted += 1;
        }
    }
    debug!(inserted, total = base.len(), "union applied");
    Ok(inserted)
}

/// Copies every synset of `addition` into `base`, overwriting shared ids.
/// Mutates `base` in place and never fails. Returns how many synsets of
/// `base` were replaced.
pub fn merge(base: &mut WordNet, addition: &WordNet) -> usize {
    let replaced = addition.ids().filter(|id| base.contains_id(id)).count();
    base.add_synsets(addition.synsets().iter().cloned(), true);
    debug!(replaced, total = base.len(), "merge applied");
    replaced
}

/// Synsets dequeued by a walk, in visiting order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathWalk {
    pub synsets: Vec<String>,
    /// Whether the walk stopped on its target. When false, `synsets` is the
    /// whole reachable set and does not describe a path.
    pub reached: bool,
}

impl PathWalk {
    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    /// Edge count of the walk when the target was reached.
    pub fn edge_count(&self) -> Option<usize> {
        if self.reached {
            Some(self.synsets.len().saturating_sub(1))
        } else {
            None
        }
    }
}

/// Walks from `source` and records every dequeued id until `target` is
/// dequeued (inclusive) or the walk is exhausted.
///
/// This is breadth-first visiting order cut at the target, not a
/// reconstructed shortest path; check [`PathWalk::reached`] before reading
/// it as one.
pub fn get_path<S: AsRef<str>>(
    network: &WordNet,
    source: &str,
    target: &str,
    allow_all_relations: bool,
    filtered_relations: &[S],
) -> Result<PathWalk, WordNetError> {
    let mut walk = BreadthFirstWalk::new(network, source, allow_all_relations, filtered_relations);
    let mut synsets = Vec::new();
    while walk.has_more_synsets() {
        let WalkStep::Visited(id) = walk.next_synset()? else {
            break;
        };
        let found = id == target;
        synsets.push(id);
        if found {
            return Ok(PathWalk {
                synsets,
                reached: true,
            });
        }
    }
    Ok(PathWalk {
        synsets,
        reached: false,
    })
}

/// [`get_path`] between the synsets two literals resolve to.
pub fn get_path_by_literals<S: AsRef<str>>(
    network: &WordNet,
    source: &Literal,
    target: &Literal,
    allow_all_relations: bool,
    filtered_relations: &[S],
) -> Result<PathWalk, WordNetError> {
    let source_id = resolve(network, source)?;
    let target_id = resolve(network, target)?;
    get_path(
        network,
        source_id,
        target_id,
        allow_all_relations,
        filtered_relations,
    )
}

fn resolve<'a>(network: &'a WordNet, literal: &Literal) -> Result<&'a str, WordNetError> {
    network
        .get_synset_from_literal(literal)
        .map(|s| s.id.as_str())
        .ok_or_else(|| WordNetError::not_found(format!("literal {literal}")))
}
