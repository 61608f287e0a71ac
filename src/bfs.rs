use std::collections::VecDeque;

use ahash::AHashSet;
use tracing::{trace, warn};

use crate::{
    errors::WordNetError,
    graph::{Literal, WILDCARD_RELATION, WordNet},
};

/// Outcome of a single [`BreadthFirstWalk::next_synset`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkStep {
    Visited(String),
    Exhausted,
}

/// Relation-filtered breadth-first walk over a [`WordNet`].
///
/// With `allow_all_relations` every relation is followed unless its type is
/// listed in `filtered_relations`; without it only the listed types are
/// followed. Nodes are marked as soon as they are queued, so each synset is
/// returned at most once even on cyclic graphs.
///
/// The walk is driven step by step, so callers can stop early or impose
/// their own step budget.
#[derive(Debug, Clone)]
pub struct BreadthFirstWalk<'a> {
    network: &'a WordNet,
    root: String,
    allow_all_relations: bool,
    filtered_relations: Vec<String>,
    queue: VecDeque<String>,
    analyzed: AHashSet<String>,
    failed: bool,
}

impl<'a> BreadthFirstWalk<'a> {
    pub fn new<S: AsRef<str>>(
        network: &'a WordNet,
        root: &str,
        allow_all_relations: bool,
        filtered_relations: &[S],
    ) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(root.to_string());
        let mut analyzed = AHashSet::new();
        analyzed.insert(root.to_string());
        Self {
            network,
            root: root.to_string(),
            allow_all_relations,
            filtered_relations: filtered_relations
                .iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
            queue,
            analyzed,
            failed: false,
        }
    }

    /// Walk following every relation.
    pub fn unfiltered(network: &'a WordNet, root: &str) -> Self {
        Self::new::<&str>(network, root, true, &[])
    }

    /// Walk rooted at the synset a literal resolves to.
    pub fn from_literal<S: AsRef<str>>(
        network: &'a WordNet,
        root: &Literal,
        allow_all_relations: bool,
        filtered_relations: &[S],
    ) -> Result<Self, WordNetError> {
        let synset = network
            .get_synset_from_literal(root)
            .ok_or_else(|| WordNetError::not_found(format!("literal {root}")))?;
        Ok(Self::new(
            network,
            &synset.id,
            allow_all_relations,
            filtered_relations,
        ))
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn allow_all_relations(&self) -> bool {
        self.allow_all_relations
    }

    pub fn filtered_relations(&self) -> &[String] {
        &self.filtered_relations
    }

    pub fn has_more_synsets(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Dequeues the next synset, queues its unvisited eligible targets and
    /// returns its id.
    ///
    /// Fails with [`WordNetError::FilterConflict`] when the filter leaves no
    /// relation to follow, and with [`WordNetError::NotFound`] when the
    /// dequeued id is missing from the network. On failure the queue is left
    /// untouched.
    pub fn next_synset(&mut self) -> Result<WalkStep, WordNetError> {
        let Some(current) = self.queue.front() else {
            return Ok(WalkStep::Exhausted);
        };
        if self.no_relation_left() {
            return Err(WordNetError::filter_conflict(
                current.as_str(),
                self.allow_all_relations,
            ));
        }
        let targets = self.eligible_targets(current)?;
        for target in targets {
            if !self.analyzed.contains(target) {
                self.analyzed.insert(target.to_string());
                self.queue.push_back(target.to_string());
            }
        }
        match self.queue.pop_front() {
            Some(current) => {
                trace!(synset = %current, pending = self.queue.len(), "walk step");
                Ok(WalkStep::Visited(current))
            }
            None => Ok(WalkStep::Exhausted),
        }
    }

    fn no_relation_left(&self) -> bool {
        if self.allow_all_relations {
            self.is_filtered(WILDCARD_RELATION)
        } else {
            self.filtered_relations.is_empty()
        }
    }

    fn is_filtered(&self, relation: &str) -> bool {
        self.filtered_relations.iter().any(|f| f == relation)
    }

    fn eligible_targets(&self, id: &str) -> Result<Vec<&'a str>, WordNetError> {
        let network: &'a WordNet = self.network;
        let Some(synset) = network.get_synset_by_id(id) else {
            warn!(synset = %id, root = %self.root, "walk reached a synset missing from the network");
            return Err(WordNetError::not_found(format!("synset {id}")));
        };
        let mut targets = Vec::new();
        if self.allow_all_relations {
            let mut seen_types: Vec<&str> = Vec::new();
            for relation in &synset.relations {
                let ty = relation.relation.as_str();
                if self.is_filtered(ty) || seen_types.contains(&ty) {
                    continue;
                }
                seen_types.push(ty);
                targets.extend(network.get_related_synset_ids(id, ty)?);
            }
        } else {
            for filter in &self.filtered_relations {
                targets.extend(network.get_related_synset_ids(id, filter)?);
            }
        }
        Ok(targets)
    }
}

impl Iterator for BreadthFirstWalk<'_> {
    type Item = Result<String, WordNetError>;

    /// Yields visited ids; the first error ends the iteration.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_synset() {
            Ok(WalkStep::Visited(id)) => Some(Ok(id)),
            Ok(WalkStep::Exhausted) => None,
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}
