pub mod ids;
pub mod stats;
pub mod types;

use ahash::{AHashMap, AHashSet};
use tracing::debug;

use crate::errors::WordNetError;

pub use self::stats::{NetworkStats, PosStats};
pub use self::types::{Literal, PartOfSpeech, Relation, Synset, WILDCARD_RELATION};

/// In-memory lexical network.
///
/// Synsets are kept in insertion order next to an id index and a word index.
/// Every mutation goes through [`WordNet::add_synset`] or
/// [`WordNet::remove_synset`], which update all three together.
#[derive(Debug, Clone, Default)]
pub struct WordNet {
    pub(crate) synsets: Vec<Synset>,
    pub(crate) positions: AHashMap<String, usize>,
    pub(crate) words: AHashMap<String, Vec<String>>,
    pub(crate) incremental_id: Option<String>,
}

impl WordNet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a network from a batch of synsets. Later duplicates of an id
    /// replace earlier ones.
    pub fn from_synsets<I: IntoIterator<Item = Synset>>(synsets: I) -> Self {
        let mut network = Self::new();
        network.add_synsets(synsets, true);
        debug!(
            synsets = network.synsets.len(),
            words = network.words.len(),
            "built lexical network"
        );
        network
    }

    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    pub fn synsets(&self) -> &[Synset] {
        &self.synsets
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.synsets.iter().map(|s| s.id.as_str())
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn get_synset_by_id(&self, id: &str) -> Option<&Synset> {
        self.positions.get(id).map(|&idx| &self.synsets[idx])
    }

    /// Fetches several synsets at once; the result is aligned with `ids`.
    pub fn get_synsets_from_ids<S: AsRef<str>>(&self, ids: &[S]) -> Vec<Option<&Synset>> {
        ids.iter()
            .map(|id| self.get_synset_by_id(id.as_ref()))
            .collect()
    }

    /// Targets of the outgoing relations of `id` whose type is `relation`,
    /// or of every outgoing relation for the wildcard.
    pub fn get_related_synset_ids(
        &self,
        id: &str,
        relation: &str,
    ) -> Result<Vec<&str>, WordNetError> {
        let synset = self
            .get_synset_by_id(id)
            .ok_or_else(|| WordNetError::not_found(format!("synset {id}")))?;
        Ok(synset
            .relations
            .iter()
            .filter(|r| r.matches(relation))
            .map(|r| r.target.as_str())
            .collect())
    }

    /// Like [`WordNet::get_related_synset_ids`] but resolves the targets.
    /// Targets absent from the network are skipped.
    pub fn get_related_synsets(
        &self,
        id: &str,
        relation: &str,
    ) -> Result<Vec<&Synset>, WordNetError> {
        Ok(self
            .get_related_synset_ids(id, relation)?
            .into_iter()
            .filter_map(|target| self.get_synset_by_id(target))
            .collect())
    }

    pub fn synsets_by_pos(&self, pos: PartOfSpeech) -> Vec<&Synset> {
        self.synsets.iter().filter(|s| s.pos == pos).collect()
    }

    /// Ids of the synsets holding a literal with this word form, in
    /// insertion order.
    pub fn synset_ids_for_word(&self, word: &str) -> &[String] {
        self.words.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Inserts `synset`. An existing synset with the same id is kept when
    /// `overwrite` is false (returns `false`); otherwise it is removed and
    /// the new one is appended.
    pub fn add_synset(&mut self, synset: Synset, overwrite: bool) -> bool {
        if self.positions.contains_key(&synset.id) {
            if !overwrite {
                return false;
            }
            self.remove_synset(&synset.id);
        }
        self.push_synset(synset);
        true
    }

    /// Returns how many synsets were inserted. The result is the same as
    /// calling [`WordNet::add_synset`] for each one in turn, but with
    /// `overwrite` every replaced synset is dropped in a single pass.
    pub fn add_synsets<I>(&mut self, synsets: I, overwrite: bool) -> usize
    where
        I: IntoIterator<Item = Synset>,
    {
        if overwrite {
            return self.replace_synsets(synsets.into_iter().collect());
        }
        let mut added = 0;
        for synset in synsets {
            if self.add_synset(synset, false) {
                added += 1;
            }
        }
        added
    }

    fn replace_synsets(&mut self, incoming: Vec<Synset>) -> usize {
        let added = incoming.len();
        let mut last_seen: AHashMap<String, usize> = AHashMap::with_capacity(incoming.len());
        for (idx, synset) in incoming.iter().enumerate() {
            last_seen.insert(synset.id.clone(), idx);
        }
        if last_seen.keys().any(|id| self.positions.contains_key(id)) {
            let (removed, kept): (Vec<Synset>, Vec<Synset>) = std::mem::take(&mut self.synsets)
                .into_iter()
                .partition(|s| last_seen.contains_key(&s.id));
            self.unindex_all(&removed);
            self.synsets = kept;
            self.positions = self
                .synsets
                .iter()
                .enumerate()
                .map(|(idx, s)| (s.id.clone(), idx))
                .collect();
        }
        // within the batch the last occurrence of an id wins
        for (idx, synset) in incoming.into_iter().enumerate() {
            if last_seen.get(&synset.id) == Some(&idx) {
                self.push_synset(synset);
            }
        }
        added
    }

    pub fn remove_synset(&mut self, id: &str) -> Option<Synset> {
        let idx = self.positions.remove(id)?;
        let removed = self.synsets.remove(idx);
        for synset in &self.synsets[idx..] {
            if let Some(position) = self.positions.get_mut(&synset.id) {
                *position -= 1;
            }
        }
        self.unindex_words(&removed);
        Some(removed)
    }

    pub fn set_information_content(&mut self, id: &str, ic: f64) -> Result<(), WordNetError> {
        let idx = *self
            .positions
            .get(id)
            .ok_or_else(|| WordNetError::not_found(format!("synset {id}")))?;
        self.synsets[idx].information_content = ic;
        Ok(())
    }

    pub(crate) fn information_content(&self, id: &str) -> Result<f64, WordNetError> {
        self.get_synset_by_id(id)
            .map(|s| s.information_content)
            .ok_or_else(|| WordNetError::not_found(format!("synset {id}")))
    }

    fn push_synset(&mut self, synset: Synset) {
        self.index_words(&synset);
        self.positions.insert(synset.id.clone(), self.synsets.len());
        self.synsets.push(synset);
    }

    fn index_words(&mut self, synset: &Synset) {
        for literal in &synset.literals {
            let ids = self.words.entry(literal.word.clone()).or_default();
            if ids.last() != Some(&synset.id) {
                ids.push(synset.id.clone());
            }
        }
    }

    fn unindex_words(&mut self, synset: &Synset) {
        for literal in &synset.literals {
            if let Some(ids) = self.words.get_mut(&literal.word) {
                ids.retain(|id| id != &synset.id);
                if ids.is_empty() {
                    self.words.remove(&literal.word);
                }
            }
        }
    }

    fn unindex_all(&mut self, removed: &[Synset]) {
        let gone: AHashSet<&str> = removed.iter().map(|s| s.id.as_str()).collect();
        let words: AHashSet<&str> = removed
            .iter()
            .flat_map(|s| s.literals.iter().map(|l| l.word.as_str()))
            .collect();
        for word in words {
            if let Some(ids) = self.words.get_mut(word) {
                ids.retain(|id| !gone.contains(id.as_str()));
                if ids.is_empty() {
                    self.words.remove(word);
                }
            }
        }
    }
}
