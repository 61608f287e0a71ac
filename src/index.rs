//! Literal-based lookups over the word index.
//!
//! Every query walks the insertion-ordered id list kept for the literal's
//! word form, so results and "first match" resolution are reproducible.

use crate::graph::{Literal, PartOfSpeech, Synset, WordNet};

impl WordNet {
    /// Synsets containing `literal` (open match), optionally restricted to
    /// one part of speech.
    pub fn get_synsets_from_literal(
        &self,
        literal: &Literal,
        pos: Option<PartOfSpeech>,
    ) -> Vec<&Synset> {
        self.candidates(literal)
            .filter(|s| pos.is_none_or(|p| s.pos == p))
            .collect()
    }

    pub fn get_ids_from_literal(&self, literal: &Literal) -> Vec<&str> {
        self.candidates(literal).map(|s| s.id.as_str()).collect()
    }

    pub fn contains_literal(&self, literal: &Literal) -> bool {
        self.candidates(literal).next().is_some()
    }

    /// Resolves a literal to a single synset.
    ///
    /// Among the synsets containing the literal, the first wins. With a
    /// sense, the synset must also hold some literal carrying that sense.
    pub fn get_synset_from_literal(&self, literal: &Literal) -> Option<&Synset> {
        match literal.sense.as_deref() {
            None => self.candidates(literal).next(),
            Some(sense) => self
                .candidates(literal)
                .find(|s| s.literals.iter().any(|l| l.sense.as_deref() == Some(sense))),
        }
    }

    fn candidates<'a, 'b>(&'a self, literal: &'b Literal) -> impl Iterator<Item = &'a Synset> {
        self.synset_ids_for_word(&literal.word)
            .iter()
            .filter_map(|id| self.get_synset_by_id(id))
            .filter(move |s| s.contains_literal(literal))
    }
}
