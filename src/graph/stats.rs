use std::fmt;

use ahash::{AHashMap, AHashSet};
use serde::Serialize;

use super::{PartOfSpeech, Synset, WordNet};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PosStats {
    pub synsets: usize,
    pub literals: usize,
    pub unique_literals: usize,
    pub non_lexicalized: usize,
}

/// Summary counts over a whole network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkStats {
    pub total_synsets: usize,
    pub by_pos: Vec<(PartOfSpeech, PosStats)>,
    pub total_literals: usize,
    pub unique_literals: usize,
    pub relation_count: usize,
    /// Relation type frequencies in first-seen order.
    pub relation_frequency: Vec<(String, usize)>,
}

impl NetworkStats {
    pub fn pos(&self, pos: PartOfSpeech) -> Option<&PosStats> {
        self.by_pos.iter().find(|(p, _)| *p == pos).map(|(_, s)| s)
    }
}

impl WordNet {
    pub fn stats(&self) -> NetworkStats {
        let by_pos = PartOfSpeech::ALL
            .iter()
            .map(|&pos| (pos, pos_stats(self.synsets.iter().filter(|s| s.pos == pos))))
            .collect::<Vec<_>>();

        let mut unique = AHashSet::new();
        let mut total_literals = 0;
        let mut relation_count = 0;
        let mut slots: AHashMap<&str, usize> = AHashMap::new();
        let mut relation_frequency: Vec<(String, usize)> = Vec::new();
        for synset in &self.synsets {
            for literal in &synset.literals {
                total_literals += 1;
                unique.insert((literal.word.as_str(), literal.sense.as_deref()));
            }
            for relation in &synset.relations {
                relation_count += 1;
                match slots.get(relation.relation.as_str()) {
                    Some(&slot) => relation_frequency[slot].1 += 1,
                    None => {
                        slots.insert(relation.relation.as_str(), relation_frequency.len());
                        relation_frequency.push((relation.relation.clone(), 1));
                    }
                }
            }
        }

        NetworkStats {
            total_synsets: self.synsets.len(),
            by_pos,
            total_literals,
            unique_literals: unique.len(),
            relation_count,
            relation_frequency,
        }
    }
}

fn pos_stats<'a, I: Iterator<Item = &'a Synset>>(synsets: I) -> PosStats {
    let mut stats = PosStats::default();
    let mut unique = AHashSet::new();
    for synset in synsets {
        stats.synsets += 1;
        if synset.non_lexicalized {
            stats.non_lexicalized += 1;
        }
        for literal in &synset.literals {
            stats.literals += 1;
            unique.insert((literal.word.as_str(), literal.sense.as_deref()));
        }
    }
    stats.unique_literals = unique.len();
    stats
}

impl fmt::Display for NetworkStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics:")?;
        writeln!(f, "\tTotal synsets: {}", self.total_synsets)?;
        for (pos, stats) in &self.by_pos {
            writeln!(f, "\t{pos:?} synsets: {}", stats.synsets)?;
            writeln!(f, "\t\t{pos:?} literals: {}", stats.literals)?;
            writeln!(f, "\t\t{pos:?} unique literals: {}", stats.unique_literals)?;
            writeln!(f, "\t\t{pos:?} non-lexicalized synsets: {}", stats.non_lexicalized)?;
        }
        writeln!(f, "\tTotal literals: {}", self.total_literals)?;
        writeln!(f, "\tTotal unique literals: {}", self.unique_literals)?;
        writeln!(f, "\tNumber of relations: {}", self.relation_count)?;
        write!(f, "\tRelation frequency table:")?;
        for (relation, count) in &self.relation_frequency {
            write!(f, "\n\t\t{relation}: {count}")?;
        }
        Ok(())
    }
}
