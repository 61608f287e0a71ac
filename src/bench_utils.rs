use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::graph::{Literal, PartOfSpeech, Relation, Synset, WordNet};

pub const HYPERNYM: &str = "hypernym";
pub const HYPONYM: &str = "hyponym";

#[derive(Clone, Debug)]
pub struct TaxonomyDataset {
    pub synsets: Vec<Synset>,
    /// First parent of every node; the root has none.
    pub parents: Vec<Option<usize>>,
}

impl TaxonomyDataset {
    pub fn nodes(&self) -> usize {
        self.synsets.len()
    }

    pub fn edges(&self) -> usize {
        self.synsets
            .iter()
            .map(|s| s.relations.iter().filter(|r| r.relation == HYPERNYM).count())
            .sum()
    }

    pub fn id(&self, idx: usize) -> &str {
        &self.synsets[idx].id
    }

    pub fn depth(&self, idx: usize) -> usize {
        let mut depth = 0;
        let mut current = idx;
        while let Some(parent) = self.parents[current] {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Index of the first node at the greatest depth.
    pub fn deepest_leaf(&self) -> usize {
        let mut best = (0usize, 0usize);
        for idx in 0..self.nodes() {
            let depth = self.depth(idx);
            if depth > best.0 {
                best = (depth, idx);
            }
        }
        best.1
    }

    pub fn to_network(&self) -> WordNet {
        WordNet::from_synsets(self.synsets.iter().cloned())
    }
}

#[derive(Clone, Debug)]
pub enum TaxonomyShape {
    /// Every node is the hyponym of the previous one.
    Chain,
    /// Each node picks one random parent among the earlier nodes, with at
    /// most `branching` children per parent.
    Tree { branching: usize },
    /// Like `Tree`, plus up to `extra_parents` additional random parents.
    Dag { branching: usize, extra_parents: usize },
}

/// Generates a hypernymy taxonomy rooted at node 0. Child-to-parent edges
/// are `hypernym`, the reverse edges `hyponym`. Information content grows
/// with depth so that deeper synsets are more specific.
pub fn generate_taxonomy(shape: TaxonomyShape, node_count: usize, seed: u64) -> TaxonomyDataset {
    assert!(node_count > 1, "node_count must exceed 1");
    let mut rng = StdRng::seed_from_u64(seed);
    let parent_lists = match shape {
        TaxonomyShape::Chain => chain_parents(node_count),
        TaxonomyShape::Tree { branching } => tree_parents(node_count, branching, &mut rng),
        TaxonomyShape::Dag {
            branching,
            extra_parents,
        } => {
            let mut lists = tree_parents(node_count, branching, &mut rng);
            add_extra_parents(&mut lists, extra_parents, &mut rng);
            lists
        }
    };
    let parents = parent_lists.iter().map(|p| p.first().copied()).collect();
    let synsets = build_synsets(&parent_lists, &mut rng);
    TaxonomyDataset { synsets, parents }
}

pub fn synset_id(idx: usize) -> String {
    format!("ENG30-{:08}-n", idx + 1)
}

fn chain_parents(count: usize) -> Vec<Vec<usize>> {
    (0..count)
        .map(|idx| if idx == 0 { Vec::new() } else { vec![idx - 1] })
        .collect()
}

fn tree_parents(count: usize, branching: usize, rng: &mut StdRng) -> Vec<Vec<usize>> {
    assert!(branching > 0, "branching must be positive");
    let mut children = vec![0usize; count];
    let mut lists = vec![Vec::new()];
    for node in 1..count {
        let mut parent = rng.gen_range(0..node);
        // node - 1 has no children yet, so the scan terminates
        while children[parent] >= branching {
            parent = (parent + 1) % node;
        }
        children[parent] += 1;
        lists.push(vec![parent]);
    }
    lists
}

fn add_extra_parents(lists: &mut [Vec<usize>], extra: usize, rng: &mut StdRng) {
    for node in 2..lists.len() {
        for _ in 0..rng.gen_range(0..=extra) {
            let candidate = rng.gen_range(0..node);
            if !lists[node].contains(&candidate) {
                lists[node].push(candidate);
            }
        }
    }
}

fn build_synsets(parent_lists: &[Vec<usize>], rng: &mut StdRng) -> Vec<Synset> {
    let mut depths = vec![0usize; parent_lists.len()];
    for (idx, parents) in parent_lists.iter().enumerate() {
        if let Some(&first) = parents.first() {
            depths[idx] = depths[first] + 1;
        }
    }
    let mut synsets: Vec<Synset> = parent_lists
        .iter()
        .enumerate()
        .map(|(idx, parents)| {
            let mut synset = Synset::new(synset_id(idx), PartOfSpeech::Noun)
                .with_literal(Literal::new(format!("word{idx}"), "1"))
                .with_information_content(depths[idx] as f64 + rng.r#gen::<f64>());
            if rng.gen_bool(0.2) {
                synset = synset.with_literal(Literal::new(format!("word{}", idx / 2), "2"));
            }
            for &parent in parents {
                synset = synset.with_relation(synset_id(parent), HYPERNYM);
            }
            synset
        })
        .collect();
    for (idx, parents) in parent_lists.iter().enumerate() {
        for &parent in parents {
            synsets[parent]
                .relations
                .push(Relation::new(synset_id(parent), synset_id(idx), HYPONYM));
        }
    }
    synsets
}
