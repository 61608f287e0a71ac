use lexnet::{
    BreadthFirstWalk, Literal, PartOfSpeech, Relation, Synset, WalkStep, WordNet, WordNetError,
};

fn build_network(edges: &[(&str, &str, &str)]) -> WordNet {
    let mut synsets: Vec<Synset> = Vec::new();
    for &(from, to, _) in edges {
        for id in [from, to] {
            if !synsets.iter().any(|s| s.id == id) {
                synsets.push(
                    Synset::new(id, PartOfSpeech::Noun)
                        .with_literal(Literal::new(id.to_lowercase(), "1")),
                );
            }
        }
    }
    for &(from, to, relation) in edges {
        if let Some(synset) = synsets.iter_mut().find(|s| s.id == from) {
            synset.relations.push(Relation::new(from, to, relation));
        }
    }
    WordNet::from_synsets(synsets)
}

fn collect(walk: BreadthFirstWalk<'_>) -> Vec<String> {
    walk.collect::<Result<Vec<_>, _>>().expect("walk")
}

#[test]
fn test_walk_visits_in_breadth_first_order() {
    let network = build_network(&[
        ("A", "B", "hypernym"),
        ("A", "C", "hypernym"),
        ("B", "D", "hypernym"),
        ("C", "E", "hypernym"),
    ]);
    let walk = BreadthFirstWalk::new(&network, "A", false, &["hypernym"]);
    assert_eq!(collect(walk), vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn test_cycle_visits_each_node_once() {
    let network = build_network(&[("A", "B", "hypernym"), ("B", "A", "hypernym")]);
    let mut walk = BreadthFirstWalk::new(&network, "A", false, &["hypernym"]);
    let mut visited = Vec::new();
    while walk.has_more_synsets() {
        match walk.next_synset().expect("step") {
            WalkStep::Visited(id) => visited.push(id),
            WalkStep::Exhausted => break,
        }
    }
    assert_eq!(visited, vec!["A", "B"]);
    assert!(!walk.has_more_synsets());
    assert_eq!(walk.next_synset().expect("step"), WalkStep::Exhausted);
}

#[test]
fn test_wildcard_filter_conflicts_on_first_step() {
    let network = build_network(&[("A", "B", "hypernym")]);
    let mut walk = BreadthFirstWalk::new(&network, "A", true, &["*"]);
    let err = walk.next_synset().unwrap_err();
    assert!(matches!(
        err,
        WordNetError::FilterConflict {
            ref synset,
            allow_all_relations: true
        } if synset == "A"
    ));
    // the root stays queued, so the error repeats
    assert!(walk.has_more_synsets());
    assert!(walk.next_synset().is_err());
}

#[test]
fn test_empty_filter_without_allow_all_conflicts() {
    let network = build_network(&[("A", "B", "hypernym")]);
    let mut walk = BreadthFirstWalk::new::<&str>(&network, "A", false, &[]);
    assert!(matches!(
        walk.next_synset(),
        Err(WordNetError::FilterConflict {
            allow_all_relations: false,
            ..
        })
    ));
}

#[test]
fn test_allow_all_skips_filtered_types() {
    let network = build_network(&[
        ("A", "B", "hypernym"),
        ("A", "C", "hyponym"),
        ("A", "D", "antonym"),
    ]);
    let walk = BreadthFirstWalk::new(&network, "A", true, &["hyponym"]);
    assert_eq!(collect(walk), vec!["A", "B", "D"]);
}

#[test]
fn test_allow_all_groups_targets_by_relation_type() {
    let network = build_network(&[
        ("A", "B", "hypernym"),
        ("A", "C", "antonym"),
        ("A", "D", "hypernym"),
    ]);
    let walk = BreadthFirstWalk::unfiltered(&network, "A");
    assert_eq!(collect(walk), vec!["A", "B", "D", "C"]);
}

#[test]
fn test_filter_list_order_drives_target_order() {
    let network = build_network(&[("A", "B", "hypernym"), ("A", "C", "instance_hypernym")]);
    let walk = BreadthFirstWalk::new(&network, "A", false, &["instance_hypernym", "hypernym"]);
    assert_eq!(collect(walk), vec!["A", "C", "B"]);
}

#[test]
fn test_walk_from_literal() {
    let network = build_network(&[("A", "B", "hypernym")]);
    let walk = BreadthFirstWalk::from_literal(&network, &Literal::word("a"), false, &["hypernym"])
        .expect("walk");
    assert_eq!(walk.root(), "A");
    assert_eq!(collect(walk), vec!["A", "B"]);

    let missing =
        BreadthFirstWalk::from_literal(&network, &Literal::word("zzz"), false, &["hypernym"]);
    assert!(matches!(missing, Err(WordNetError::NotFound(_))));
}

#[test]
fn test_dangling_target_fails_when_expanded() {
    let network = WordNet::from_synsets(vec![
        Synset::new("A", PartOfSpeech::Noun).with_relation("GHOST", "hypernym"),
    ]);
    let mut walk = BreadthFirstWalk::new(&network, "A", false, &["hypernym"]);
    assert_eq!(walk.next_synset().expect("root"), WalkStep::Visited("A".into()));
    assert!(matches!(walk.next_synset(), Err(WordNetError::NotFound(_))));
}

#[test]
fn test_iterator_stops_after_first_error() {
    let network = build_network(&[("A", "B", "hypernym")]);
    let mut walk = BreadthFirstWalk::new(&network, "A", true, &["*"]);
    assert!(matches!(walk.next(), Some(Err(_))));
    assert!(walk.next().is_none());
}

#[test]
fn test_missing_root_is_not_found() {
    let network = build_network(&[("A", "B", "hypernym")]);
    let mut walk = BreadthFirstWalk::unfiltered(&network, "nope");
    let err = walk.next_synset().unwrap_err();
    assert!(err.is_not_found());
}
