use lexnet::{
    Literal, PartOfSpeech, Synset, WordNet, WordNetError,
    algo::{complement, diff, get_path, get_path_by_literals, intersection, merge, union},
};

fn noun(id: &str, word: &str) -> Synset {
    Synset::new(id, PartOfSpeech::Noun).with_literal(Literal::new(word, "1"))
}

fn pair() -> (WordNet, WordNet) {
    let a = WordNet::from_synsets(vec![
        noun("S1", "dog").with_definition("content1"),
        noun("S2", "cat"),
        noun("S3", "fish"),
    ]);
    let b = WordNet::from_synsets(vec![
        noun("S1", "dog").with_definition("content2"),
        noun("S2", "cat"),
        noun("S4", "bird"),
    ]);
    (a, b)
}

fn chain() -> WordNet {
    WordNet::from_synsets(vec![
        noun("S1", "puppy").with_relation("S2", "hypernym"),
        noun("S2", "dog").with_relation("S3", "hypernym"),
        noun("S3", "animal"),
        noun("S4", "rock"),
    ])
}

#[test]
fn test_diff_and_intersection() {
    let (a, b) = pair();
    assert_eq!(diff(&a, &b), vec!["S1"]);
    assert_eq!(intersection(&a, &b), vec!["S2"]);
}

#[test]
fn test_diff_on_single_conflicting_synset() {
    let a = WordNet::from_synsets(vec![noun("S1", "x").with_definition("content1")]);
    let b = WordNet::from_synsets(vec![noun("S1", "x").with_definition("content2")]);
    assert_eq!(diff(&a, &b), vec!["S1"]);
    assert!(intersection(&a, &b).is_empty());
}

#[test]
fn test_complement_compares_ids_only() {
    let (a, b) = pair();
    assert_eq!(complement(&a, &b), vec!["S3"]);
    assert_eq!(complement(&b, &a), vec!["S4"]);
}

#[test]
fn test_information_content_takes_part_in_equality() {
    let a = WordNet::from_synsets(vec![noun("S1", "x").with_information_content(1.0)]);
    let b = WordNet::from_synsets(vec![noun("S1", "x").with_information_content(2.0)]);
    assert_eq!(diff(&a, &b), vec!["S1"]);
}

#[test]
fn test_nan_information_content_equals_itself() {
    let a = WordNet::from_synsets(vec![
        noun("S1", "dog").with_information_content(f64::NAN),
        noun("S2", "cat").with_information_content(1.0),
    ]);
    let b = a.clone();
    assert_eq!(intersection(&a, &b), vec!["S1", "S2"]);
    assert_eq!(diff(&a, &b), Vec::<&str>::new());
    let mut base = a.clone();
    assert_eq!(union(&mut base, &b).expect("union"), 0);

    let finite = WordNet::from_synsets(vec![noun("S1", "dog").with_information_content(0.0)]);
    assert_eq!(diff(&a, &finite), vec!["S1"]);
}

#[test]
fn test_union_conflict_leaves_base_untouched() {
    let (mut a, b) = pair();
    let before = a.clone();
    let err = union(&mut a, &b).unwrap_err();
    assert!(matches!(err, WordNetError::ContentConflict(ref id) if id == "S1"));
    assert_eq!(a.len(), before.len());
    assert!(!a.contains_id("S4"));
    assert_eq!(a.get_synset_by_id("S1"), before.get_synset_by_id("S1"));
}

#[test]
fn test_union_inserts_missing_synsets() {
    let mut base = WordNet::from_synsets(vec![noun("S1", "dog"), noun("S2", "cat")]);
    let addition = WordNet::from_synsets(vec![noun("S2", "cat"), noun("S5", "owl")]);
    let inserted = union(&mut base, &addition).expect("union");
    assert_eq!(inserted, 1);
    let ids: Vec<&str> = base.ids().collect();
    assert_eq!(ids, vec!["S1", "S2", "S5"]);
    assert_eq!(base.synset_ids_for_word("owl"), ["S5".to_string()]);
}

#[test]
fn test_merge_overwrites_shared_ids() {
    let (mut a, b) = pair();
    let replaced = merge(&mut a, &b);
    assert_eq!(replaced, 2);
    assert_eq!(a.len(), 4);
    assert_eq!(a.get_synset_by_id("S1"), b.get_synset_by_id("S1"));
    assert!(a.contains_id("S3"));
    assert!(a.contains_id("S4"));
}

#[test]
fn test_merge_moves_replaced_synsets_to_the_end() {
    let (mut a, b) = pair();
    merge(&mut a, &b);
    let ids: Vec<&str> = a.ids().collect();
    assert_eq!(ids, vec!["S3", "S1", "S2", "S4"]);
    assert_eq!(a.synset_ids_for_word("dog"), ["S1".to_string()]);
    assert_eq!(a.synset_ids_for_word("fish"), ["S3".to_string()]);
    assert_eq!(
        a.get_synset_by_id("S1").and_then(|s| s.definition.as_deref()),
        Some("content2")
    );
}

#[test]
fn test_get_path_stops_at_target() {
    let network = chain();
    let walk = get_path(&network, "S1", "S2", false, &["hypernym"]).expect("path");
    assert!(walk.reached);
    assert_eq!(walk.synsets, vec!["S1", "S2"]);
    assert_eq!(walk.edge_count(), Some(1));
}

#[test]
fn test_get_path_unreached_returns_whole_walk() {
    let network = chain();
    let walk = get_path(&network, "S1", "S4", false, &["hypernym"]).expect("path");
    assert!(!walk.reached);
    assert_eq!(walk.synsets, vec!["S1", "S2", "S3"]);
    assert_eq!(walk.edge_count(), None);
}

#[test]
fn test_get_path_to_self() {
    let network = chain();
    let walk = get_path(&network, "S3", "S3", false, &["hypernym"]).expect("path");
    assert!(walk.reached);
    assert_eq!(walk.len(), 1);
    assert_eq!(walk.edge_count(), Some(0));
}

#[test]
fn test_get_path_propagates_filter_conflict() {
    let network = chain();
    let result = get_path(&network, "S1", "S3", true, &["*"]);
    assert!(matches!(result, Err(WordNetError::FilterConflict { .. })));
}

#[test]
fn test_get_path_by_literals() {
    let network = chain();
    let walk = get_path_by_literals(
        &network,
        &Literal::word("puppy"),
        &Literal::new("animal", "1"),
        false,
        &["hypernym"],
    )
    .expect("path");
    assert_eq!(walk.synsets, vec!["S1", "S2", "S3"]);

    let missing = get_path_by_literals(
        &network,
        &Literal::word("puppy"),
        &Literal::word("unicorn"),
        false,
        &["hypernym"],
    );
    assert!(matches!(missing, Err(WordNetError::NotFound(_))));
}
