use lexnet::{Literal, PartOfSpeech, Synset, WordNet};

fn build_network() -> WordNet {
    WordNet::from_synsets(vec![
        Synset::new("N1", PartOfSpeech::Noun)
            .with_literal(Literal::new("bank", "1"))
            .with_literal(Literal::new("shore", "1")),
        Synset::new("N2", PartOfSpeech::Noun).with_literal(Literal::new("bank", "2")),
        Synset::new("V1", PartOfSpeech::Verb).with_literal(Literal::new("bank", "1")),
        Synset::new("N3", PartOfSpeech::Noun).with_literal(Literal::word("river")),
    ])
}

#[test]
fn test_synsets_from_literal_without_sense() {
    let network = build_network();
    let ids: Vec<&str> = network
        .get_synsets_from_literal(&Literal::word("bank"), None)
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(ids, vec!["N1", "N2", "V1"]);
}

#[test]
fn test_synsets_from_literal_with_pos_filter() {
    let network = build_network();
    let ids: Vec<&str> = network
        .get_synsets_from_literal(&Literal::new("bank", "1"), Some(PartOfSpeech::Noun))
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(ids, vec!["N1"]);
}

#[test]
fn test_ids_from_literal_and_containment() {
    let network = build_network();
    assert_eq!(network.get_ids_from_literal(&Literal::new("bank", "2")), vec!["N2"]);
    assert!(network.contains_literal(&Literal::word("shore")));
    assert!(!network.contains_literal(&Literal::new("shore", "7")));
    assert!(!network.contains_literal(&Literal::word("missing")));
    // an absent sense on the stored literal matches any requested sense
    assert!(network.contains_literal(&Literal::new("river", "3")));
}

#[test]
fn test_resolution_is_first_in_insertion_order() {
    let network = build_network();
    let first = network
        .get_synset_from_literal(&Literal::word("bank"))
        .expect("bank");
    assert_eq!(first.id, "N1");
}

#[test]
fn test_resolution_with_unmatched_sense_is_none() {
    let network = build_network();
    let second = network
        .get_synset_from_literal(&Literal::new("bank", "2"))
        .expect("bank:2");
    assert_eq!(second.id, "N2");
    assert!(network.get_synset_from_literal(&Literal::new("bank", "9")).is_none());
    // no literal of the synset carries sense 1
    assert!(network.get_synset_from_literal(&Literal::new("river", "1")).is_none());
}

#[test]
fn test_resolution_with_sense_accepts_any_literal_carrying_it() {
    let network = WordNet::from_synsets(vec![
        Synset::new("S1", PartOfSpeech::Noun)
            .with_literal(Literal::word("cat"))
            .with_literal(Literal::new("feline", "1")),
        Synset::new("S2", PartOfSpeech::Noun).with_literal(Literal::new("cat", "2")),
    ]);
    assert!(network.contains_literal(&Literal::new("cat", "1")));
    let resolved = network
        .get_synset_from_literal(&Literal::new("cat", "1"))
        .expect("cat:1");
    assert_eq!(resolved.id, "S1");
    assert_eq!(
        network
            .get_synset_from_literal(&Literal::new("cat", "2"))
            .map(|s| s.id.as_str()),
        Some("S2")
    );
    assert!(network.get_synset_from_literal(&Literal::new("cat", "3")).is_none());
}

#[test]
fn test_resolution_tracks_index_updates() {
    let mut network = build_network();
    network.remove_synset("N1");
    let first = network
        .get_synset_from_literal(&Literal::word("bank"))
        .expect("bank");
    assert_eq!(first.id, "N2");
    assert!(!network.contains_literal(&Literal::word("shore")));
}
