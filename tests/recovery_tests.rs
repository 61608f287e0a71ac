use std::io::Cursor;

use lexnet::{
    Literal, PartOfSpeech, Relation, Synset, WordNet, WordNetError,
    recovery::{
        dump_network_to_path, dump_network_to_writer, load_network_from_path,
        load_network_from_reader,
    },
};

fn rich_network() -> WordNet {
    let mut full = Synset::new("ENG30-00000002-n", PartOfSpeech::Noun)
        .with_literal(Literal::new("bank", "1"))
        .with_literal(Literal::word("shore"))
        .with_definition("sloping land beside a body of water")
        .with_information_content(3.25);
    full.usage = vec!["they pulled the canoe up on the bank".to_string()];
    full.relations
        .push(Relation::new("ENG30-00000002-n", "ENG30-00000001-n", "hypernym").with_literals("bank", "slope"));
    full.domain = Some("geography".to_string());
    full.pwn20 = vec!["ENG20-09213565-n".to_string()];
    full.sumo = Some("LandArea".to_string());
    full.sumo_type = Some("+".to_string());
    full.sentiwn_positive = Some("0.0".to_string());
    full.nl = Some("yes".to_string());

    let mut placeholder = Synset::new("ENG30-00000001-n", PartOfSpeech::Noun);
    placeholder.non_lexicalized = true;

    let mut network = WordNet::from_synsets(vec![
        full,
        placeholder,
        Synset::new("ENG30-00000003-v", PartOfSpeech::Verb).with_literal(Literal::new("bank", "3")),
    ]);
    network.get_new_incremental_id("ENG30-", "-n");
    network
}

fn assert_same_network(left: &WordNet, right: &WordNet) {
    assert_eq!(left.len(), right.len());
    for (a, b) in left.synsets().iter().zip(right.synsets()) {
        assert_eq!(a, b);
        for (la, lb) in a.literals.iter().zip(&b.literals) {
            assert!(la.same_as(lb));
        }
    }
    assert_eq!(left.last_incremental_id(), right.last_incremental_id());
}

#[test]
fn test_dump_and_load_through_memory() {
    let network = rich_network();
    let mut buffer = Vec::new();
    dump_network_to_writer(&network, &mut buffer).expect("dump");
    let text = String::from_utf8(buffer.clone()).expect("utf8");
    assert_eq!(text.lines().count(), network.len() + 1);
    assert!(text.lines().next().expect("header").contains("\"type\":\"header\""));

    let loaded = load_network_from_reader(Cursor::new(buffer)).expect("load");
    assert_same_network(&network, &loaded);
    assert_eq!(loaded.synset_ids_for_word("bank").len(), 2);
}

#[test]
fn test_dump_and_load_through_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("network.jsonl");
    let network = rich_network();
    dump_network_to_path(&network, &path).expect("dump");
    let mut loaded = load_network_from_path(&path).expect("load");
    assert_same_network(&network, &loaded);
    assert_eq!(loaded.get_new_incremental_id("ENG30-", "-n"), "ENG30-00000004-n");
}

#[test]
fn test_load_rejects_unknown_version() {
    let input = "{\"type\":\"header\",\"version\":99,\"incremental_id\":null}\n";
    let err = load_network_from_reader(Cursor::new(input)).unwrap_err();
    assert!(matches!(err, WordNetError::InvalidInput(_)));
}

#[test]
fn test_load_reports_malformed_line() {
    let input = "{\"type\":\"header\",\"version\":1,\"incremental_id\":null}\nnot json\n";
    let err = load_network_from_reader(Cursor::new(input)).unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = load_network_from_path(dir.path().join("absent.jsonl"));
    assert!(matches!(result, Err(WordNetError::InvalidInput(_))));
}

#[test]
fn test_non_finite_information_content_survives_dump() {
    let network = WordNet::from_synsets(vec![
        Synset::new("A", PartOfSpeech::Noun).with_information_content(f64::INFINITY),
        Synset::new("B", PartOfSpeech::Noun).with_information_content(f64::NEG_INFINITY),
        Synset::new("C", PartOfSpeech::Noun).with_information_content(f64::NAN),
        Synset::new("D", PartOfSpeech::Noun).with_information_content(0.5),
    ]);
    let mut buffer = Vec::new();
    dump_network_to_writer(&network, &mut buffer).expect("dump");
    let text = String::from_utf8(buffer.clone()).expect("utf8");
    assert!(!text.contains("null"));

    let loaded = load_network_from_reader(Cursor::new(buffer)).expect("load");
    let ic = |id: &str| {
        loaded
            .get_synset_by_id(id)
            .expect("synset")
            .information_content
    };
    assert_eq!(ic("A"), f64::INFINITY);
    assert_eq!(ic("B"), f64::NEG_INFINITY);
    assert!(ic("C").is_nan());
    assert_eq!(ic("D"), 0.5);
    assert_same_network(&network, &loaded);
}

#[test]
fn test_load_rejects_unparsable_information_content() {
    let network = WordNet::from_synsets(vec![
        Synset::new("A", PartOfSpeech::Noun).with_information_content(f64::NAN),
    ]);
    let mut buffer = Vec::new();
    dump_network_to_writer(&network, &mut buffer).expect("dump");
    let text = String::from_utf8(buffer)
        .expect("utf8")
        .replace("\"NaN\"", "\"plenty\"");
    let err = load_network_from_reader(Cursor::new(text)).unwrap_err();
    assert!(matches!(err, WordNetError::InvalidInput(_)));
    assert!(err.to_string().contains("line 2"));
}
