use curio_core::{tag_index, Item, Session};

fn item(name: &str, tags: &[&str]) -> Item {
    Item {
        name: name.into(),
        brand: None,
        model: None,
        notes: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image: None,
        links: Vec::new(),
    }
}

#[test]
fn sorted_and_deduplicated() {
    let items = vec![
        item("a", &["vintage", "audio"]),
        item("b", &["audio", "kitchen"]),
        item("c", &[]),
    ];
    assert_eq!(tag_index(&items), ["audio", "kitchen", "vintage"]);
}

#[test]
fn empty_catalog_yields_empty_index() {
    assert!(tag_index(&[]).is_empty());
}

#[test]
fn case_variants_are_distinct_tags() {
    let items = vec![item("a", &["Audio", "audio"])];
    assert_eq!(tag_index(&items), ["Audio", "audio"]);
}

#[test]
fn session_exposes_index_built_at_construction() {
    let s = Session::new(vec![item("a", &["b", "a"])]);
    assert_eq!(s.tags(), ["a", "b"]);
}
