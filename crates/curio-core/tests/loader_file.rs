use curio_core::loader::{self, CatalogError, Source};
use tempfile::tempdir;

#[test]
fn loads_items_from_a_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("items.json");
    std::fs::write(
        &path,
        r#"[{"name":"Tape Deck","tags":["audio"]},{"name":"Blender"}]"#,
    )
    .unwrap();
    let items = loader::load(&Source::File(path)).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Tape Deck");
    assert_eq!(items[0].tags, ["audio"]);
    assert!(items[1].tags.is_empty());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = loader::load(&Source::File(dir.path().join("nope.json"))).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn invalid_json_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("items.json");
    std::fs::write(&path, "{not json").unwrap();
    let err = loader::load(&Source::File(path)).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn load_or_empty_substitutes_an_empty_catalog() {
    let dir = tempdir().unwrap();
    let items = loader::load_or_empty(&Source::File(dir.path().join("nope.json")));
    assert!(items.is_empty());
}

#[test]
fn source_parse_distinguishes_urls_from_paths() {
    assert!(matches!(
        Source::parse("https://example.com/items.json"),
        Source::Url(_)
    ));
    assert!(matches!(Source::parse("./items.json"), Source::File(_)));
    assert!(matches!(Source::parse("items.json"), Source::File(_)));
}
