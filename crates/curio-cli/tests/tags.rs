mod common;
use common::TestEnv;

#[test]
fn tags_are_sorted_and_deduplicated() {
    let t = TestEnv::new();
    t.write_catalog(
        r#"[{"name":"a","tags":["vintage","audio"]},
            {"name":"b","tags":["audio","kitchen"]},
            {"name":"c"}]"#,
    );
    let out = t.bin().arg("tags").assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, ["audio", "kitchen", "vintage"]);
}

#[test]
fn empty_catalog_has_no_tags() {
    let t = TestEnv::new();
    t.write_catalog("[]");
    t.bin().arg("tags").assert().success().stdout("");
}
