mod common;
use common::TestEnv;

fn theme_out(t: &TestEnv, toggle: bool) -> String {
    let mut cmd = t.bin();
    cmd.arg("theme");
    if toggle {
        cmd.arg("--toggle");
    }
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).unwrap().trim().to_string()
}

#[test]
fn starts_unset() {
    let t = TestEnv::new();
    assert_eq!(theme_out(&t, false), "unset");
}

#[test]
fn toggle_cycles_through_dark_and_light_back_to_unset() {
    let t = TestEnv::new();
    assert_eq!(theme_out(&t, true), "dark");
    assert_eq!(theme_out(&t, true), "light");
    assert_eq!(theme_out(&t, true), "unset");
    // persisted between invocations
    assert_eq!(theme_out(&t, false), "unset");
    assert_eq!(theme_out(&t, true), "dark");
    assert_eq!(theme_out(&t, false), "dark");
}
