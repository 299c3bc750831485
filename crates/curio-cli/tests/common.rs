#![allow(dead_code)]
use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

pub const FIXTURE: &str = r#"[
  {"name":"Tape Deck","brand":"Acme","model":"TD-200","notes":"belt replaced",
   "tags":["audio","vintage"],
   "links":[{"label":"manual","url":"https://example.com/td"}]},
  {"name":"Blender","tags":["kitchen"],"image":"img/blender.jpg"},
  {"name":"<script>alert(1)</script>","tags":["weird"]}
]"#;

pub struct TestEnv {
    _dir: TempDir,
    pub catalog: PathBuf,
    pub cfg: PathBuf,
    pub state: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = dir.path().join("config");
        let state = dir.path().join("state");
        std::fs::create_dir_all(&cfg).expect("cfg dir");
        std::fs::create_dir_all(&state).expect("state dir");
        let catalog = dir.path().join("items.json");
        std::fs::write(&catalog, FIXTURE).expect("catalog fixture");
        Self {
            _dir: dir,
            catalog,
            cfg,
            state,
        }
    }

    pub fn bin(&self) -> Command {
        let mut cmd = Command::cargo_bin("curio").unwrap();
        // Isolate settings and the theme preference from the host.
        cmd.env("XDG_CONFIG_HOME", &self.cfg);
        cmd.env("XDG_STATE_HOME", &self.state);
        cmd.arg("--catalog").arg(&self.catalog);
        cmd
    }

    pub fn write_catalog(&self, json: &str) {
        std::fs::write(&self.catalog, json).expect("catalog");
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
