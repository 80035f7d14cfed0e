use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn collate_cmd() -> Command {
    let mut cmd = Command::cargo_bin("collate").unwrap();
    cmd.env_remove("COLLATE_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[allow(dead_code)]
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}
