use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

pub const SAMPLE: &str = "INTEGER :: X
X = 5
PRINT *, \"Value:\", X
IF X == 5 THEN
PRINT *, \"Matched\"
END IF
DO I = 1, 3
PRINT *, I
END DO
";

/// Runs a script through `node` and returns its stdout. Tests calling this are
/// `#[ignore]`d and fail outright when node is missing.
#[allow(dead_code)]
pub fn execute_js(script: &str) -> String {
    let mut child = Command::new("node")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("node must be on PATH for `cargo test -- --ignored`");
    child
        .stdin
        .take()
        .expect("node stdin")
        .write_all(script.as_bytes())
        .expect("write script");
    let out = child.wait_with_output().expect("node output");
    assert!(out.status.success(), "node failed on:\n{script}");
    String::from_utf8_lossy(&out.stdout).into_owned()
}

/// Fresh scratch directory per test under the system temp dir.
#[allow(dead_code)]
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fortscript-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}
