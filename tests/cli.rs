use std::{fs, process::Command};

fn dbg2txt() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dbg2txt"))
}

#[test]
fn test_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let dot = dir.path().join("graph.dot");
    fs::write(&dot, "0 ACGT\n0 -> 1\n1 GTAC\n").unwrap();
    let output = dbg2txt().arg("3").arg(&dot).arg("--verify").output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "2\n1 ACGT\nAC\n");
}

#[test]
fn test_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let dot = dir.path().join("graph.dot");
    let txt = dir.path().join("graph.txt");
    fs::write(&dot, "0 ACGT\n0 -> 1\n1 GTAC\n").unwrap();
    let status = dbg2txt()
        .arg("3")
        .arg(&dot)
        .arg("--output")
        .arg(&txt)
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read_to_string(&txt).unwrap(), "2\n1 ACGT\nAC\n");
}

#[test]
fn test_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let dot = dir.path().join("graph.dot");
    let txt = dir.path().join("graph.txt");
    fs::write(&dot, "0 ACGT\n0 -> 1\n1 GT\n").unwrap();
    let output = dbg2txt()
        .arg("3")
        .arg(&dot)
        .arg("-o")
        .arg(&txt)
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(!txt.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_error_message_without_logging() {
    let dir = tempfile::tempdir().unwrap();
    let dot = dir.path().join("graph.dot");
    fs::write(&dot, "0 ACGT\n1 GTAC\n0 -> 1\n").unwrap();
    let output = dbg2txt()
        .env("RUST_LOG", "off")
        .arg("3")
        .arg(&dot)
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("line 3: edge source 0 does not match the current vertex 1"));
}

#[test]
fn test_invalid_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let dot = dir.path().join("graph.dot");
    fs::write(&dot, "0 ACGT\n").unwrap();
    for k in &["0", "-1", "k"] {
        let output = dbg2txt().arg(k).arg(&dot).output().unwrap();
        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
    }
    let output = dbg2txt()
        .arg("3")
        .arg(dir.path().join("missing.dot"))
        .output()
        .unwrap();
    assert!(!output.status.success());
}
