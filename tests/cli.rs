use assert_cmd::Command;

#[test]
fn so3_trivial() {
    let mut cmd = Command::cargo_bin("so3").unwrap();
    let assert = cmd.write_stdin("0 0 0 0 0 1").assert().success();
    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(out.contains("U(N) irrep dim = 1"), "{out}");
    assert!(out.contains("[0] : 1"), "{out}");
    assert!(out.contains("dim = 1"), "{out}");
}

#[test]
fn so3_fundamental() {
    let mut cmd = Command::cargo_bin("so3").unwrap();
    let assert = cmd.arg("--serial").write_stdin("1 0 0 0 1 2").assert().success();
    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(out.contains("U(N) irrep dim = 3"), "{out}");
    assert!(out.contains("[1] : 1"), "{out}");
    assert!(out.contains("dim = 3"), "{out}");
}

#[test]
fn u3_fundamental() {
    let mut cmd = Command::cargo_bin("u3").unwrap();
    let assert = cmd.arg("--serial").write_stdin("1 0 0 0 1 2").assert().success();
    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(out.contains("U(N) irrep dim = 3"), "{out}");
    assert!(out.contains("[1,0,0] : 1"), "{out}");
    assert!(out.contains("dim = 3"), "{out}");
}

#[test]
fn rejects_mismatched_total() {
    let mut cmd = Command::cargo_bin("so3").unwrap();
    cmd.write_stdin("1 0 0 0 0 1").assert().failure();
}

#[test]
fn rejects_garbage() {
    let mut cmd = Command::cargo_bin("so3").unwrap();
    cmd.write_stdin("not numbers at all").assert().failure();
}
