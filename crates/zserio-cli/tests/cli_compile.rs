use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn zserio_cmd() -> Command {
    Command::cargo_bin("zserio").unwrap()
}

#[test]
fn test_invalid_java_home_fails_with_java_not_found() {
    let tmp = tempfile::TempDir::new().unwrap();
    let bogus = tmp.path().join("no-such-jdk");

    zserio_cmd()
        .env("JAVA_HOME", &bogus)
        .arg("-version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Java not found"));
}

#[cfg(unix)]
#[test]
fn test_missing_jar_is_reported() {
    use std::os::unix::fs::PermissionsExt;

    // A JAVA_HOME with a fake java binary gets past resolution, so the
    // missing bundled jar is the next failure.
    let tmp = tempfile::TempDir::new().unwrap();
    let bin = tmp.path().join("bin");
    std::fs::create_dir_all(&bin).unwrap();
    let java = bin.join("java");
    std::fs::write(&java, "#!/bin/sh\nexit 0\n").unwrap();
    std::fs::set_permissions(&java, std::fs::Permissions::from_mode(0o755)).unwrap();

    zserio_cmd()
        .env("JAVA_HOME", tmp.path())
        .env("ZSERIO_JAR", tmp.path().join("absent.jar"))
        .arg("-version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("compiler jar not found"));
}

#[cfg(unix)]
#[test]
fn test_exit_code_is_passed_through() {
    use std::os::unix::fs::PermissionsExt;

    // Stand-in "java" that exits 3 regardless of arguments; the zserio
    // binary must surface exactly that code.
    let tmp = tempfile::TempDir::new().unwrap();
    let bin = tmp.path().join("bin");
    std::fs::create_dir_all(&bin).unwrap();
    let java = bin.join("java");
    std::fs::write(&java, "#!/bin/sh\nexit 3\n").unwrap();
    std::fs::set_permissions(&java, std::fs::Permissions::from_mode(0o755)).unwrap();

    let jar = tmp.path().join("zserio.jar");
    std::fs::write(&jar, b"fake jar").unwrap();

    zserio_cmd()
        .env("JAVA_HOME", tmp.path())
        .env("ZSERIO_JAR", &jar)
        .args(["schema.zs", "-python", "out"])
        .assert()
        .code(3);
}
