use zserio_util::process::CommandBuilder;

#[test]
fn test_builder_simple_command() {
    let output = CommandBuilder::new("echo").arg("hello").exec().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "hello");
}

#[test]
fn test_builder_multiple_args() {
    let output = CommandBuilder::new("echo")
        .args(["one", "two", "three"])
        .exec()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "one two three");
}

#[test]
fn test_builder_with_env() {
    let output = CommandBuilder::new("sh")
        .arg("-c")
        .arg("echo $MY_TEST_VAR")
        .env("MY_TEST_VAR", "zserio_test_value")
        .exec()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "zserio_test_value");
}

#[test]
fn test_builder_with_cwd() {
    let tmp = tempfile::TempDir::new().unwrap();

    // Write a marker file and verify the command can see it from the cwd.
    let marker = tmp.path().join("zserio_cwd_test.marker");
    std::fs::write(&marker, "ok").unwrap();

    #[cfg(unix)]
    let output = CommandBuilder::new("ls")
        .arg("zserio_cwd_test.marker")
        .cwd(tmp.path().to_str().unwrap())
        .exec()
        .unwrap();

    #[cfg(windows)]
    let output = CommandBuilder::new("cmd")
        .args(["/C", "dir", "/b", "zserio_cwd_test.marker"])
        .cwd(tmp.path().to_str().unwrap())
        .exec()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim().contains("zserio_cwd_test.marker"));
}

#[test]
fn test_builder_nonexistent_program() {
    let result = CommandBuilder::new("nonexistent_program_xyz_123").exec();
    assert!(result.is_err());
}

#[cfg(unix)]
#[test]
fn test_exec_inherit_reports_exit_status() {
    let status = CommandBuilder::new("true").exec_inherit().unwrap();
    assert!(status.success());
    assert_eq!(status.code(), Some(0));

    let status = CommandBuilder::new("false").exec_inherit().unwrap();
    assert!(!status.success());
    assert_eq!(status.code(), Some(1));
}
