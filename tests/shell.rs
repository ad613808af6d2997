use std::io::Cursor;
use tempfile::TempDir;
use textio::{FileAccess, Shell, ShellConfig};

fn run_script(dir: &TempDir, script: &str) -> String {
    let config = ShellConfig::try_from_args([
        "textio".into(),
        "--dir".into(),
        dir.path().as_os_str().to_os_string(),
    ])
    .expect("parse config");
    let mut shell = Shell::new(
        FileAccess::new(),
        config,
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
    );
    shell.run().expect("shell run");
    String::from_utf8(shell.into_output()).expect("utf-8 transcript")
}

#[test]
fn write_then_read_back_through_menus() {
    let dir = TempDir::new().expect("create temp dir");

    // Write menu: two strings, then back and exit
    run_script(&dir, "5\n3\n0\n0\n");
    let written = std::fs::read_to_string(dir.path().join("test_write.txt")).unwrap();
    assert_eq!(
        written,
        "This is a text string.\nThis is an another text string.\n"
    );

    std::fs::copy(dir.path().join("test_write.txt"), dir.path().join("test.txt")).unwrap();
    let transcript = run_script(&dir, "4\n4\n0\n0\n");
    assert!(transcript.contains(
        r#"["This is a text string.\n", "This is an another text string.\n"]"#
    ));
}

#[test]
fn errors_do_not_end_the_session() {
    let dir = TempDir::new().expect("create temp dir");
    let transcript = run_script(&dir, "4\n2\n0\n7\nbogus\n0\n");
    assert!(transcript.contains("Error: not found"));
    assert!(transcript.contains("Invalid choice!"));
    assert!(transcript.trim_end().ends_with("Enter your choice:"));
}

#[test]
fn copy_uppercases_demo_file() {
    let dir = TempDir::new().expect("create temp dir");
    std::fs::write(dir.path().join("test_in.txt"), "quiet\nwords\n").unwrap();

    let transcript = run_script(&dir, "5\n6\n0\n0\n");

    assert!(transcript.contains("copied 2 lines"));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("test_out.txt")).unwrap(),
        "QUIET\nWORDS\n"
    );
}

#[test]
fn folder_path_reports_directory_and_name() {
    let dir = TempDir::new().expect("create temp dir");
    std::fs::write(dir.path().join("test.txt"), "x").unwrap();

    let transcript = run_script(&dir, "7\n0\n");

    let canonical = std::fs::canonicalize(dir.path()).unwrap();
    assert!(transcript.contains(&format!("({:?}, \"test.txt\")", canonical)));
}
