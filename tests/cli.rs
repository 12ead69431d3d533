use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn autoxiso(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("autoxiso").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("--output-format")
        .arg("plain");
    cmd
}

#[test]
fn test_exit_command() {
    let dir = TempDir::new().unwrap();

    autoxiso(&dir)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Auto Xiso Extractor"))
        .stdout(predicate::str::contains("[Detect] - Detects ROMs"))
        .stdout(predicate::str::contains("Exiting AutoXiso..."));

    assert!(dir.path().join("input").is_dir(), "initial scan creates ./input/");
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    let dir = TempDir::new().unwrap();

    autoxiso(&dir)
        .write_stdin("")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Exiting AutoXiso..."));
}

#[test]
fn test_detect_and_list_scenario() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input");
    fs::create_dir(&input).unwrap();
    for name in ["x.iso", "y.xiso", "z.txt"] {
        fs::write(input.join(name), b"").unwrap();
    }

    autoxiso(&dir)
        .write_stdin("[List]\n\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Detected 2 ROMs"))
        .stdout(predicate::str::contains("Detected ROMs: 2"))
        .stdout(predicate::str::contains("[List] - Lists detected ROMs"))
        .stdout(predicate::str::contains("[0] - x"))
        .stdout(predicate::str::contains("[1] - y"))
        .stdout(predicate::str::contains("Listed 2 ROMs"))
        .stdout(predicate::str::contains("[2]").not());
}

#[test]
fn test_catalog_actions_hidden_without_roms() {
    let dir = TempDir::new().unwrap();

    autoxiso(&dir)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No ROMs detected!"))
        .stdout(predicate::str::contains("[Clear Ext]"))
        .stdout(predicate::str::contains("[List]").not())
        .stdout(predicate::str::contains("[Extract All]").not());
}

#[test]
fn test_invalid_option_message() {
    let dir = TempDir::new().unwrap();

    autoxiso(&dir)
        .write_stdin("dance\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid option. Please try again."));
}

#[test]
fn test_non_utf8_input_is_an_invalid_option() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("output").join("Game.iso")).unwrap();

    let mut stdin = b"\xff\xfe\n".to_vec();
    stdin.extend_from_slice(b"clear ext\ny\n\nexit\n");

    autoxiso(&dir)
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid option. Please try again."))
        .stdout(predicate::str::contains("1 changes made."))
        .stdout(predicate::str::contains("Exiting AutoXiso..."));

    assert!(dir.path().join("output").join("Game").is_dir());
}

#[test]
fn test_quiet_mode_keeps_prompt_feedback() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("Halo.iso"), b"").unwrap();

    autoxiso(&dir)
        .arg("-q")
        .write_stdin("extract one\n7\n0\nmaybe\nn\nback\n\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a valid ROM index!"))
        .stdout(predicate::str::contains("Please enter a valid response."))
        .stdout(predicate::str::contains("Returning to ROM selection..."))
        .stdout(predicate::str::contains("Returning to Main Menu..."));
}

#[test]
fn test_quiet_mode_reports_empty_catalog() {
    let dir = TempDir::new().unwrap();

    autoxiso(&dir)
        .arg("-q")
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Input directory does not exist!"))
        .stdout(predicate::str::contains("No ROMs detected!"));
}

#[test]
fn test_missing_extractor_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("Halo.iso"), b"").unwrap();

    autoxiso(&dir)
        .write_stdin("extract one\n7\n0\ny\n\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a valid ROM index!"))
        .stdout(predicate::str::contains("Chosen ROM: Halo"))
        .stdout(predicate::str::contains("Extracting: Halo"))
        .stderr(predicate::str::contains("extract-xiso is missing!"))
        .stdout(predicate::str::contains("Exiting AutoXiso..."));
}

#[test]
fn test_clear_ext_with_custom_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("extracted");
    fs::create_dir_all(output.join("Game.iso")).unwrap();
    fs::create_dir_all(output.join("NoDot")).unwrap();

    autoxiso(&dir)
        .arg("--output")
        .arg("extracted")
        .write_stdin("clear ext\ny\n\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 changes made."));

    assert!(output.join("Game").is_dir());
    assert!(output.join("NoDot").is_dir());
}

#[test]
fn test_empty_input_path_exits_zero() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("autoxiso.toml"), "[paths]\ninput_dir = \"\"\n").unwrap();

    autoxiso(&dir)
        .write_stdin("detect\n")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Input path is empty!"))
        .stdout(predicate::str::contains("Exiting AutoXiso..."));
}

#[test]
fn test_invalid_config_file_fails_startup() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.toml"), "[paths\n").unwrap();

    autoxiso(&dir)
        .arg("--config")
        .arg("broken.toml")
        .write_stdin("exit\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_generate_config() {
    let dir = TempDir::new().unwrap();

    autoxiso(&dir)
        .arg("--generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated sample configuration file"));

    let content = fs::read_to_string(dir.path().join("autoxiso.toml")).unwrap();
    assert!(content.contains("extract-xiso.exe"));
}
