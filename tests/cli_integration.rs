//! Integration tests that run the CLI binary.

/// Nothing listens on port 1, so requests fail fast.
const DEAD_URL: &str = "http://127.0.0.1:1/api/chat";

fn bin() -> std::process::Command {
    // CARGO_BIN_EXE_<name> uses the binary target name; hyphens require concat! for env!()
    let bin = env!(concat!("CARGO_BIN_EXE_foodies", "-", "chat"));
    let mut cmd = std::process::Command::new(bin);
    cmd.env_remove("FOODIES_CHAT_URL")
        .env_remove("FOODIES_CHAT_TIMEOUT_SECS")
        .env_remove("FOODIES_MENU_VIEW");
    cmd
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let output = bin()
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--prompt"));
    assert!(stdout.contains("FOODIES_CHAT_URL"));
}

#[test]
fn cli_version_succeeds() {
    let output = bin()
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("foodies-chat"));
}

#[test]
fn config_shows_endpoint_from_env() {
    // Run from temp dir so dotenv() won't load .env from project root
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .arg("config")
        .env("FOODIES_CHAT_URL", "http://localhost:5000/api/chat")
        .env("FOODIES_CHAT_TIMEOUT_SECS", "15")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("http://localhost:5000/api/chat"), "{}", stdout);
    assert!(stdout.contains("15s"), "{}", stdout);
}

#[test]
fn url_flag_overrides_env() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["config", "--url", "https://chat.example.com/api/chat"])
        .env("FOODIES_CHAT_URL", "http://localhost:5000/api/chat")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("https://chat.example.com/api/chat"));
    assert!(!stdout.contains("localhost:5000"));
}

#[test]
fn invalid_timeout_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .arg("config")
        .env("FOODIES_CHAT_TIMEOUT_SECS", "soon")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("FOODIES_CHAT_TIMEOUT_SECS"),
        "expected timeout error message, got: {}",
        stderr
    );
}

#[test]
fn prompt_against_dead_backend_prints_apology() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["-p", "Where are you located?", "--url", DEAD_URL])
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Oops! Something went wrong"),
        "got: {}",
        stdout
    );
}

#[test]
fn empty_prompt_is_rejected() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["-p", "   ", "--url", DEAD_URL])
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("empty prompt"));
}

#[test]
fn status_against_dead_backend_fails() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["status", "--url", DEAD_URL])
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not reachable"));
}
