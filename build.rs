//! Build script: validates welcome.json at compile time.

use std::path::PathBuf;

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    let config_path: PathBuf = [&manifest_dir, "config", "welcome.json"].iter().collect();
    println!("cargo:rerun-if-changed={}", config_path.display());
    let json = std::fs::read_to_string(&config_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. welcome.json must exist and be valid.",
            config_path.display(),
            e
        )
    });
    #[derive(serde::Deserialize)]
    #[allow(dead_code)]
    struct QuickReplyEntry {
        label: String,
        value: String,
    }
    #[derive(serde::Deserialize)]
    #[allow(dead_code)]
    struct WelcomeEntry {
        text: String,
        options: Vec<QuickReplyEntry>,
    }
    let welcome: WelcomeEntry = serde_json::from_str(&json).unwrap_or_else(|e| {
        panic!(
            "welcome.json is invalid JSON: {}. Fix the file and rebuild.",
            e
        )
    });
    if welcome.text.trim().is_empty() {
        panic!("welcome.json: text must not be empty");
    }
    if welcome.options.iter().any(|o| o.value.trim().is_empty()) {
        panic!("welcome.json: every quick reply needs a non-empty value");
    }
}
