//! Build script for items-rs
//!
//! Stamps the short git hash into `GIT_HASH`, reported by `/health`.

use std::process::Command;

fn main() {
    let git_hash = std::env::var("ITEMS_GIT_HASH")
        .ok()
        .or_else(short_git_hash)
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=GIT_HASH={}", git_hash);

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
    println!("cargo:rerun-if-env-changed=ITEMS_GIT_HASH");
}

fn short_git_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}
