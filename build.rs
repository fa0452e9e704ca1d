//! Stamps the commit and build time read by `src/build_info.rs`.
//!
//! Both values can be pinned from the environment for reproducible builds.

use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const COMMIT_VAR: &str = "SCREENKIT_BUILD_GIT_HASH";
const TIMESTAMP_VAR: &str = "SCREENKIT_BUILD_TIMESTAMP";

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let commit = pinned(COMMIT_VAR).unwrap_or_else(|| {
        git_describe().unwrap_or_else(|| "unknown".to_string())
    });
    let timestamp = pinned(TIMESTAMP_VAR)
        .or_else(|| pinned("SOURCE_DATE_EPOCH").map(|secs| format!("unix:{secs}")))
        .unwrap_or_else(now_unix);

    println!("cargo:rustc-env={COMMIT_VAR}={commit}");
    println!("cargo:rustc-env={TIMESTAMP_VAR}={timestamp}");
}

/// Non-empty value of `name`, registering it as a rebuild trigger.
fn pinned(name: &str) -> Option<String> {
    println!("cargo:rerun-if-env-changed={name}");
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn git_describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=12"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    (!described.is_empty()).then(|| described.to_string())
}

fn now_unix() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    format!("unix:{secs}")
}
