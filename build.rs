//! Embeds version details shown by `skein --version` (long form).
//!
//! - `SKEIN_GIT_COMMIT`: `git describe --always --dirty` output, or "unknown"
//! - `SKEIN_BUILD_TIMESTAMP`: UTC build time, ISO 8601

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");

    println!("cargo:rustc-env=SKEIN_GIT_COMMIT={}", git_describe().as_deref().unwrap_or("unknown"));
    println!(
        "cargo:rustc-env=SKEIN_BUILD_TIMESTAMP={}",
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    );
}

fn git_describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|out| out.status.success())?;
    let described = String::from_utf8(output.stdout).ok()?;
    Some(described.trim().to_string()).filter(|s| !s.is_empty())
}
