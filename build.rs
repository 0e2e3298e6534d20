use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=SYSPROFILER_BIN_HINT");

    let Ok(raw_hint) = env::var("SYSPROFILER_BIN_HINT") else {
        return;
    };
    if raw_hint.trim().is_empty() {
        return;
    }

    let candidate = PathBuf::from(raw_hint);
    let canonical = candidate.canonicalize().unwrap_or(candidate);

    println!(
        "cargo:rustc-env=SYSPROFILER_BIN_HINT={}",
        canonical.display()
    );
}
