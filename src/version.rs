//! Version string assembly.
//!
//! Dev builds append the git commit hash and build date emitted by the
//! build script; official builds (the `release` feature) get the clean
//! crate version only.

/// Full version string for `--version` output.
pub fn version_string() -> String {
    let base = env!("CARGO_PKG_VERSION");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if sha != "unknown" => {
            let short = &sha[..sha.len().min(7)];
            format!("{} ({} {})", base, short, env!("KED_BUILD_DATE"))
        }
        _ => base.to_string(),
    }
}
