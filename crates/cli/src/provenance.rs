use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Sidecar document written next to every timing artifact.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub hull2d_version: &'static str,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Provenance {
    pub fn for_artifact(artifact: &Path, params: Value) -> Self {
        Self {
            code_rev: current_git_rev(),
            hull2d_version: hull2d::VERSION,
            params,
            outputs: vec![artifact.to_string_lossy().into_owned()],
        }
    }
}

/// Write `<stem>.provenance.json` beside `artifact` and return its path.
pub fn write_sidecar(artifact: &Path, params: Value) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    let doc = Provenance::for_artifact(artifact, params);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
