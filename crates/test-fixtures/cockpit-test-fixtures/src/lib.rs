use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    states: HashMap<String, String>,
    configs: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn lookup<'a>(map: &'a HashMap<String, String>, kind: &str, name: &str) -> Result<&'a str> {
    map.get(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Persisted cockpit state snapshots, one `<NAME> <token>...` line per
/// instrument.
pub mod states {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.states.keys().cloned().collect()
    }

    pub fn text(name: &str) -> Result<String> {
        read_to_string(lookup(&MANIFEST.states, "state", name)?)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        Ok(resolve_path(lookup(&MANIFEST.states, "state", name)?))
    }
}

/// Cockpit configuration JSON documents.
pub mod configs {
    use super::*;

    pub fn json(name: &str) -> Result<String> {
        read_to_string(lookup(&MANIFEST.configs, "config", name)?)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let text = json(name)?;
        serde_json::from_str(&text).with_context(|| format!("failed to parse config fixture {name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_entries_exist_on_disk() {
        for key in states::keys() {
            let path = states::path(&key).unwrap();
            assert!(path.exists(), "missing state fixture {}", path.display());
        }
        assert!(configs::json("slow_needles").is_ok());
        assert!(states::text("nope").is_err());
    }
}
