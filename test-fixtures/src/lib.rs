//! Test fixture loader for Veritas golden datasets and integration scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helpers for
//! loading them in tests across crates.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use veritas_core::config::{ConstraintSpec, DecayPolicy};
use veritas_core::models::{Claim, SafetyStatus};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

// ── Typed fixtures ───────────────────────────────────────────────────────

/// One decay curve sample.
#[derive(Debug, Clone, Deserialize)]
pub struct DecayCase {
    pub name: String,
    pub policy: DecayPolicy,
    pub age_seconds: f64,
    pub grace_period_seconds: f64,
    pub half_life_seconds: f64,
    pub floor: f64,
    pub expected: f64,
    pub tolerance: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConsensusExpectation {
    pub agreement_reached: bool,
    pub outlier_sources: Vec<String>,
    #[serde(default)]
    pub consensus_value: Option<serde_json::Value>,
}

/// Claims about one fact and the consensus they should reach.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsensusCase {
    pub name: String,
    pub claims: Vec<Claim>,
    pub expected: ConsensusExpectation,
}

/// A constraint catalogue, an action's metrics and the expected verdict.
#[derive(Debug, Clone, Deserialize)]
pub struct GateCase {
    pub name: String,
    pub constraints: Vec<ConstraintSpec>,
    pub metrics: BTreeMap<String, f64>,
    pub expected_safety: SafetyStatus,
    pub expected_failed: Vec<String>,
}

pub fn decay_cases() -> Vec<DecayCase> {
    load_fixture("golden/decay/curves.json")
}

pub fn consensus_cases() -> Vec<ConsensusCase> {
    load_fixture("golden/consensus/scenarios.json")
}

pub fn gate_cases() -> Vec<GateCase> {
    load_fixture("golden/constraints/gate_scenarios.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_golden_files_exist() {
        let files = [
            "golden/decay/curves.json",
            "golden/consensus/scenarios.json",
            "golden/constraints/gate_scenarios.json",
            "integration/full_lifecycle.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn golden_files_parse_as_json() {
        for dir in ["golden/decay", "golden/consensus", "golden/constraints", "integration"] {
            for file in list_fixtures(dir) {
                let content = std::fs::read_to_string(&file)
                    .unwrap_or_else(|e| panic!("Failed to read {}: {}", file.display(), e));
                let _: serde_json::Value = serde_json::from_str(&content)
                    .unwrap_or_else(|e| panic!("Failed to parse {}: {}", file.display(), e));
            }
        }
    }

    #[test]
    fn typed_fixtures_load() {
        assert!(!decay_cases().is_empty());
        assert!(!consensus_cases().is_empty());
        assert!(!gate_cases().is_empty());
    }
}
