use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::discover::SkippedSite;
use crate::mutants::Mutant;

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub file: String,
    pub dialect: String,
    pub total: usize,
    pub skipped: usize,
    pub by_operator: BTreeMap<String, usize>,
    pub duration_ms: u64,
    pub out_dir: Option<String>,
    pub mutants: Vec<MutantRecord>,
    pub skipped_sites: Vec<SkippedSite>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MutantRecord {
    pub ref_id: String,
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub operator: String,
    pub original: String,
    pub replacement: String,
    pub diff: String,
    pub context_before: Vec<String>,
    pub context_after: Vec<String>,
    pub saved_path: Option<String>,
}

impl MutantRecord {
    pub fn new(mutant: &Mutant, ref_id: String, saved_path: Option<String>) -> MutantRecord {
        let lines: Vec<&str> = mutant.original_source.lines().collect();
        let (context_before, context_after) =
            context_window(&lines, mutant.line.saturating_sub(1), 2);
        MutantRecord {
            ref_id,
            file: mutant.file.to_string(),
            line: mutant.line,
            column: mutant.column,
            operator: mutant.operator.clone(),
            original: mutant.original.clone(),
            replacement: mutant.replacement.clone(),
            diff: mutant.diff(),
            context_before,
            context_after,
            saved_path,
        }
    }
}

fn context_window(lines: &[&str], line_idx: usize, range: usize) -> (Vec<String>, Vec<String>) {
    let line_idx = line_idx.min(lines.len());
    let start = line_idx.saturating_sub(range);
    let end = (line_idx + range + 1).min(lines.len());
    let before: Vec<String> = lines[start..line_idx].iter().map(|s| s.to_string()).collect();
    let after: Vec<String> = if line_idx + 1 < end {
        lines[line_idx + 1..end].iter().map(|s| s.to_string()).collect()
    } else {
        vec![]
    };
    (before, after)
}

fn state_path() -> PathBuf {
    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    dir.join(".mutgen-state.json")
}

pub fn save_last_run(record: &GenerationRecord) {
    if let Ok(json) = serde_json::to_string(record) {
        let _ = std::fs::write(state_path(), json);
    }
}

pub fn load_last_run() -> Option<GenerationRecord> {
    let data = std::fs::read_to_string(state_path()).ok()?;
    serde_json::from_str(&data).ok()
}

pub fn save_to_path(record: &GenerationRecord, path: &std::path::Path) {
    if let Ok(json) = serde_json::to_string(record) {
        let _ = std::fs::write(path, json);
    }
}

pub fn load_from_path(path: &std::path::Path) -> Option<GenerationRecord> {
    let data = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}
