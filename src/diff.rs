// src/diff.rs
use std::collections::HashSet;

use crate::history::HistorySnapshot;

/// Candidates not present in `seen`, in encounter order.
/// A row repeated within the same run (e.g. listed by two sources) is kept once.
pub fn new_entries(candidates: &[String], seen: &HistorySnapshot) -> Vec<String> {
    let mut this_run: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for c in candidates {
        if !seen.contains(c) && this_run.insert(c.as_str()) {
            out.push(c.clone());
        }
    }
    out
}
