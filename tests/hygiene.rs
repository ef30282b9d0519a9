//! Hygiene: source-level budgets checked at test time.
//!
//! Pointer handlers must never take the page down, so the engine's source tree
//! is scanned for panicking calls, swallowed errors and stray console output.
//! Budgets only ratchet down.

use std::fs;
use std::path::{Path, PathBuf};

struct SourceFile {
    path: PathBuf,
    content: String,
}

/// Production `.rs` files under `src/`; `*_test.rs` files are skipped.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

/// Assert that `patterns` occur on at most `max` source lines in total.
fn assert_budget(patterns: &[&str], max: usize, hint: &str) {
    let files = source_files();
    let mut offenders = Vec::new();
    let mut total = 0;
    for file in &files {
        let count = file
            .content
            .lines()
            .filter(|line| patterns.iter().any(|p| line.contains(p)))
            .count();
        if count > 0 {
            offenders.push(format!("  {}: {count}", file.path.display()));
            total += count;
        }
    }
    assert!(
        total <= max,
        "{patterns:?} budget exceeded: found {total}, max {max}. {hint}\n{}",
        offenders.join("\n")
    );
}

// =============================================================
// Panics: a panic in a pointer handler aborts the wasm instance.
// =============================================================

#[test]
fn unwrap_budget() {
    assert_budget(&[".unwrap()"], 0, "Fall back to a default or return early.");
}

#[test]
fn expect_budget() {
    assert_budget(&[".expect("], 0, "Fall back to a default or return early.");
}

#[test]
fn panic_budget() {
    assert_budget(&["panic!(", "unreachable!("], 0, "Make the operation total.");
}

#[test]
fn stub_budget() {
    assert_budget(&["todo!(", "unimplemented!("], 0, "Implement it or leave the intent inert.");
}

// =============================================================
// Silent loss: errors dropped without a log line.
// =============================================================

#[test]
fn silent_discard_budget() {
    assert_budget(&["let _ ="], 0, "Log the error with tracing.");
}

#[test]
fn dot_ok_budget() {
    assert_budget(&[".ok()"], 0, "Log the error with tracing.");
}

// =============================================================
// Style
// =============================================================

#[test]
fn allow_dead_code_budget() {
    assert_budget(&["#[allow(dead_code)]"], 0, "Delete the code instead.");
}

#[test]
fn console_output_budget() {
    assert_budget(&["println!(", "dbg!(", "console::log"], 0, "Use tracing.");
}

#[test]
fn sources_were_found() {
    assert!(source_files().len() >= 10, "hygiene scan found too few files; is the cwd the crate root?");
}
