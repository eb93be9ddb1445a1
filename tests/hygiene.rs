//! Hygiene: source-level checks on the production tree.
//!
//! The binder runs inside other people's pages, so a panic or an unhandled
//! JS exception takes their page's interactivity down with it. Budgets are
//! zero; if one must grow, fix an existing hit first.
//!
//! Browser types are confined to the host modules so every feature core can
//! be tested natively.

use std::fs;
use std::path::Path;

/// `(pattern, budget, why)` for every banned pattern.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "aborts the page's wasm instance"),
    ("unreachable!(", 0, "aborts the page's wasm instance"),
    ("todo!(", 0, "unfinished code"),
    ("unimplemented!(", 0, "unfinished code"),
    ("let _ =", 0, "discards an error without logging it"),
    (".ok()", 0, "discards an error without logging it"),
    ("println!(", 0, "use the log facade"),
    ("eprintln!(", 0, "use the log facade"),
    ("#[allow(dead_code)]", 0, "delete dead code instead"),
];

/// Only these files may name browser bindings directly.
const BROWSER_MODULES: &[&str] = &["dom.rs", "store.rs", "error.rs"];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn production_sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
    assert!(files.iter().all(|f| !f.path.ends_with("_test.rs")));
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, why) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *budget {
            failures.push(format!("{pattern} ({why}): found {count}, max {budget}\n{}", format_hits(&found)));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn browser_bindings_stay_in_host_modules() {
    let files = source_files();
    let offenders: Vec<(String, usize)> = ["web_sys::", "js_sys::", "wasm_bindgen"]
        .iter()
        .flat_map(|pattern| hits(&files, pattern))
        .filter(|(path, _)| !BROWSER_MODULES.iter().any(|m| path.ends_with(m)))
        .collect();
    assert!(offenders.is_empty(), "browser bindings outside host modules:\n{}", format_hits(&offenders));
}

#[test]
fn browser_host_is_feature_gated() {
    let lib = fs::read_to_string("src/lib.rs").unwrap_or_default();
    assert!(lib.contains("#[cfg(feature = \"hydrate\")]\npub mod dom;"), "dom must only build with `hydrate`");
}
