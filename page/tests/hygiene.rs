//! Hygiene — keeps the behavior core free of panics and swallowed errors.
//!
//! Scans `page/src/` (test files excluded) for patterns the core must not
//! contain. Budgets are zero; a handler that can fail returns nothing or logs.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "panics in the page" },
    Budget { pattern: ".expect(", max: 0, why: "panics in the page" },
    Budget { pattern: "panic!(", max: 0, why: "panics in the page" },
    Budget { pattern: "unreachable!(", max: 0, why: "panics in the page" },
    Budget { pattern: "todo!(", max: 0, why: "unfinished handler" },
    Budget { pattern: "unimplemented!(", max: 0, why: "unfinished handler" },
    Budget { pattern: "let _ =", max: 0, why: "discards a result without looking at it" },
    Budget { pattern: ".ok()", max: 0, why: "drops the error detail" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "hides unused code" },
];

fn collect_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn sources_are_found() {
    let mut files = Vec::new();
    collect_sources(Path::new("src"), &mut files);
    assert!(files.iter().any(|(name, _)| name.ends_with("controller.rs")));
}

#[test]
fn pattern_budgets_hold() {
    let mut files = Vec::new();
    collect_sources(Path::new("src"), &mut files);

    let mut failures = Vec::new();
    for budget in BUDGETS {
        let hits: Vec<String> = files
            .iter()
            .filter_map(|(name, content)| {
                let count = content.lines().filter(|line| line.contains(budget.pattern)).count();
                (count > 0).then(|| format!("  {name}: {count}"))
            })
            .collect();
        let total: usize = files
            .iter()
            .map(|(_, content)| content.lines().filter(|line| line.contains(budget.pattern)).count())
            .sum();
        if total > budget.max {
            failures.push(format!(
                "{} budget exceeded ({}): found {total}, max {}\n{}",
                budget.pattern,
                budget.why,
                budget.max,
                hits.join("\n")
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
