//! Fluent key guards for `dsamate-ui`.
//!
//! - every locale defines exactly the fallback's message ids, once each
//! - every literal `t!("...")` in `src/` exists in the fallback
//! - the fallback carries no ids that the sources never look up

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const EN_US: &str = include_str!("../i18n/en-US/dsamate-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/dsamate-ui.ftl");

// Register new locales here.
const LOCALES: &[(&str, &str)] = &[("es-ES", ES_ES)];

/// Message ids defined at the start of a line (`id = value`). Comments,
/// attributes, variants, and indented continuation lines are skipped.
fn message_ids(src: &str) -> Vec<String> {
    src.lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter(|line| !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'))
        .map(str::to_string)
        .collect()
}

fn unique_ids(locale: &str, src: &str) -> BTreeSet<String> {
    let ids = message_ids(src);
    let mut seen = BTreeSet::new();
    let dups: Vec<_> = ids.iter().filter(|id| !seen.insert((*id).clone())).collect();
    assert!(dups.is_empty(), "{locale} defines ids more than once: {dups:?}");
    seen
}

/// Literal first arguments of `t!(` calls in a source file.
fn lookups_in(content: &str, out: &mut BTreeSet<String>) {
    for (idx, _) in content.match_indices("t!(\"") {
        let rest = &content[idx + 4..];
        if let Some(end) = rest.find('"') {
            let key = &rest[..end];
            if key.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
                out.insert(key.to_string());
            }
        }
    }
}

fn source_lookups(root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(path) = pending.pop() {
        if path.is_dir() {
            let entries = fs::read_dir(&path).expect("readable source dir");
            pending.extend(entries.flatten().map(|e| e.path()));
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let content = fs::read_to_string(&path).expect("readable source file");
            lookups_in(&content, &mut found);
        }
    }
    found
}

#[test]
fn locales_match_fallback_ids() {
    let fallback = unique_ids("en-US", EN_US);
    assert!(!fallback.is_empty(), "fallback (en-US) defines no messages");

    let mut report = Vec::new();
    for (locale, src) in LOCALES {
        let ids = unique_ids(locale, src);
        let missing: Vec<_> = fallback.difference(&ids).collect();
        let extra: Vec<_> = ids.difference(&fallback).collect();
        if !missing.is_empty() {
            report.push(format!("{locale} missing: {missing:?}"));
        }
        if !extra.is_empty() {
            report.push(format!("{locale} has ids unknown to en-US: {extra:?}"));
        }
    }
    assert!(report.is_empty(), "{}", report.join("\n"));
}

#[test]
fn sources_only_look_up_defined_ids() {
    let src = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let used = source_lookups(&src);
    let fallback = unique_ids("en-US", EN_US);

    assert!(used.contains("nav-notes"), "scanner found no nav lookups");

    let undefined: Vec<_> = used.difference(&fallback).collect();
    assert!(undefined.is_empty(), "t!() ids missing from en-US: {undefined:?}");

    let unused: Vec<_> = fallback.difference(&used).collect();
    assert!(unused.is_empty(), "en-US ids never looked up: {unused:?}");
}

#[test]
fn scanner_reads_literal_first_argument() {
    let mut found = BTreeSet::new();
    lookups_in(r#"let a = t!("nav-home"); let b = crate::t!("search-clear", n = 1);"#, &mut found);
    assert_eq!(
        found.into_iter().collect::<Vec<_>>(),
        ["nav-home", "search-clear"]
    );
}
