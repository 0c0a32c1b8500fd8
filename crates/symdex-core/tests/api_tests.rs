//! Integration tests for the public symdex API.
//!
//! These tests load the Javadoc member index in `tests/fixtures` and verify
//! building, tiered search, link resolution, and concurrent use.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

use symdex_core::{
    build, load_file, load_index, load_javadoc_dir, parse_search_index, render_search_index, search, FallbackMode,
    IndexHandle, MatchTier, RankingConfig, SearchIndexKind, SymbolIndex, SymbolRecord,
    SymdexError,
};
use tempfile::TempDir;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/member-search-index.js")
}

fn fixture_index() -> SymbolIndex {
    load_index(&fixture_path()).expect("fixture should load")
}

fn labels(index: &SymbolIndex, term: &str) -> Vec<String> {
    index
        .search(term)
        .unwrap()
        .map(|hit| hit.record.label.clone())
        .collect()
}

fn example_corpus() -> Vec<SymbolRecord> {
    vec![
        SymbolRecord::new("a.b", "X", "foo()"),
        SymbolRecord::new("a.b", "X", "foobar()"),
        SymbolRecord::new("a.c", "Y", "bar()"),
    ]
}

#[test]
fn test_fixture_loads_all_members() {
    let index = fixture_index();
    let stats = index.stats();
    assert_eq!(stats.records, 84);
    assert_eq!(stats.containers, 0);
    assert_eq!(stats.members, 84);
    assert_eq!(stats.packages, 4);
}

#[test]
fn test_example_corpus() {
    let index = build(example_corpus()).unwrap();
    assert_eq!(labels(&index, "foo"), vec!["foo()", "foobar()"]);
    assert_eq!(labels(&index, "BAR")[0], "bar()");
    assert!(labels(&index, "zzz").is_empty());
}

#[test]
fn test_overloads_in_prefix_tier() {
    let index = fixture_index();
    let hits: Vec<_> = index.search("debug").unwrap().collect();
    let found: Vec<_> = hits
        .iter()
        .map(|hit| (hit.tier, hit.record.label.as_str()))
        .collect();
    assert_eq!(
        found,
        vec![
            (MatchTier::Prefix, "debug(CharSequence)"),
            (MatchTier::Prefix, "debug(CharSequence, Throwable)"),
            (MatchTier::Prefix, "debug(Throwable)"),
            (MatchTier::Substring, "getDebugLog()"),
            (MatchTier::Substring, "isDebugEnabled()"),
        ]
    );
}

#[test]
fn test_full_label_is_first_result() {
    let index = fixture_index();
    for record in index.records() {
        let first = index
            .search(&record.label)
            .unwrap()
            .next()
            .expect("a record's own label must match");
        assert!(first.record.label.eq_ignore_ascii_case(&record.label));
        assert_eq!(first.tier, MatchTier::Exact);
    }
}

#[test]
fn test_results_contain_term() {
    let index = fixture_index();
    let always = RankingConfig {
        container_fallback: FallbackMode::Always,
        ..RankingConfig::default()
    };
    for term in ["stub", "Context", "test", "admin", "(", "Log", "ep.sb"] {
        let folded = term.to_lowercase();
        for hit in index.search_with(term, &always).unwrap() {
            let record = hit.record;
            assert!(
                record.label.to_lowercase().contains(&folded)
                    || record.package_name.to_lowercase().contains(&folded)
                    || record.container_name.to_lowercase().contains(&folded),
                "{:?} does not contain {:?}",
                record,
                term
            );
        }
    }
}

#[test]
fn test_container_fallback() {
    let index = fixture_index();

    // Labels mention "stub", so the default ranking leaves container matches out.
    let default_hits: Vec<_> = index.search("stub").unwrap().collect();
    assert_eq!(default_hits.len(), 5);
    assert!(default_hits.iter().all(|hit| hit.tier.is_label_tier()));

    let ranking = RankingConfig {
        container_fallback: FallbackMode::Always,
        ..RankingConfig::default()
    };
    let all_hits: Vec<_> = index.search_with("stub", &ranking).unwrap().collect();
    assert!(all_hits.len() > default_hits.len());
    assert!(all_hits[5..]
        .iter()
        .all(|hit| hit.tier == MatchTier::Container));
    assert!(all_hits[5..]
        .iter()
        .all(|hit| hit.record.package_name.contains("stubs")));
}

#[test]
fn test_search_is_idempotent() {
    let index = fixture_index();
    let first: Vec<_> = search(&index, "new").unwrap().collect();
    let second: Vec<_> = search(&index, "new").unwrap().collect();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_empty_term_rejected() {
    let index = fixture_index();
    assert!(matches!(
        index.search(""),
        Err(SymdexError::InvalidQuery { .. })
    ));
    // Whitespace is a valid term: it matches labels with parameter lists.
    let hits: Vec<_> = index.search(" ").unwrap().collect();
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|hit| hit.record.label.contains(' ')));
}

#[test]
fn test_padded_label_is_first_result() {
    let index = build(vec![
        SymbolRecord::new("a.b", "X", "foo"),
        SymbolRecord::new("a.b", "X", "foo "),
        SymbolRecord::new("a.b", "X", " foo"),
    ])
    .unwrap();
    for record in index.records() {
        let first = index.search(&record.label).unwrap().next().unwrap();
        assert_eq!(first.record.label, record.label);
        assert_eq!(first.tier, MatchTier::Exact);
    }
}

#[test]
fn test_container_fallback_with_disabled_tiers() {
    let index = fixture_index();
    let ranking = RankingConfig {
        tiers: vec![MatchTier::Exact, MatchTier::Container],
        ..RankingConfig::default()
    };
    // "stub" appears in labels, but only in tiers this ranking leaves out.
    let hits: Vec<_> = index.search_with("stub", &ranking).unwrap().collect();
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|hit| hit.tier == MatchTier::Container));
    assert!(hits
        .iter()
        .all(|hit| hit.record.package_name.contains("stubs")));
}

#[test]
fn test_empty_corpus() {
    let index = build(Vec::new()).unwrap();
    assert_eq!(index.search("anything").unwrap().count(), 0);
}

#[test]
fn test_member_links() {
    let index = fixture_index();
    let hit = index.search("context(runtime").unwrap().next().unwrap();
    assert_eq!(hit.record.container_name, "Context");
    assert!(hit
        .record
        .href()
        .starts_with("com/tibco/ep/sb/services/stubs/admin/Context.html#%3Cinit%3E("));
    assert!(hit.record.decoded_reference().unwrap().starts_with("<init>("));

    // Members without a url use their label as the anchor.
    let cancel = index.find_exact("cancel()");
    assert_eq!(cancel.len(), 1);
    assert_eq!(
        cancel[0].href(),
        "com/tibco/ep/sb/services/stubs/admin/Command.html#cancel()"
    );
}

#[test]
fn test_export_round_trip() {
    let records = load_file(&fixture_path()).unwrap();
    let rendered = render_search_index(&records, SearchIndexKind::Member).unwrap();
    let reparsed = parse_search_index(&rendered, SearchIndexKind::Member).unwrap();
    assert_eq!(reparsed, records);
}

#[test]
fn test_export_mixed_directory() {
    let temp = TempDir::new().unwrap();
    std::fs::copy(fixture_path(), temp.path().join("member-search-index.js")).unwrap();
    std::fs::write(
        temp.path().join("type-search-index.js"),
        r#"typeSearchIndex = [{"p":"com.tibco.ep.buildmavenplugin","l":"SimulatedLog"}];updateSearchResults();"#,
    )
    .unwrap();
    std::fs::write(
        temp.path().join("package-search-index.js"),
        r#"packageSearchIndex = [{"l":"com.tibco.ep.buildmavenplugin"}];updateSearchResults();"#,
    )
    .unwrap();

    let records = load_javadoc_dir(temp.path()).unwrap();
    assert_eq!(records.len(), 86);

    let mut reparsed = Vec::new();
    for kind in [
        SearchIndexKind::Package,
        SearchIndexKind::Type,
        SearchIndexKind::Member,
    ] {
        let rendered = render_search_index(&records, kind).unwrap();
        reparsed.extend(parse_search_index(&rendered, kind).unwrap());
    }
    assert_eq!(reparsed, records);
}

#[test]
fn test_load_javadoc_directory() {
    let temp = TempDir::new().unwrap();
    std::fs::copy(fixture_path(), temp.path().join("member-search-index.js")).unwrap();
    std::fs::write(
        temp.path().join("type-search-index.js"),
        r#"typeSearchIndex = [{"l":"All Classes","u":"allclasses-index.html"},{"p":"com.tibco.ep.buildmavenplugin","l":"SimulatedLog"}];updateSearchResults();"#,
    )
    .unwrap();

    let index = load_index(temp.path()).unwrap();
    assert_eq!(index.len(), 85);

    let hits: Vec<_> = index.search("SimulatedLog").unwrap().collect();
    assert_eq!(hits[0].tier, MatchTier::Exact);
    assert!(hits[0].record.is_container());
    assert_eq!(
        hits[0].record.href(),
        "com/tibco/ep/buildmavenplugin/SimulatedLog.html"
    );
    // The type's members only match through their container, which the
    // default ranking skips once a label has matched.
    assert_eq!(hits.len(), 1);
}

#[test]
fn test_concurrent_queries() {
    let index = Arc::new(fixture_index());
    let expected: Vec<String> = labels(&index, "test");

    let workers: Vec<_> = (0..8)
        .map(|_| {
            let index = Arc::clone(&index);
            thread::spawn(move || labels(&index, "test"))
        })
        .collect();

    for worker in workers {
        assert_eq!(worker.join().unwrap(), expected);
    }
}

#[test]
fn test_handle_swaps_builds() {
    let handle = IndexHandle::new(build(example_corpus()).unwrap());
    let old = handle.current().unwrap();

    handle.replace(fixture_index()).unwrap();

    assert_eq!(labels(&old, "foo"), vec!["foo()", "foobar()"]);
    assert!(labels(&handle.current().unwrap(), "foo").is_empty());
}
